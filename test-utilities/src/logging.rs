#[ctor::ctor(anonymous)]
fn test_init() {
    // Rejected conversions in the library are logged at debug level
    let _ = env_logger::builder()
        .parse_env(env_logger::Env::default().default_filter_or("info,timespec=debug"))
        .format_level(true)
        .format_source_path(true)
        .format_module_path(false)
        .format_timestamp(None)
        // Panic messages go to stderr, keep log lines on stdout
        .target(env_logger::Target::Stdout)
        .is_test(true)
        .try_init();
}

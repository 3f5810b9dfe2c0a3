pub mod samples;

#[cfg(feature = "test_log")]
mod logging;

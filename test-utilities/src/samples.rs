//! Boundary values shared by the property tests.
//!
//! Values cluster around the places where normalization changes behavior:
//! zero, exact multiples of one second and one nanosecond on either side of
//! them, in both directions.

const NSEC_PER_SEC: i64 = 1_000_000_000;

/// Nanosecond inputs, including non-normalized ones of both signs.
pub const NANOSECONDS: &[i64] = &[
    0,
    1,
    -1,
    499_999_999,
    500_000_000,
    -500_000_000,
    NSEC_PER_SEC - 1,
    NSEC_PER_SEC,
    NSEC_PER_SEC + 1,
    -(NSEC_PER_SEC - 1),
    -NSEC_PER_SEC,
    -(NSEC_PER_SEC + 1),
    2 * NSEC_PER_SEC,
    -2 * NSEC_PER_SEC,
    1_500_000_000,
    -1_500_000_000,
    123_456_789_012,
    -123_456_789_012,
];

/// Seconds inputs, kept small enough that `sec * NSEC_PER_SEC` fits `i64`.
pub const SECONDS: &[i64] = &[0, 1, -1, 2, -2, 59, -59, 86_400, -86_400, 1_700_000_000, -1_700_000_000];

/// Nanosecond offsets for the unsigned add/sub operations.
pub const OFFSETS: &[u64] = &[
    0,
    1,
    999_999_999,
    1_000_000_000,
    1_000_000_001,
    2_500_000_000,
    86_400_000_000_000,
];

/// Every `(seconds, nanoseconds)` pair from [`SECONDS`] and [`NANOSECONDS`].
pub fn pairs() -> impl Iterator<Item = (i64, i64)> {
    SECONDS
        .iter()
        .flat_map(|&sec| NANOSECONDS.iter().map(move |&nsec| (sec, nsec)))
}

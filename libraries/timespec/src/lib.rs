//! # Timespec Library
//!
//! Exact, drift-free arithmetic over POSIX-style `timespec` values: a signed
//! seconds count plus a sub-second nanoseconds count. No floating point is
//! involved anywhere, so repeated additions and subtractions never accumulate
//! rounding error.
//!
//! Every arithmetic operation funnels through [`TimeSpec::normalize`], which
//! keeps the nanoseconds field in `[0, NSEC_PER_SEC)` and lets the seconds
//! field alone carry the sign:
//!
//! | total         | `tv_sec` | `tv_nsec`     |
//! |---------------|----------|---------------|
//! | `+1.5s`       | `1`      | `500_000_000` |
//! | `-0.5s`       | `-1`     | `500_000_000` |
//! | `-1.0s`       | `-1`     | `0`           |
//!
//! ## Examples
//!
//! ```
//! use timespec::{TimeSpec, NSEC_PER_SEC};
//!
//! let deadline = TimeSpec::new(2, 800_000_000) + TimeSpec::new(1, 500_000_000);
//! assert_eq!(deadline, TimeSpec::new_unchecked(4, 300_000_000));
//!
//! let before_epoch = TimeSpec::from_nanoseconds(-NSEC_PER_SEC / 2);
//! assert_eq!(before_epoch.tv_sec, -1);
//! assert_eq!(before_epoch.tv_nsec, 500_000_000);
//! assert!(!before_epoch.is_valid());
//! ```
//!
//! ## Feature Flags
//!
//! - `std`: Enables conversions to/from [`std::time::SystemTime`]
//! - `no_std`: Default feature for no-std environments

#![cfg_attr(not(feature = "std"), no_std)]

mod timespec;
pub use timespec::TimeSpec;

mod conversions;

/// Number of nanoseconds in one second
pub const NSEC_PER_SEC: i64 = 1_000_000_000;
/// Number of microseconds in one second
pub const USEC_PER_SEC: i64 = 1_000_000;
/// Number of milliseconds in one second
pub const MSEC_PER_SEC: i64 = 1_000;

// Standard library conversions (only when std feature is enabled)
#[cfg(feature = "std")]
mod std_conversions;

// Links the test logger
#[cfg(test)]
use test_utilities as _;

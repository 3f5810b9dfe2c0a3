use core::num::NonZeroU64;

use crate::NSEC_PER_SEC;

const WIDE_NSEC_PER_SEC: i128 = NSEC_PER_SEC as i128;

/// Narrow a seconds count to `i64` with the overflow semantics of `+`.
#[inline]
const fn narrow_seconds(sec: i128) -> i64 {
    let narrow = sec as i64;
    debug_assert!(narrow as i128 == sec, "attempt to normalize with seconds overflow");
    narrow
}

/// A time specification structure representing time as seconds and nanoseconds.
///
/// This structure is compatible with the POSIX `timespec` structure on 64-bit
/// targets. It is used both for timestamps (seconds since a caller-defined
/// epoch) and for signed durations.
///
/// A *normalized* value satisfies `0 <= tv_nsec < NSEC_PER_SEC`, and only
/// `tv_sec` is ever negative. All arithmetic in this type returns normalized
/// values. Comparison and equality work on the raw fields and do not normalize
/// their inputs.
///
/// # Examples
///
/// ```
/// use timespec::TimeSpec;
///
/// // Half a second before the epoch
/// let ts = TimeSpec::new(0, -500_000_000);
/// assert_eq!(ts.tv_sec, -1);
/// assert_eq!(ts.tv_nsec, 500_000_000);
///
/// let sum = ts + TimeSpec::new(1, 0);
/// assert_eq!(sum.to_nanoseconds(), 500_000_000);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpec {
    /// Seconds component of the time, carries the sign
    pub tv_sec: i64,
    /// Nanoseconds component of the time (0-999,999,999 when normalized)
    pub tv_nsec: i64,
}

impl TimeSpec {
    /// Build a normalized TimeSpec from arbitrary seconds and nanoseconds.
    ///
    /// `nsec` may be any magnitude and either sign, e.g. the sum of two
    /// nanosecond fields or a nanosecond offset wider than `i64`. The whole
    /// seconds contained in `nsec` are carried into the seconds field and the
    /// remainder is brought into `[0, NSEC_PER_SEC)` by borrowing one second
    /// when it is negative. The total value `sec * NSEC_PER_SEC + nsec` is
    /// preserved exactly.
    ///
    /// # Overflow
    /// The seconds field is not saturated. The carry is added in `i128`, so a
    /// wide `nsec` may bring `sec` back into range. A final seconds value that
    /// does not fit `i64` panics in debug builds and wraps modulo 2^64 in
    /// release builds, like the `+` operator.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// assert_eq!(TimeSpec::normalize(5, 1_500_000_000), TimeSpec::new_unchecked(6, 500_000_000));
    /// assert_eq!(TimeSpec::normalize(0, -500_000_000), TimeSpec::new_unchecked(-1, 500_000_000));
    /// assert_eq!(TimeSpec::normalize(0, -1_000_000_000), TimeSpec::new_unchecked(-1, 0));
    /// ```
    #[must_use]
    pub const fn normalize(sec: i64, nsec: i128) -> TimeSpec {
        // `/` truncates toward zero, so the remainder keeps the sign of `nsec`.
        let carry = nsec / WIDE_NSEC_PER_SEC;
        let mut rem = nsec - carry * WIDE_NSEC_PER_SEC;
        let mut sec = sec as i128 + carry;

        if rem < 0 {
            rem += WIDE_NSEC_PER_SEC;
            sec -= 1;
        }

        TimeSpec {
            tv_sec: narrow_seconds(sec),
            tv_nsec: rem as i64,
        }
    }

    /// Create a new TimeSpec with the given seconds and nanoseconds.
    ///
    /// # Arguments
    /// * `sec` - Seconds component
    /// * `nsec` - Nanoseconds component; normalized into [0, NSEC_PER_SEC)
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    /// let ts = TimeSpec::new(10, 500_000_000);
    /// assert_eq!(ts.tv_sec, 10);
    /// assert_eq!(ts.tv_nsec, 500_000_000);
    ///
    /// let ts2 = TimeSpec::new(5, -1_500_000_000);
    /// assert_eq!(ts2.tv_sec, 3);
    /// assert_eq!(ts2.tv_nsec, 500_000_000);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(sec: i64, nsec: i64) -> TimeSpec {
        TimeSpec::normalize(sec, nsec as i128)
    }

    /// Create a new TimeSpec with the given seconds and nanoseconds, without
    /// normalization.
    ///
    /// The result may violate the normalized form. Arithmetic on such a value
    /// is still value-correct, but [`TimeSpec::equal`] and
    /// [`TimeSpec::compare`] look at the raw fields.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(sec: i64, nsec: i64) -> TimeSpec {
        TimeSpec {
            tv_sec: sec,
            tv_nsec: nsec,
        }
    }

    /// Create a TimeSpec representing zero time.
    #[inline]
    #[must_use]
    pub const fn zero() -> TimeSpec {
        TimeSpec {
            tv_sec: 0,
            tv_nsec: 0,
        }
    }

    /// Create a TimeSpec from clock ticks and frequency.
    ///
    /// Converts a counter reading taken elsewhere; nothing is read here.
    /// Negative tick counts are floored, so `-1` tick at 1 kHz is
    /// `{ tv_sec: -1, tv_nsec: 999_000_000 }`. Sub-nanosecond fractions are
    /// truncated.
    ///
    /// # Examples
    /// ```
    /// use core::num::NonZeroU64;
    /// use timespec::TimeSpec;
    ///
    /// let freq = NonZeroU64::new(1_000_000).unwrap();
    /// let ts = TimeSpec::from_ticks(1_500_000, freq);
    /// assert_eq!(ts.tv_sec, 1);
    /// assert_eq!(ts.tv_nsec, 500_000_000);
    /// ```
    #[must_use]
    pub fn from_ticks(ticks: i64, freq: NonZeroU64) -> TimeSpec {
        let freq = freq.get() as i128;
        let ticks = ticks as i128;

        let sec = ticks.div_euclid(freq);
        let rem = ticks.rem_euclid(freq);

        TimeSpec::normalize(sec as i64, rem * WIDE_NSEC_PER_SEC / freq)
    }

    /// Compare the raw fields of two TimeSpecs.
    ///
    /// Two values that denote the same instant but are stored differently
    /// (one of them not normalized) are *not* equal.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    /// let a = TimeSpec::new_unchecked(1, 0);
    /// let b = TimeSpec::new_unchecked(0, 1_000_000_000);
    /// assert!(!a.equal(&b));
    /// assert!(a.equal(&TimeSpec::normalize(b.tv_sec, b.tv_nsec as i128)));
    /// ```
    #[inline]
    #[must_use]
    pub const fn equal(&self, other: &TimeSpec) -> bool {
        self.tv_sec == other.tv_sec && self.tv_nsec == other.tv_nsec
    }

    /// Three-way comparison of two TimeSpecs.
    ///
    /// Returns a negative number if `self < other`, zero if they are equal and
    /// a positive number if `self > other`. Only the sign is meaningful: when
    /// the seconds are equal the difference of the nanosecond fields is
    /// returned as is. Inputs are not normalized.
    ///
    /// The nanosecond difference saturates at the `i64` bounds, so the sign
    /// stays correct even for raw fields near `i64::MIN`/`i64::MAX`.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    /// assert!(TimeSpec::new(5, 100).compare(&TimeSpec::new(5, 200)) < 0);
    /// assert!(TimeSpec::new(6, 0).compare(&TimeSpec::new(5, 999_999_999)) > 0);
    /// ```
    #[must_use]
    pub const fn compare(&self, other: &TimeSpec) -> i64 {
        if self.tv_sec < other.tv_sec {
            return -1;
        }

        if self.tv_sec > other.tv_sec {
            return 1;
        }

        self.tv_nsec.saturating_sub(other.tv_nsec)
    }

    /// Check whether this TimeSpec is a valid timestamp.
    ///
    /// A valid timestamp has non-negative seconds and nanoseconds within one
    /// second. This is stricter than [`TimeSpec::is_normalized`]: a normalized
    /// negative duration such as `{ -5, 0 }` is not a valid timestamp.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    /// assert!(TimeSpec::new_unchecked(0, 999_999_999).is_valid());
    /// assert!(!TimeSpec::new_unchecked(0, 1_000_000_000).is_valid());
    /// assert!(!TimeSpec::new_unchecked(-1, 0).is_valid());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.tv_sec >= 0 && self.is_normalized()
    }

    /// Check whether the nanoseconds field is within `[0, NSEC_PER_SEC)`.
    ///
    /// Negative seconds are allowed, so this accepts signed durations.
    #[inline]
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        self.tv_nsec >= 0 && self.tv_nsec < NSEC_PER_SEC
    }

    /// Check if this TimeSpec represents zero time
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.tv_sec == 0 && self.tv_nsec == 0
    }

    /// Get the total time as a single nanosecond count.
    ///
    /// Well defined for any field values, but only meaningful for normalized
    /// ones. Exact whenever the total fits `i64` (about 292 years either side
    /// of zero); larger totals wrap.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    /// assert_eq!(TimeSpec::new(1, 500_000_000).to_nanoseconds(), 1_500_000_000);
    /// assert_eq!(TimeSpec::new(-1, 500_000_000).to_nanoseconds(), -500_000_000);
    /// ```
    #[inline]
    #[must_use]
    pub const fn to_nanoseconds(&self) -> i64 {
        self.total_nanoseconds_wide() as i64
    }

    /// Build a normalized TimeSpec from a single nanosecond count.
    ///
    /// Inverse of [`TimeSpec::to_nanoseconds`] for normalized values.
    #[inline]
    #[must_use]
    pub const fn from_nanoseconds(nsec: i64) -> TimeSpec {
        TimeSpec::normalize(0, nsec as i128)
    }

    /// Total nanoseconds without any range restriction.
    #[inline]
    pub(crate) const fn total_nanoseconds_wide(&self) -> i128 {
        self.tv_sec as i128 * WIDE_NSEC_PER_SEC + self.tv_nsec as i128
    }

    /// Add two TimeSpecs, returning a normalized result.
    ///
    /// Same as the `+` operator, usable in const context.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    /// let sum = TimeSpec::new(2, 800_000_000).add(TimeSpec::new(1, 500_000_000));
    /// assert_eq!(sum, TimeSpec::new_unchecked(4, 300_000_000));
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, other: TimeSpec) -> TimeSpec {
        TimeSpec::normalize(
            self.tv_sec + other.tv_sec,
            self.tv_nsec as i128 + other.tv_nsec as i128,
        )
    }

    /// Return `self - other`, normalized.
    #[inline]
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub const fn sub(self, other: TimeSpec) -> TimeSpec {
        TimeSpec::normalize(
            self.tv_sec - other.tv_sec,
            self.tv_nsec as i128 - other.tv_nsec as i128,
        )
    }

    /// Return this TimeSpec advanced by `nsec` nanoseconds.
    ///
    /// The receiver is taken by value; store the result to update a slot.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    /// let mut ts = TimeSpec::new(1, 500_000_000);
    /// ts = ts.add_nanoseconds(700_000_000);
    /// assert_eq!(ts.tv_sec, 2);
    /// assert_eq!(ts.tv_nsec, 200_000_000);
    /// ```
    #[inline]
    #[must_use]
    pub const fn add_nanoseconds(self, nsec: u64) -> TimeSpec {
        TimeSpec::normalize(self.tv_sec, self.tv_nsec as i128 + nsec as i128)
    }

    /// Return this TimeSpec moved back by `nsec` nanoseconds.
    ///
    /// The result may be negative; check [`TimeSpec::is_valid`] when a
    /// timestamp is expected.
    #[inline]
    #[must_use]
    pub const fn sub_nanoseconds(self, nsec: u64) -> TimeSpec {
        TimeSpec::normalize(self.tv_sec, self.tv_nsec as i128 - nsec as i128)
    }
}

impl core::ops::Add<TimeSpec> for TimeSpec {
    type Output = TimeSpec;

    fn add(self, other: TimeSpec) -> TimeSpec {
        TimeSpec::add(self, other)
    }
}

impl core::ops::AddAssign<TimeSpec> for TimeSpec {
    fn add_assign(&mut self, other: TimeSpec) {
        *self = TimeSpec::add(*self, other);
    }
}

impl core::ops::Sub<TimeSpec> for TimeSpec {
    type Output = TimeSpec;

    fn sub(self, other: TimeSpec) -> TimeSpec {
        TimeSpec::sub(self, other)
    }
}

impl core::ops::SubAssign<TimeSpec> for TimeSpec {
    fn sub_assign(&mut self, other: TimeSpec) {
        *self = TimeSpec::sub(*self, other);
    }
}


#[cfg(test)]
mod test_properties {
    use test_utilities::samples::{self, NANOSECONDS, OFFSETS, SECONDS};

    use super::TimeSpec;
    use crate::NSEC_PER_SEC;

    fn timespecs() -> impl Iterator<Item = TimeSpec> {
        samples::pairs().map(|(sec, nsec)| TimeSpec::new(sec, nsec))
    }

    #[test]
    fn test_normalize_keeps_nanoseconds_in_range() {
        for (sec, nsec) in samples::pairs() {
            let ts = TimeSpec::normalize(sec, nsec as i128);
            assert!(ts.is_normalized(), "normalize({sec}, {nsec}) = {ts:?}");
            assert!((0..NSEC_PER_SEC).contains(&ts.tv_nsec));
        }
    }

    #[test]
    fn test_normalize_preserves_total_value() {
        for (sec, nsec) in samples::pairs() {
            let ts = TimeSpec::normalize(sec, nsec as i128);
            assert_eq!(ts.to_nanoseconds(), sec * NSEC_PER_SEC + nsec, "{sec}, {nsec}");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for ts in timespecs() {
            assert_eq!(TimeSpec::normalize(ts.tv_sec, ts.tv_nsec as i128), ts);
        }
    }

    #[test]
    fn test_nanoseconds_round_trip() {
        for &nsec in NANOSECONDS {
            assert_eq!(TimeSpec::from_nanoseconds(nsec).to_nanoseconds(), nsec);
        }

        for ts in timespecs() {
            assert_eq!(TimeSpec::from_nanoseconds(ts.to_nanoseconds()), ts);
        }
    }

    #[test]
    fn test_add_is_commutative() {
        for a in timespecs() {
            for &sec in SECONDS {
                let b = TimeSpec::new(sec, 750_000_001);
                assert_eq!(a + b, b + a);
            }
        }
    }

    #[test]
    fn test_sub_of_self_is_zero() {
        for ts in timespecs() {
            assert_eq!(ts - ts, TimeSpec::zero());
        }

        for (sec, nsec) in samples::pairs() {
            let raw = TimeSpec::new_unchecked(sec, nsec);
            assert_eq!(raw - raw, TimeSpec::zero());
        }
    }

    #[test]
    fn test_compare_self_is_zero() {
        for ts in timespecs() {
            assert_eq!(ts.compare(&ts), 0);
            assert!(ts.equal(&ts));
        }
    }

    #[test]
    fn test_compare_sign_matches_total_order() {
        for a in timespecs() {
            for b in timespecs() {
                let expected = a.to_nanoseconds().cmp(&b.to_nanoseconds());
                assert_eq!(a.compare(&b).cmp(&0), expected, "{a:?} vs {b:?}");
                assert_eq!(a.cmp(&b), expected);
            }
        }
    }

    #[test]
    fn test_arithmetic_matches_nanosecond_arithmetic() {
        for a in timespecs() {
            for &nsec in NANOSECONDS {
                let b = TimeSpec::from_nanoseconds(nsec);

                let sum = a + b;
                let difference = a - b;

                assert!(sum.is_normalized());
                assert!(difference.is_normalized());
                assert_eq!(sum.to_nanoseconds(), a.to_nanoseconds() + nsec);
                assert_eq!(difference.to_nanoseconds(), a.to_nanoseconds() - nsec);
            }
        }
    }

    #[test]
    fn test_arithmetic_on_unnormalized_inputs_preserves_value() {
        for (sec, nsec) in samples::pairs() {
            let raw = TimeSpec::new_unchecked(sec, nsec);

            let sum = raw + TimeSpec::new(1, 0);
            assert!(sum.is_normalized());
            assert_eq!(sum.to_nanoseconds(), sec * NSEC_PER_SEC + nsec + NSEC_PER_SEC);
        }
    }

    #[test]
    fn test_nanosecond_offsets_match_nanosecond_arithmetic() {
        for ts in timespecs() {
            for &offset in OFFSETS {
                let later = ts.add_nanoseconds(offset);
                let earlier = ts.sub_nanoseconds(offset);

                assert!(later.is_normalized());
                assert!(earlier.is_normalized());
                assert_eq!(later.to_nanoseconds(), ts.to_nanoseconds() + offset as i64);
                assert_eq!(earlier.to_nanoseconds(), ts.to_nanoseconds() - offset as i64);
                assert_eq!(later.sub_nanoseconds(offset), ts);
            }
        }
    }

    #[test]
    fn test_validity_tracks_sign_of_normalized_values() {
        for ts in timespecs() {
            assert_eq!(ts.is_valid(), ts.to_nanoseconds() >= 0, "{ts:?}");
        }
    }
}

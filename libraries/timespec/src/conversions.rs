use core::time::Duration;

use crate::{TimeSpec, NSEC_PER_SEC};

/// Split an unsigned nanosecond magnitude into a Duration.
pub(crate) fn duration_from_nanoseconds(nanos: u128) -> Option<Duration> {
    let wide = NSEC_PER_SEC as u128;
    let secs = u64::try_from(nanos / wide).ok()?;

    Some(Duration::new(secs, (nanos % wide) as u32))
}

impl From<Duration> for TimeSpec {
    /// Durations longer than `i64::MAX` seconds saturate to the largest
    /// representable TimeSpec.
    fn from(duration: Duration) -> Self {
        match i64::try_from(duration.as_secs()) {
            Ok(secs) => TimeSpec::new_unchecked(secs, duration.subsec_nanos() as i64),
            Err(_) => {
                log::debug!("Saturating Duration too large for TimeSpec: {duration:?}");
                TimeSpec::new_unchecked(i64::MAX, NSEC_PER_SEC - 1)
            }
        }
    }
}

impl TryFrom<TimeSpec> for Duration {
    type Error = &'static str;

    /// Accepts non-normalized values as long as their total is non-negative.
    fn try_from(timespec: TimeSpec) -> Result<Self, Self::Error> {
        let total = timespec.total_nanoseconds_wide();

        if total < 0 {
            log::debug!("Rejecting negative TimeSpec as Duration: {timespec:?}");
            return Err("Cannot convert negative TimeSpec to Duration");
        }

        duration_from_nanoseconds(total as u128).ok_or_else(|| {
            log::debug!("TimeSpec does not fit in Duration: {timespec:?}");
            "TimeSpec too large to convert to Duration"
        })
    }
}

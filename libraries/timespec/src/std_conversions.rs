use crate::conversions::duration_from_nanoseconds;
use crate::TimeSpec;
use std::time::{SystemTime, UNIX_EPOCH};

impl From<SystemTime> for TimeSpec {
    /// Times before `UNIX_EPOCH` become negative, normalized values.
    fn from(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => TimeSpec::from(duration),
            Err(e) => TimeSpec::zero() - TimeSpec::from(e.duration()),
        }
    }
}

impl TryFrom<TimeSpec> for SystemTime {
    type Error = &'static str;

    fn try_from(timespec: TimeSpec) -> Result<Self, Self::Error> {
        let total = timespec.total_nanoseconds_wide();

        let offset = duration_from_nanoseconds(total.unsigned_abs());
        let system_time = match offset {
            Some(offset) if total >= 0 => UNIX_EPOCH.checked_add(offset),
            Some(offset) => UNIX_EPOCH.checked_sub(offset),
            None => None,
        };

        system_time.ok_or_else(|| {
            log::debug!("TimeSpec outside of SystemTime range: {timespec:?}");
            "TimeSpec out of SystemTime range"
        })
    }
}

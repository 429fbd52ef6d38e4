use crate::errors::TimeError;
use std::fmt;

pub const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Day/hour/minute/second breakdown of a playback duration, for display.
///
/// Immutable value type with no identity beyond equality. Reconstructing the
/// total seconds from the four fields and decomposing again is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DisplayTime {
    /// Break a millisecond duration into display fields.
    ///
    /// The sub-second remainder is discarded, not rounded.
    pub fn from_millis(millis: i64) -> Result<DisplayTime, TimeError> {
        if millis < 0 {
            return Err(TimeError::InvalidDuration { millis });
        }
        Self::from_seconds(millis / 1000)
    }

    /// Break a whole-second duration into display fields.
    pub fn from_seconds(total_seconds: i64) -> Result<DisplayTime, TimeError> {
        if total_seconds < 0 {
            return Err(TimeError::InvalidDuration {
                millis: total_seconds.saturating_mul(1000),
            });
        }

        let mut seconds = total_seconds;
        let days = seconds / SECONDS_PER_DAY;
        seconds %= SECONDS_PER_DAY;
        let hours = seconds / SECONDS_PER_HOUR;
        seconds %= SECONDS_PER_HOUR;
        let minutes = seconds / SECONDS_PER_MINUTE;
        seconds %= SECONDS_PER_MINUTE;

        Ok(DisplayTime {
            days,
            hours,
            minutes,
            seconds,
        })
    }

    /// Total whole seconds represented by the four fields.
    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl fmt::Display for DisplayTime {
    /// Zero days and hours are omitted entirely; minutes and seconds are
    /// always two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days != 0 {
            write!(f, "{}:", self.days)?;
        }
        if self.hours != 0 {
            write!(f, "{}:", self.hours)?;
        }
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

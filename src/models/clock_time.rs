//! Wall-clock times within a single day.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::duration::{Duration, parse_signed_hm};
use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day in the half-open range [00:00, 24:00).
///
/// Shifting a `ClockTime` by a [`Duration`] re-checks the range, so arithmetic
/// that would wrap past midnight fails instead of silently wrapping.
///
/// # Example
///
/// ```
/// use milog_engine::models::{ClockTime, Duration};
///
/// let start = ClockTime::new(9, 0).unwrap();
/// let end = start.add(Duration::hm(3, 30)).unwrap();
/// assert_eq!(end.to_string(), "12:30");
/// assert!(start.add(Duration::hm(15, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(Duration);

impl ClockTime {
    /// Midnight, the earliest representable time.
    pub const MIDNIGHT: ClockTime = ClockTime(Duration::ZERO);

    /// Creates a clock time from literal components.
    ///
    /// Meant for constants. Use [`ClockTime::new`] for runtime values.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is 24 or more or `minute` is 60 or more. In a const
    /// context this is a compile error.
    pub const fn hm(hour: u32, minute: u32) -> Self {
        assert!(hour < 24 && minute < 60, "clock time out of range");
        Self(Duration::hm(hour as i64, minute as i64))
    }

    /// Creates a clock time from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidClockTime`] if the time is not within
    /// [00:00, 24:00).
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if minute >= 60 {
            return Err(EngineError::InvalidClockTime {
                minutes: i64::from(hour) * 60 + i64::from(minute),
            });
        }
        Self::from_duration(Duration::hm(i64::from(hour), i64::from(minute)))
    }

    /// Creates a clock time from its offset after midnight.
    pub fn from_duration(offset: Duration) -> EngineResult<Self> {
        if (0..MINUTES_PER_DAY).contains(&offset.minutes()) {
            Ok(Self(offset))
        } else {
            Err(EngineError::InvalidClockTime {
                minutes: offset.minutes(),
            })
        }
    }

    /// Returns the offset after midnight.
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Shifts the time forward, failing if the result leaves the day.
    pub fn add(self, duration: Duration) -> EngineResult<Self> {
        let shifted = self.0.checked_add(duration).ok_or(EngineError::InvalidClockTime {
            minutes: self.0.minutes().saturating_add(duration.minutes()),
        })?;
        Self::from_duration(shifted)
    }

    /// Shifts the time backward, failing if the result leaves the day.
    pub fn subtract(self, duration: Duration) -> EngineResult<Self> {
        let shifted = self.0.checked_sub(duration).ok_or(EngineError::InvalidClockTime {
            minutes: self.0.minutes().saturating_sub(duration.minutes()),
        })?;
        Self::from_duration(shifted)
    }

    /// Returns true if `self` is strictly earlier than `other`.
    pub fn is_before(self, other: ClockTime) -> bool {
        self < other
    }

    /// Returns true if `self` is strictly later than `other`.
    pub fn is_after(self, other: ClockTime) -> bool {
        self > other
    }
}

/// The signed span between two times of day.
impl Sub for ClockTime {
    type Output = Duration;

    fn sub(self, rhs: ClockTime) -> Duration {
        self.0 - rhs.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0.minutes();
        write!(f, "{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let s = s.trim();
        if s.starts_with(['-', '+']) {
            return Err(EngineError::DurationParse {
                input: s.to_string(),
            });
        }
        let (_, minutes) = parse_signed_hm(s)?;
        Self::from_duration(Duration::from_minutes(minutes))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

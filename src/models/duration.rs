//! Signed, minute-granular durations.
//!
//! [`Duration`] is the unit every rule in the engine computes with: monthly
//! caps, transfers, pauses and worked time. Unlike `chrono::Duration` it has
//! no sub-minute part and renders as `[-]H:MM`.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// The sign of a [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Less than zero minutes.
    Negative,
    /// Exactly zero minutes.
    Zero,
    /// More than zero minutes.
    Positive,
}

/// A signed number of minutes, unbounded in either direction.
///
/// The canonical text form is `[-]H:MM`: hours have no fixed width, minutes
/// are always two digits.
///
/// The arithmetic operators behave like those of `i64` and overflow on
/// extreme values. Code combining durations taken from input uses
/// [`Duration::checked_add`] and [`Duration::checked_sub`].
///
/// # Example
///
/// ```
/// use milog_engine::models::Duration;
///
/// let shift = Duration::hm(8, 30);
/// let pause: Duration = "0:45".parse().unwrap();
/// assert_eq!((shift - pause).to_string(), "7:45");
/// assert_eq!((pause - shift).to_string(), "-7:45");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    minutes: i64,
}

impl Duration {
    /// The zero duration.
    pub const ZERO: Duration = Duration { minutes: 0 };

    /// Creates a duration from a signed number of minutes.
    pub const fn from_minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Creates a non-negative duration from hours and minutes.
    pub const fn hm(hours: i64, minutes: i64) -> Self {
        Self {
            minutes: hours * 60 + minutes,
        }
    }

    /// Returns the total number of minutes.
    pub const fn minutes(self) -> i64 {
        self.minutes
    }

    /// Compares two durations.
    pub fn compare(self, other: Duration) -> Ordering {
        self.cmp(&other)
    }

    /// Returns the sign of the duration.
    pub fn sign(self) -> Sign {
        match self.minutes.cmp(&0) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    /// Returns true if the duration is below zero.
    pub fn is_negative(self) -> bool {
        self.minutes < 0
    }

    /// Adds two durations, returning `None` if the result does not fit.
    pub fn checked_add(self, rhs: Duration) -> Option<Duration> {
        self.minutes.checked_add(rhs.minutes).map(Duration::from_minutes)
    }

    /// Subtracts `rhs`, returning `None` if the result does not fit.
    pub fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        self.minutes.checked_sub(rhs.minutes).map(Duration::from_minutes)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_minutes(self.minutes + rhs.minutes)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        self.minutes += rhs.minutes;
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_minutes(self.minutes - rhs.minutes)
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        self.minutes -= rhs.minutes;
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::from_minutes(-self.minutes)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Duration {
        iter.copied().sum()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { "-" } else { "" };
        let abs = self.minutes.unsigned_abs();
        write!(f, "{}{}:{:02}", sign, abs / 60, abs % 60)
    }
}

/// Splits `[+-]H:MM` into its sign and unsigned minute count.
pub(crate) fn parse_signed_hm(input: &str) -> EngineResult<(bool, i64)> {
    let parse_error = || EngineError::DurationParse {
        input: input.to_string(),
    };

    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let (hours, minutes) = rest.split_once(':').ok_or_else(parse_error)?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(hours) || minutes.len() != 2 || !digits(minutes) {
        return Err(parse_error());
    }

    let hours: i64 = hours.parse().map_err(|_| parse_error())?;
    let minutes: i64 = minutes.parse().map_err(|_| parse_error())?;
    if minutes >= 60 {
        return Err(parse_error());
    }

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(parse_error)?;
    Ok((negative, total))
}

impl FromStr for Duration {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let (negative, minutes) = parse_signed_hm(s.trim())?;
        Ok(Duration::from_minutes(if negative { -minutes } else { minutes }))
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(s: &str) -> Duration {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_pads_minutes_only() {
        assert_eq!(Duration::hm(0, 5).to_string(), "0:05");
        assert_eq!(Duration::hm(9, 0).to_string(), "9:00");
        assert_eq!(Duration::hm(123, 45).to_string(), "123:45");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Duration::from_minutes(-90).to_string(), "-1:30");
        assert_eq!(Duration::from_minutes(-5).to_string(), "-0:05");
    }

    #[test]
    fn test_parse_accepts_sign_and_wide_hours() {
        assert_eq!(d("40:00"), Duration::hm(40, 0));
        assert_eq!(d("-2:30"), Duration::from_minutes(-150));
        assert_eq!(d("+0:30"), Duration::hm(0, 30));
        assert_eq!(d("08:15"), Duration::hm(8, 15));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for input in ["", "8", "8:5", "8:005", "8:60", ":30", "-:30", "8h30", "a:00", "1:2b", "--1:00"] {
            assert!(
                matches!(input.parse::<Duration>(), Err(EngineError::DurationParse { .. })),
                "expected parse error for {input:?}"
            );
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(d("40:00") + d("1:00") - d("2:00"), d("39:00"));
        assert_eq!(d("0:30") - d("1:00"), d("-0:30"));
        assert_eq!(-d("1:15"), d("-1:15"));
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let huge = Duration::from_minutes(i64::MAX);
        assert_eq!(d("1:00").checked_add(d("0:30")), Some(d("1:30")));
        assert_eq!(d("1:00").checked_sub(d("1:30")), Some(d("-0:30")));
        assert_eq!(huge.checked_add(d("0:01")), None);
        assert_eq!((-huge).checked_sub(d("0:02")), None);
    }

    #[test]
    fn test_sum() {
        let parts = [d("1:00"), d("0:45"), d("-0:15")];
        assert_eq!(parts.iter().sum::<Duration>(), d("1:30"));
        assert_eq!(Vec::<Duration>::new().into_iter().sum::<Duration>(), Duration::ZERO);
    }

    #[test]
    fn test_sign_and_compare() {
        assert_eq!(d("-0:01").sign(), Sign::Negative);
        assert_eq!(Duration::ZERO.sign(), Sign::Zero);
        assert_eq!(d("0:01").sign(), Sign::Positive);
        assert_eq!(d("9:00").compare(d("10:00")), Ordering::Less);
        assert_eq!(d("10:00").compare(d("10:00")), Ordering::Equal);
        assert!(d("-1:00").is_negative());
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&d("-3:07")).unwrap();
        assert_eq!(json, "\"-3:07\"");
        let parsed: Duration = serde_json::from_str("\"12:00\"").unwrap();
        assert_eq!(parsed, Duration::hm(12, 0));
        assert!(serde_json::from_str::<Duration>("\"12\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_text_form_parses_back(minutes in -1_000_000i64..1_000_000) {
            let duration = Duration::from_minutes(minutes);
            prop_assert_eq!(duration.to_string().parse::<Duration>().unwrap(), duration);
        }

        #[test]
        fn prop_subtract_undoes_add(a in -100_000i64..100_000, b in -100_000i64..100_000) {
            let (a, b) = (Duration::from_minutes(a), Duration::from_minutes(b));
            prop_assert_eq!(a + b - b, a);
            prop_assert_eq!((a - b).sign(), match a.cmp(&b) {
                Ordering::Less => Sign::Negative,
                Ordering::Equal => Sign::Zero,
                Ordering::Greater => Sign::Positive,
            });
        }
    }
}

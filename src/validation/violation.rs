//! Rule violations.
//!
//! A [`Violation`] is a rule finding plus the typed values a message needs.
//! Nothing here renders text; that is the job of
//! [`crate::messages::MessageCatalog`].

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::Duration;

/// The kind of a [`Violation`], used as the key of message templates.
///
/// Variants are declared in rule order, so `Ord` and every `BTreeMap` keyed by
/// kind iterate in the order the rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    /// Monthly working time exceeds the corrected maximum.
    TotalTimeExceedance,
    /// Working time on one day exceeds the daily maximum.
    DayTimeExceedance,
    /// Too little pause was taken on a day.
    TimePause,
    /// An entry starts too early or ends too late.
    TimeOutOfBounds,
    /// An entry falls on a Sunday.
    TimeSunday,
    /// An entry falls on a public holiday.
    TimeHoliday,
    /// Two entries on the same day overlap.
    TimeOverlap,
    /// More entries than the export format has rows for.
    RowNumExceedance,
    /// The department name is empty.
    NameMissing,
}

impl ViolationKind {
    /// Every kind, in rule order.
    pub const ALL: [ViolationKind; 9] = [
        ViolationKind::TotalTimeExceedance,
        ViolationKind::DayTimeExceedance,
        ViolationKind::TimePause,
        ViolationKind::TimeOutOfBounds,
        ViolationKind::TimeSunday,
        ViolationKind::TimeHoliday,
        ViolationKind::TimeOverlap,
        ViolationKind::RowNumExceedance,
        ViolationKind::NameMissing,
    ];

    /// The stable code of the kind.
    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::TotalTimeExceedance => "TOTAL_TIME_EXCEEDANCE",
            ViolationKind::DayTimeExceedance => "DAY_TIME_EXCEEDANCE",
            ViolationKind::TimePause => "TIME_PAUSE",
            ViolationKind::TimeOutOfBounds => "TIME_OUTOFBOUNDS",
            ViolationKind::TimeSunday => "TIME_SUNDAY",
            ViolationKind::TimeHoliday => "TIME_HOLIDAY",
            ViolationKind::TimeOverlap => "TIME_OVERLAP",
            ViolationKind::RowNumExceedance => "ROWNUM_EXCEEDANCE",
            ViolationKind::NameMissing => "NAME_MISSING",
        }
    }

    /// Looks a kind up by its code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl Serialize for ViolationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ViolationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown violation kind `{code}`"))
        })
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A typed argument of a violation, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ViolationArgument {
    /// A length of time.
    Duration(Duration),
    /// A calendar day.
    Date(NaiveDate),
    /// A count.
    Count(usize),
}

/// A single rule finding.
///
/// # Example
///
/// ```
/// use milog_engine::models::Duration;
/// use milog_engine::validation::{Violation, ViolationArgument, ViolationKind};
///
/// let violation = Violation::TotalTimeExceedance {
///     max: Duration::hm(40, 0),
///     excess: Duration::hm(0, 1),
/// };
/// assert_eq!(violation.kind(), ViolationKind::TotalTimeExceedance);
/// assert_eq!(violation.arguments()[1], ViolationArgument::Duration(Duration::hm(0, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "arguments")]
pub enum Violation {
    /// Monthly working time exceeds the corrected maximum.
    #[serde(rename = "TOTAL_TIME_EXCEEDANCE")]
    TotalTimeExceedance {
        /// The contractual monthly working time.
        max: Duration,
        /// How far the worked time exceeds the corrected maximum.
        excess: Duration,
    },
    /// Working time on `date` exceeds `max`.
    #[serde(rename = "DAY_TIME_EXCEEDANCE")]
    DayTimeExceedance {
        /// The daily maximum.
        max: Duration,
        /// The offending day.
        date: NaiveDate,
    },
    /// Too little pause on `date`.
    #[serde(rename = "TIME_PAUSE")]
    TimePause {
        /// The offending day.
        date: NaiveDate,
    },
    /// An entry on `date` lies outside the permitted hours.
    #[serde(rename = "TIME_OUTOFBOUNDS")]
    TimeOutOfBounds {
        /// The day of the entry.
        date: NaiveDate,
    },
    /// An entry falls on a Sunday.
    #[serde(rename = "TIME_SUNDAY")]
    TimeSunday {
        /// The day of the entry.
        date: NaiveDate,
    },
    /// An entry falls on a public holiday.
    #[serde(rename = "TIME_HOLIDAY")]
    TimeHoliday {
        /// The day of the entry.
        date: NaiveDate,
    },
    /// Two entries on `date` overlap.
    #[serde(rename = "TIME_OVERLAP")]
    TimeOverlap {
        /// The shared day.
        date: NaiveDate,
    },
    /// The sheet holds more entries than the export format has rows.
    #[serde(rename = "ROWNUM_EXCEEDANCE")]
    RowNumExceedance {
        /// The row limit.
        max_rows: usize,
    },
    /// The department name is empty.
    #[serde(rename = "NAME_MISSING")]
    NameMissing,
}

impl Violation {
    /// The kind of this violation.
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::TotalTimeExceedance { .. } => ViolationKind::TotalTimeExceedance,
            Violation::DayTimeExceedance { .. } => ViolationKind::DayTimeExceedance,
            Violation::TimePause { .. } => ViolationKind::TimePause,
            Violation::TimeOutOfBounds { .. } => ViolationKind::TimeOutOfBounds,
            Violation::TimeSunday { .. } => ViolationKind::TimeSunday,
            Violation::TimeHoliday { .. } => ViolationKind::TimeHoliday,
            Violation::TimeOverlap { .. } => ViolationKind::TimeOverlap,
            Violation::RowNumExceedance { .. } => ViolationKind::RowNumExceedance,
            Violation::NameMissing => ViolationKind::NameMissing,
        }
    }

    /// The arguments of this violation, in template placeholder order.
    pub fn arguments(&self) -> Vec<ViolationArgument> {
        use ViolationArgument as Arg;

        match *self {
            Violation::TotalTimeExceedance { max, excess } => {
                vec![Arg::Duration(max), Arg::Duration(excess)]
            }
            Violation::DayTimeExceedance { max, date } => vec![Arg::Duration(max), Arg::Date(date)],
            Violation::TimeOutOfBounds { date }
            | Violation::TimeSunday { date }
            | Violation::TimeHoliday { date }
            | Violation::TimePause { date }
            | Violation::TimeOverlap { date } => vec![Arg::Date(date)],
            Violation::RowNumExceedance { max_rows } => vec![Arg::Count(max_rows)],
            Violation::NameMissing => vec![],
        }
    }
}

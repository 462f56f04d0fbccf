//! Public holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday as reported by a holiday calendar.
///
/// # Example
///
/// ```
/// use milog_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday::new(NaiveDate::from_ymd_opt(2019, 12, 25).unwrap(), "1. Weihnachtstag");
/// assert_eq!(holiday.description, "1. Weihnachtstag");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub description: String,
}

impl Holiday {
    /// Creates a new holiday.
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }
}

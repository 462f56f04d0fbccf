//! In-memory holiday table.

use chrono::NaiveDate;

use super::{HolidayFetchError, HolidayProvider};
use crate::models::Holiday;

/// A fixed list of holidays that never touches the network.
///
/// # Example
///
/// ```
/// use milog_engine::holiday::{FixedHolidays, HolidayProvider};
/// use milog_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let christmas = NaiveDate::from_ymd_opt(2019, 12, 25).unwrap();
/// let holidays = FixedHolidays::new([Holiday::new(christmas, "1. Weihnachtstag")]);
/// assert!(holidays.is_holiday(christmas).await.unwrap());
/// # });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHolidays {
    holidays: Vec<Holiday>,
}

impl FixedHolidays {
    /// Creates a table from the given holidays.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut holidays: Vec<Holiday> = holidays.into_iter().collect();
        holidays.sort_by_key(|h| h.date);
        Self { holidays }
    }

    /// A table without any holidays.
    pub fn none() -> Self {
        Self::default()
    }
}

impl HolidayProvider for FixedHolidays {
    async fn is_holiday(&self, date: NaiveDate) -> Result<bool, HolidayFetchError> {
        Ok(self.holidays.iter().any(|h| h.date == date))
    }

    async fn holidays(&self) -> Result<&[Holiday], HolidayFetchError> {
        Ok(&self.holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_holidays_are_sorted() {
        let table = FixedHolidays::new([
            Holiday::new(date(2019, 12, 25), "1. Weihnachtstag"),
            Holiday::new(date(2019, 1, 1), "Neujahrstag"),
        ]);
        let dates: Vec<_> = table.holidays().await.unwrap().iter().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2019, 1, 1), date(2019, 12, 25)]);
    }

    #[tokio::test]
    async fn test_empty_table_has_no_holidays() {
        let table = FixedHolidays::none();
        assert!(!table.is_holiday(date(2019, 12, 25)).await.unwrap());
        assert!(table.holidays().await.unwrap().is_empty());
    }
}

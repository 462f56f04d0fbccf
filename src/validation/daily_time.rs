//! Daily working time check.

use super::Violation;
use super::day_summary::summarize_days;
use crate::models::{Duration, TimeSheet};

/// Default maximum working time on a single day.
pub const DEFAULT_DAILY_MAX_WORKING_TIME: Duration = Duration::hm(10, 0);

/// Reports every day whose summed working time exceeds `max`.
///
/// Vacation entries are not counted. One violation per offending day, in
/// date order.
pub fn check_daily_time(sheet: &TimeSheet, max: Duration) -> Vec<Violation> {
    summarize_days(sheet.entries())
        .into_iter()
        .filter(|day| day.working_time > max)
        .map(|day| Violation::DayTimeExceedance {
            max,
            date: day.date,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{date, entry, sheet, vacation};

    #[test]
    fn test_exactly_ten_hours_is_compliant() {
        let sheet = sheet(vec![entry(4, "07:00", "17:30", "0:30")]);
        assert!(check_daily_time(&sheet, DEFAULT_DAILY_MAX_WORKING_TIME).is_empty());
    }

    #[test]
    fn test_split_day_over_cap_reported_once() {
        let sheet = sheet(vec![
            entry(4, "06:00", "12:00", "0:00"),
            entry(4, "13:00", "18:01", "0:00"),
            entry(5, "06:00", "12:00", "0:00"),
        ]);
        assert_eq!(
            check_daily_time(&sheet, DEFAULT_DAILY_MAX_WORKING_TIME),
            vec![Violation::DayTimeExceedance {
                max: DEFAULT_DAILY_MAX_WORKING_TIME,
                date: date(4),
            }]
        );
    }

    #[test]
    fn test_each_offending_day_reported_in_order() {
        let sheet = sheet(vec![
            entry(7, "06:00", "17:00", "0:00"),
            entry(5, "06:00", "17:00", "0:00"),
        ]);
        let dates: Vec<_> = check_daily_time(&sheet, DEFAULT_DAILY_MAX_WORKING_TIME)
            .into_iter()
            .map(|v| match v {
                Violation::DayTimeExceedance { date, .. } => date,
                other => panic!("unexpected violation {other:?}"),
            })
            .collect();
        assert_eq!(dates, vec![date(5), date(7)]);
    }

    #[test]
    fn test_vacation_not_counted() {
        let sheet = sheet(vec![vacation(4, "06:00", "12:00"), entry(4, "12:00", "18:00", "0:00")]);
        assert!(check_daily_time(&sheet, DEFAULT_DAILY_MAX_WORKING_TIME).is_empty());
    }

    #[test]
    fn test_custom_cap() {
        let sheet = sheet(vec![entry(4, "08:00", "16:01", "0:00")]);
        assert_eq!(check_daily_time(&sheet, Duration::hm(8, 0)).len(), 1);
    }
}

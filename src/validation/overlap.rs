//! Overlapping entries check.

use super::Violation;
use crate::models::TimeSheet;

/// Reports adjacent entries on the same day that overlap.
///
/// Relies on the sheet's (date, start) ordering: each entry is compared with
/// its successor only. Touching entries (end equal to the next start) do not
/// overlap.
pub fn check_overlaps(sheet: &TimeSheet) -> Vec<Violation> {
    sheet
        .entries()
        .windows(2)
        .filter(|pair| pair[0].date() == pair[1].date() && pair[0].end().is_after(pair[1].start()))
        .map(|pair| Violation::TimeOverlap {
            date: pair[0].date(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{date, entry, sheet};

    #[test]
    fn test_overlap_reported_once() {
        let sheet = sheet(vec![
            entry(4, "10:30", "12:00", "0:00"),
            entry(4, "09:00", "11:00", "0:00"),
        ]);
        assert_eq!(check_overlaps(&sheet), vec![Violation::TimeOverlap { date: date(4) }]);
    }

    #[test]
    fn test_touching_entries_do_not_overlap() {
        let sheet = sheet(vec![
            entry(4, "09:00", "11:00", "0:00"),
            entry(4, "11:00", "12:00", "0:00"),
        ]);
        assert!(check_overlaps(&sheet).is_empty());
    }

    #[test]
    fn test_gap_between_entries() {
        let sheet = sheet(vec![
            entry(4, "09:00", "10:00", "0:00"),
            entry(4, "10:30", "12:00", "0:00"),
        ]);
        assert!(check_overlaps(&sheet).is_empty());
    }

    #[test]
    fn test_different_days_never_overlap() {
        let sheet = sheet(vec![
            entry(4, "09:00", "18:00", "0:45"),
            entry(5, "08:00", "09:00", "0:00"),
        ]);
        assert!(check_overlaps(&sheet).is_empty());
    }

    #[test]
    fn test_one_violation_per_adjacent_pair() {
        let sheet = sheet(vec![
            entry(4, "09:00", "11:00", "0:00"),
            entry(4, "10:00", "12:00", "0:00"),
            entry(4, "11:30", "13:00", "0:00"),
        ]);
        assert_eq!(check_overlaps(&sheet).len(), 2);
    }
}

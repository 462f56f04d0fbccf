//! Document-level checks: row count and department name.

use super::Violation;
use crate::models::TimeSheet;

/// Reports when the sheet has more entries than `max_rows`.
pub fn check_row_count(sheet: &TimeSheet, max_rows: usize) -> Option<Violation> {
    (sheet.entries().len() > max_rows).then_some(Violation::RowNumExceedance { max_rows })
}

/// Reports when the department name is empty.
pub fn check_department_name(sheet: &TimeSheet) -> Option<Violation> {
    (!sheet.profession().has_department()).then_some(Violation::NameMissing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{entry, sheet, sheet_with};

    fn rows(count: u32) -> Vec<crate::models::Entry> {
        (0..count)
            .map(|i| {
                let start = format!("{:02}:00", 6 + i % 16);
                let end = format!("{:02}:30", 6 + i % 16);
                entry(4 + i / 16, &start, &end, "0:00")
            })
            .collect()
    }

    #[test]
    fn test_row_limit_is_inclusive() {
        assert_eq!(check_row_count(&sheet(rows(20)), 20), None);
        assert_eq!(
            check_row_count(&sheet(rows(21)), 20),
            Some(Violation::RowNumExceedance { max_rows: 20 })
        );
        assert_eq!(check_row_count(&sheet(rows(21)), 22), None);
    }

    #[test]
    fn test_department_name_presence() {
        assert_eq!(check_department_name(&sheet(vec![])), None);
        assert_eq!(
            check_department_name(&sheet_with(vec![], "40:00", "0:00", "0:00", "")),
            Some(Violation::NameMissing)
        );
    }
}

//! Sunday and public holiday check.

use chrono::Weekday;
use tracing::warn;

use super::Violation;
use crate::error::FatalValidationError;
use crate::holiday::HolidayProvider;
use crate::models::TimeSheet;

/// Reports entries on Sundays and public holidays.
///
/// A Sunday entry is reported as a Sunday only; its date is never sent to
/// the holiday provider. Every other entry is looked up.
///
/// # Errors
///
/// Returns [`FatalValidationError`] as soon as the provider cannot answer
/// for some date. Violations found so far are discarded.
pub async fn check_working_days<H: HolidayProvider>(
    sheet: &TimeSheet,
    holidays: &H,
) -> Result<Vec<Violation>, FatalValidationError> {
    let mut violations = Vec::new();

    for entry in sheet.entries() {
        let date = entry.date();
        if entry.day_of_week() == Weekday::Sun {
            violations.push(Violation::TimeSunday { date });
            continue;
        }

        let is_holiday = holidays.is_holiday(date).await.map_err(|err| {
            warn!(%date, error = %err, "Holiday lookup failed, aborting check");
            FatalValidationError::new(date, &err)
        })?;
        if is_holiday {
            violations.push(Violation::TimeHoliday { date });
        }
    }

    Ok(violations)
}

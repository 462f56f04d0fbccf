//! Per-day aggregation of worked entries.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Duration, Entry};

/// Totals of all non-vacation entries on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    /// The day.
    pub date: NaiveDate,
    /// Sum of working time (span minus pause).
    pub working_time: Duration,
    /// Sum of `end - start`, pauses included.
    pub span: Duration,
    /// Sum of pauses taken.
    pub pause: Duration,
}

/// Groups non-vacation entries by date, in ascending date order.
pub fn summarize_days(entries: &[Entry]) -> Vec<DaySummary> {
    let mut days: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();

    for entry in entries.iter().filter(|e| !e.is_vacation()) {
        let day = days.entry(entry.date()).or_insert(DaySummary {
            date: entry.date(),
            working_time: Duration::ZERO,
            span: Duration::ZERO,
            pause: Duration::ZERO,
        });
        day.working_time += entry.working_time();
        day.span += entry.span();
        day.pause += entry.pause();
    }

    days.into_values().collect()
}

// Date handling for module rows.
//
// Purpose
// - Parse the timestamp strings the studio API emits.
// - Keep only rows that end after the configured cutoff.

use crate::modules::exam_modules::core::row::ModuleRow;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Accepts RFC 3339, offset-less date-times and plain dates. Offset-less input is read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Rows whose end date is strictly after `cutoff`. Unparseable end dates are dropped.
pub fn retain_after_cutoff(rows: &[ModuleRow], cutoff: DateTime<Utc>) -> Vec<ModuleRow> {
    rows.iter()
        .filter(|row| row.ends_at().is_some_and(|end| end > cutoff))
        .cloned()
        .collect()
}

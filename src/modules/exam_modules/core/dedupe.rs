use crate::modules::exam_modules::core::row::ModuleRow;
use std::collections::HashSet;

/// Collapse rows sharing a display identity, keeping the first one seen.
///
/// Works on borrowed rows so the collapsed view can never reach the write path.
pub fn dedupe_by_display_identity<'a, I>(rows: I) -> Vec<&'a ModuleRow>
where
    I: IntoIterator<Item = &'a ModuleRow>,
{
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(row.display_identity()))
        .collect()
}

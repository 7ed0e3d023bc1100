// Search, column filters, sorting and paging over the date-filtered rows.
//
// Purpose
// - Turn the committed search text and filter selections into the rows a table shows.
//
// Responsibilities
// - Narrow by group name search, then collapse display duplicates, then apply column filters.
// - Sort by parsed start or end date and cut one page.
//
// Boundaries
// - Works on borrowed rows. Nothing here mutates the row set.

use crate::modules::exam_modules::core::dedupe::dedupe_by_display_identity;
use crate::modules::exam_modules::core::row::ModuleRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowQuery {
    /// Committed group name search. Empty means no search.
    pub search_text: String,
    /// Accepted program names. Empty means every program.
    pub programs: Vec<String>,
    /// Single-select survey filter. `None` means both values.
    pub survey: Option<bool>,
    /// Accepted exam values. Empty means both values.
    pub exam: Vec<bool>,
}

impl Default for RowQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            programs: Vec::new(),
            survey: Some(false),
            exam: Vec::new(),
        }
    }
}

impl RowQuery {
    pub fn matches_search(&self, row: &ModuleRow) -> bool {
        self.search_text.is_empty()
            || row
                .class_name
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }

    pub fn matches_filters(&self, row: &ModuleRow) -> bool {
        let program_ok = self.programs.is_empty() || self.programs.contains(&row.program_name);
        let survey_ok = self.survey.is_none_or(|survey| row.survey == survey);
        let exam_ok = self.exam.is_empty() || self.exam.contains(&row.exam);
        program_ok && survey_ok && exam_ok
    }

    pub fn apply<'a>(&self, rows: &'a [ModuleRow]) -> Vec<&'a ModuleRow> {
        let narrowed = rows.iter().filter(|row| self.matches_search(row));
        dedupe_by_display_identity(narrowed)
            .into_iter()
            .filter(|row| self.matches_filters(row))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    StartDate,
    EndDate,
}

impl SortField {
    pub fn timestamp(&self, row: &ModuleRow) -> Option<DateTime<Utc>> {
        match self {
            SortField::StartDate => row.starts_at(),
            SortField::EndDate => row.ends_at(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

/// Stable sort on the parsed timestamp. Unparseable dates sort before any date.
pub fn sort_rows(rows: &mut [&ModuleRow], spec: SortSpec) {
    rows.sort_by(|a, b| {
        let ordering = spec.field.timestamp(a).cmp(&spec.field.timestamp(b));
        match spec.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub size: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn page_of<'a>(rows: &[&'a ModuleRow], page: Page) -> Vec<&'a ModuleRow> {
    let start = page.number.saturating_sub(1).saturating_mul(page.size);
    if start >= rows.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page.size).min(rows.len());
    rows[start..end].to_vec()
}

/// Distinct program names in first-seen order.
pub fn distinct_program_names(rows: &[ModuleRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.program_name.as_str()))
        .map(|row| row.program_name.clone())
        .collect()
}

// State behind the exam module table.
//
// Purpose
// - Own the row sets and the committed query, and expose the only ways to change them.
//
// Responsibilities
// - Keep the full flattened set (program filter options) and the date-filtered
//   set (everything else).
// - Apply optimistic flag toggles to the date-filtered set by (class_id, module_id).
// - Project displayed rows: search, dedupe, column filters, sort, page.
//
// Boundaries
// - No input or output. Handlers share it through a `ViewModelHandle` and never hold
//   the lock across a network call.

use crate::modules::exam_modules::core::columns::{ColumnDescriptor, columns};
use crate::modules::exam_modules::core::date_filter::retain_after_cutoff;
use crate::modules::exam_modules::core::flatten::flatten_modules;
use crate::modules::exam_modules::core::payload::ClassModulePayload;
use crate::modules::exam_modules::core::row::{Flag, ModuleRow, RowKey};
use crate::modules::exam_modules::core::row_query::{
    Page, RowQuery, SortSpec, distinct_program_names, page_of, sort_rows,
};
use crate::modules::exam_modules::core::visibility::{
    exam_control_visible, survey_control_visible,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type ViewModelHandle = Arc<RwLock<ExamModuleViewModel>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "message")]
pub enum ViewStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedRow {
    #[serde(flatten)]
    pub row: ModuleRow,
    pub row_key: String,
    pub survey_control: bool,
    pub exam_control: bool,
}

impl From<&ModuleRow> for DisplayedRow {
    fn from(row: &ModuleRow) -> Self {
        Self {
            row_key: row.table_key(),
            survey_control: survey_control_visible(&row.program_name),
            exam_control: exam_control_visible(&row.program_name),
            row: row.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowsView {
    pub status: ViewStatus,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub rows: Vec<DisplayedRow>,
    pub program_options: Vec<String>,
}

#[derive(Debug)]
pub struct ExamModuleViewModel {
    cutoff: DateTime<Utc>,
    status: ViewStatus,
    all_rows: Vec<ModuleRow>,
    filtered_rows: Vec<ModuleRow>,
    query: RowQuery,
}

impl ExamModuleViewModel {
    pub fn new(cutoff: DateTime<Utc>) -> Self {
        Self {
            cutoff,
            status: ViewStatus::Loading,
            all_rows: Vec::new(),
            filtered_rows: Vec::new(),
            query: RowQuery::default(),
        }
    }

    pub fn into_handle(self) -> ViewModelHandle {
        Arc::new(RwLock::new(self))
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn all_rows(&self) -> &[ModuleRow] {
        &self.all_rows
    }

    pub fn filtered_rows(&self) -> &[ModuleRow] {
        &self.filtered_rows
    }

    pub fn query(&self) -> &RowQuery {
        &self.query
    }

    pub fn find(&self, key: RowKey) -> Option<&ModuleRow> {
        self.filtered_rows.iter().find(|row| row.key() == key)
    }

    pub fn begin_loading(&mut self) {
        self.status = ViewStatus::Loading;
    }

    /// Replace both row sets from a fresh payload. The committed query survives.
    pub fn load(&mut self, payload: &[ClassModulePayload]) {
        self.all_rows = flatten_modules(payload);
        let filtered = retain_after_cutoff(&self.all_rows, self.cutoff);
        self.set_filtered_rows(filtered);
        self.status = ViewStatus::Ready;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = ViewStatus::Failed(message.into());
    }

    pub fn set_filtered_rows(&mut self, rows: Vec<ModuleRow>) {
        self.filtered_rows = rows;
    }

    /// Set `flag` to `value` on the row keyed by `key`. Returns the updated row, or
    /// `None` when the key is not in the date-filtered set.
    pub fn apply_flag_toggle(&mut self, key: RowKey, flag: Flag, value: bool) -> Option<ModuleRow> {
        let mut updated = None;
        for row in self.filtered_rows.iter_mut().filter(|row| row.key() == key) {
            row.set_flag(flag, value);
            updated.get_or_insert_with(|| row.clone());
        }
        updated
    }

    pub fn commit_search(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
    }

    pub fn reset_search(&mut self) {
        self.query.search_text.clear();
    }

    pub fn set_filters(&mut self, programs: Vec<String>, survey: Option<bool>, exam: Vec<bool>) {
        self.query.programs = programs;
        self.query.survey = survey;
        self.query.exam = exam;
    }

    /// Program names from the full set, including ones the cutoff hides.
    pub fn program_name_options(&self) -> Vec<String> {
        distinct_program_names(&self.all_rows)
    }

    pub fn columns(&self) -> Vec<ColumnDescriptor> {
        columns(&self.program_name_options())
    }

    pub fn displayed_rows(&self, sort: Option<SortSpec>, page: Page) -> RowsView {
        let mut selected = self.query.apply(&self.filtered_rows);
        if let Some(spec) = sort {
            sort_rows(&mut selected, spec);
        }
        RowsView {
            status: self.status.clone(),
            total: selected.len(),
            page: page.number.max(1),
            page_size: page.size,
            rows: page_of(&selected, page)
                .into_iter()
                .map(DisplayedRow::from)
                .collect(),
            program_options: self.program_name_options(),
        }
    }
}

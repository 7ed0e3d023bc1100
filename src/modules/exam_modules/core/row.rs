// One class/module pair, the unit the table renders and the unit the remote sheets are keyed on.
//
// Responsibilities
// - Carry the (class_id, module_id) key used by writes.
// - Expose the display identity used only for presentation deduplication.
// - Parse the upstream date strings on demand.

use crate::modules::exam_modules::core::date_filter::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowKey {
    pub class_id: i64,
    pub module_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Survey,
    Exam,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Survey => "survey",
            Flag::Exam => "exam",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(className, programName, moduleName)`. Not unique per persisted module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIdentity<'a> {
    pub class_name: &'a str,
    pub program_name: &'a str,
    pub module_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRow {
    pub class_id: i64,
    pub module_id: i64,
    pub class_name: String,
    pub program_name: String,
    pub module_name: String,
    pub start_date: String,
    pub end_date: String,
    pub survey: bool,
    pub exam: bool,
}

impl ModuleRow {
    pub fn key(&self) -> RowKey {
        RowKey {
            class_id: self.class_id,
            module_id: self.module_id,
        }
    }

    pub fn display_identity(&self) -> DisplayIdentity<'_> {
        DisplayIdentity {
            class_name: &self.class_name,
            program_name: &self.program_name,
            module_name: &self.module_name,
        }
    }

    /// Key the table widget uses to track rendered rows.
    pub fn table_key(&self) -> String {
        format!("{}-{}", self.class_name, self.module_name)
    }

    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Survey => self.survey,
            Flag::Exam => self.exam,
        }
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Survey => self.survey = value,
            Flag::Exam => self.exam = value,
        }
    }

    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.start_date)
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.end_date)
    }
}

// Transport shape of `GET /Workers/GetAllExamModule`.
//
// Purpose
// - Deserialize the nested class -> modules payload exactly as the studio API sends it.
//
// Boundaries
// - Read only. Rows are derived from it by the flattener and never written back in this shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassModulePayload {
    pub class_id: i64,
    pub class_name: String,
    pub program_name: String,
    pub modules: Vec<ModulePayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulePayload {
    pub module_id: i64,
    #[serde(rename = "modulName")]
    pub module_name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_survey: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_exam: Option<bool>,
}

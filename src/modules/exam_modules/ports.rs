// Ports define what the exam module core needs from the studio API, without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Use the in memory service for tests and local development.

use crate::modules::exam_modules::core::payload::ClassModulePayload;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GET_ALL_EXAM_MODULE: &str = "Workers/GetAllExamModule";
pub const CREATE_EXAM_SHEET: &str = "Workers/CreateExamSheet";
pub const CREATE_SURVEY_SHEET: &str = "Workers/CreateSurveySheet";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSheetEntry {
    pub module_id: i64,
    pub class_id: i64,
    pub is_exam: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySheetEntry {
    pub module_id: i64,
    pub class_id: i64,
    pub is_survey: bool,
}

#[async_trait]
pub trait ExamModuleService: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ClassModulePayload>, RemoteError>;
    async fn create_exam_sheet(&self, entries: &[ExamSheetEntry]) -> Result<(), RemoteError>;
    async fn create_survey_sheet(&self, entries: &[SurveySheetEntry]) -> Result<(), RemoteError>;
}

// In memory implementation of the ExamModuleService port.
//
// Purpose
// - Exercise load and toggle flows without the studio API.
//
// Responsibilities
// - Serve a seeded class payload.
// - Record accepted sheet writes in arrival order.
// - Simulate an offline backend, rejected sheets and slow writes.

use crate::modules::exam_modules::core::payload::ClassModulePayload;
use crate::modules::exam_modules::core::row::Flag;
use crate::modules::exam_modules::ports::{
    ExamModuleService, ExamSheetEntry, RemoteError, SurveySheetEntry,
};
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

#[derive(Default)]
pub struct InMemoryExamModuleService {
    classes: RwLock<Vec<ClassModulePayload>>,
    pub exam_sheets: Mutex<Vec<ExamSheetEntry>>,
    pub survey_sheets: Mutex<Vec<SurveySheetEntry>>,
    rejected: HashSet<Flag>,
    is_offline: bool,
    write_delay_ms: u64,
}

impl InMemoryExamModuleService {
    pub fn new(classes: Vec<ClassModulePayload>) -> Self {
        Self {
            classes: RwLock::new(classes),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Answer writes for `flag` with a 500.
    pub fn reject_sheets(&mut self, flag: Flag) {
        self.rejected.insert(flag);
    }

    pub fn set_write_delay_ms(&mut self, delay_ms: u64) {
        self.write_delay_ms = delay_ms;
    }

    pub async fn replace_classes(&self, classes: Vec<ClassModulePayload>) {
        *self.classes.write().await = classes;
    }

    async fn accept_write(&self, flag: Flag) -> Result<(), RemoteError> {
        if self.write_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.write_delay_ms)).await;
        }
        if self.is_offline {
            return Err(RemoteError::Backend("Exam module service offline".into()));
        }
        if self.rejected.contains(&flag) {
            return Err(RemoteError::Status(500));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ExamModuleService for InMemoryExamModuleService {
    async fn fetch_all(&self) -> Result<Vec<ClassModulePayload>, RemoteError> {
        if self.is_offline {
            return Err(RemoteError::Backend("Exam module service offline".into()));
        }
        Ok(self.classes.read().await.clone())
    }

    async fn create_exam_sheet(&self, entries: &[ExamSheetEntry]) -> Result<(), RemoteError> {
        self.accept_write(Flag::Exam).await?;
        self.exam_sheets.lock().await.extend_from_slice(entries);
        Ok(())
    }

    async fn create_survey_sheet(&self, entries: &[SurveySheetEntry]) -> Result<(), RemoteError> {
        self.accept_write(Flag::Survey).await?;
        self.survey_sheets.lock().await.extend_from_slice(entries);
        Ok(())
    }
}

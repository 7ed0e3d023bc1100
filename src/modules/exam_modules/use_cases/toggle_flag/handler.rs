// Toggle handler applies a checkbox click optimistically and persists it in the background.
//
// Responsibilities
// - Reject clicks while the view is not ready, and on controls the stored row's program hides.
// - Flip the flag on the matching row before any network call.
// - Spawn one single-element sheet write for the flag that changed.
// - Notify on success or failure. A failed write keeps the local value until the next load.

use crate::modules::exam_modules::core::row::{Flag, RowKey};
use crate::modules::exam_modules::core::visibility::is_control_visible;
use crate::modules::exam_modules::ports::{ExamModuleService, ExamSheetEntry, SurveySheetEntry};
use crate::modules::exam_modules::use_cases::toggle_flag::command::ToggleFlag;
use crate::modules::exam_modules::use_cases::toggle_flag::pending_write::{
    PendingWrite, WriteOutcome,
};
use crate::modules::exam_modules::view_model::{ViewModelHandle, ViewStatus};
use crate::shared::notifications::{Notification, Notifier};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToggleError {
    #[error("no visible row for class {class_id} module {module_id}")]
    UnknownRow { class_id: i64, module_id: i64 },

    #[error("{flag} control is not shown for program {program_name:?}")]
    ControlHidden { flag: Flag, program_name: String },

    #[error("exam module view is not ready")]
    ViewUnavailable,
}

pub struct ToggleFlagHandler {
    view_model: ViewModelHandle,
    service: Arc<dyn ExamModuleService>,
    notifier: Arc<dyn Notifier>,
}

impl ToggleFlagHandler {
    pub fn new(
        view_model: ViewModelHandle,
        service: Arc<dyn ExamModuleService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            view_model,
            service,
            notifier,
        }
    }

    pub async fn handle(&self, command: ToggleFlag) -> Result<PendingWrite, ToggleError> {
        let ToggleFlag { row, flag } = command;
        let key = row.key();
        let value = !row.flag(flag);

        {
            let mut view_model = self.view_model.write().await;
            if view_model.status() != &ViewStatus::Ready {
                return Err(ToggleError::ViewUnavailable);
            }
            // Visibility follows the stored row; the snapshot only supplies the key and value.
            let program_name = match view_model.find(key) {
                Some(stored) => stored.program_name.clone(),
                None => {
                    return Err(ToggleError::UnknownRow {
                        class_id: key.class_id,
                        module_id: key.module_id,
                    });
                }
            };
            if !is_control_visible(&program_name, flag) {
                return Err(ToggleError::ControlHidden { flag, program_name });
            }
            view_model.apply_flag_toggle(key, flag, value);
        }

        let write_id = Uuid::now_v7();
        tracing::info!(
            %write_id,
            class_id = key.class_id,
            module_id = key.module_id,
            %flag,
            value,
            "flag toggled locally, writing sheet"
        );
        let handle = tokio::spawn(write_sheet(
            self.service.clone(),
            self.notifier.clone(),
            write_id,
            key,
            flag,
            value,
        ));
        Ok(PendingWrite::new(write_id, key, flag, value, handle))
    }
}

async fn write_sheet(
    service: Arc<dyn ExamModuleService>,
    notifier: Arc<dyn Notifier>,
    write_id: Uuid,
    key: RowKey,
    flag: Flag,
    value: bool,
) -> WriteOutcome {
    let result = match flag {
        Flag::Exam => {
            service
                .create_exam_sheet(&[ExamSheetEntry {
                    module_id: key.module_id,
                    class_id: key.class_id,
                    is_exam: value,
                }])
                .await
        }
        Flag::Survey => {
            service
                .create_survey_sheet(&[SurveySheetEntry {
                    module_id: key.module_id,
                    class_id: key.class_id,
                    is_survey: value,
                }])
                .await
        }
    };

    match result {
        Ok(()) => {
            tracing::info!(%write_id, %flag, "sheet write confirmed");
            notifier
                .notify(Notification::success(write_id, success_message(flag)))
                .await;
            WriteOutcome::Confirmed
        }
        Err(error) => {
            // The local value is kept; the next load brings back the server state.
            tracing::warn!(
                %write_id,
                class_id = key.class_id,
                module_id = key.module_id,
                %flag,
                %error,
                "sheet write failed"
            );
            notifier
                .notify(Notification::error(write_id, failure_message(flag)))
                .await;
            WriteOutcome::Failed(error)
        }
    }
}

pub fn success_message(flag: Flag) -> &'static str {
    match flag {
        Flag::Exam => "Exam data successfully posted",
        Flag::Survey => "Survey data successfully posted",
    }
}

pub fn failure_message(flag: Flag) -> &'static str {
    match flag {
        Flag::Exam => "Failed to post exam data",
        Flag::Survey => "Failed to post survey data",
    }
}

use crate::modules::exam_modules::adapters::outbound::in_memory_service::InMemoryExamModuleService;
use crate::modules::exam_modules::core::row::{Flag, RowKey};
use crate::modules::exam_modules::ports::{ExamSheetEntry, RemoteError};
use crate::modules::exam_modules::use_cases::toggle_flag::command::ToggleFlag;
use crate::modules::exam_modules::use_cases::toggle_flag::pending_write::WriteOutcome;
use crate::shared::notifications::NotificationLevel;
use crate::shell::state::AppState;
use crate::tests::fixtures::payloads::{ClassModulePayloadBuilder, ModulePayloadBuilder, cutoff};
use std::sync::Arc;

const KEY: RowKey = RowKey {
    class_id: 1,
    module_id: 10,
};

fn single_backend_module() -> InMemoryExamModuleService {
    InMemoryExamModuleService::new(vec![
        ClassModulePayloadBuilder::new()
            .class_id(KEY.class_id)
            .program_name("Programming Backend")
            .module(
                ModulePayloadBuilder::new()
                    .module_id(KEY.module_id)
                    .end_date("2024-11-01T00:00:00")
                    .is_exam(None)
                    .build(),
            )
            .build(),
    ])
}

async fn loaded(service: Arc<InMemoryExamModuleService>) -> AppState {
    let state = AppState::new(service, cutoff(), 10);
    state.load_handler.handle().await.unwrap();
    state
}

#[tokio::test]
async fn toggling_exam_writes_one_entry_and_checks_the_row_immediately() {
    let mut service = single_backend_module();
    service.set_write_delay_ms(50);
    let service = Arc::new(service);
    let state = loaded(service.clone()).await;

    let row = state.view_model.read().await.find(KEY).unwrap().clone();
    assert!(!row.exam);
    assert_eq!(state.view_model.read().await.filtered_rows().len(), 1);

    let pending = state
        .toggle_handler
        .handle(ToggleFlag {
            row,
            flag: Flag::Exam,
        })
        .await
        .unwrap();

    assert!(!pending.is_finished());
    assert!(state.view_model.read().await.find(KEY).unwrap().exam);

    assert_eq!(pending.outcome().await, WriteOutcome::Confirmed);
    assert_eq!(
        *service.exam_sheets.lock().await,
        vec![ExamSheetEntry {
            module_id: 10,
            class_id: 1,
            is_exam: true,
        }]
    );
    assert!(service.survey_sheets.lock().await.is_empty());

    let notifications = state.notifications.drain().await;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Success);
    assert_eq!(notifications[0].message, "Exam data successfully posted");
}

#[tokio::test]
async fn a_failed_exam_write_keeps_the_local_value_and_leaves_survey_alone() {
    let mut service = single_backend_module();
    service.reject_sheets(Flag::Exam);
    let service = Arc::new(service);
    let state = loaded(service.clone()).await;

    let row = state.view_model.read().await.find(KEY).unwrap().clone();
    let exam = state
        .toggle_handler
        .handle(ToggleFlag {
            row,
            flag: Flag::Exam,
        })
        .await
        .unwrap();
    assert_eq!(
        exam.outcome().await,
        WriteOutcome::Failed(RemoteError::Status(500))
    );

    let row = state.view_model.read().await.find(KEY).unwrap().clone();
    assert!(row.exam);
    assert!(!row.survey);

    let survey = state
        .toggle_handler
        .handle(ToggleFlag {
            row,
            flag: Flag::Survey,
        })
        .await
        .unwrap();
    assert_eq!(survey.outcome().await, WriteOutcome::Confirmed);

    let row = state.view_model.read().await.find(KEY).unwrap().clone();
    assert!(row.exam && row.survey);
    assert!(service.exam_sheets.lock().await.is_empty());
    assert_eq!(service.survey_sheets.lock().await.len(), 1);

    let messages: Vec<_> = state
        .notifications
        .drain()
        .await
        .into_iter()
        .map(|notification| (notification.level, notification.message))
        .collect();
    assert_eq!(
        messages,
        vec![
            (NotificationLevel::Error, "Failed to post exam data".to_string()),
            (
                NotificationLevel::Success,
                "Survey data successfully posted".to_string()
            ),
        ]
    );
}

#[tokio::test]
async fn a_reload_after_a_failed_write_restores_the_server_value() {
    let mut service = single_backend_module();
    service.reject_sheets(Flag::Exam);
    let service = Arc::new(service);
    let state = loaded(service.clone()).await;

    let row = state.view_model.read().await.find(KEY).unwrap().clone();
    let pending = state
        .toggle_handler
        .handle(ToggleFlag {
            row,
            flag: Flag::Exam,
        })
        .await
        .unwrap();
    pending.outcome().await;
    assert!(state.view_model.read().await.find(KEY).unwrap().exam);

    state.load_handler.handle().await.unwrap();

    assert!(!state.view_model.read().await.find(KEY).unwrap().exam);
}

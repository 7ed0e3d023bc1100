use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::exam_modules::core::row::Flag;
use crate::modules::exam_modules::use_cases::toggle_flag::command::ToggleFlag;
use crate::modules::exam_modules::use_cases::toggle_flag::handler::ToggleError;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleAccepted {
    pub write_id: Uuid,
    pub class_id: i64,
    pub module_id: i64,
    pub flag: Flag,
    pub value: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ToggleFlag>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.toggle_handler.handle(command).await {
        Ok(pending) => (
            StatusCode::ACCEPTED,
            Json(ToggleAccepted {
                write_id: pending.write_id,
                class_id: pending.key.class_id,
                module_id: pending.key.module_id,
                flag: pending.flag,
                value: pending.value,
            }),
        )
            .into_response(),
        Err(ToggleError::UnknownRow { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(ToggleError::ControlHidden { .. }) => StatusCode::CONFLICT.into_response(),
        Err(ToggleError::ViewUnavailable) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

pub async fn notifications(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.notifications.drain().await)
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub total_rows: usize,
    pub visible_rows: usize,
}

#[derive(Serialize)]
pub struct RefreshFailure {
    pub error: String,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.load_handler.handle().await {
        Ok(summary) => Json(RefreshResponse {
            total_rows: summary.total_rows,
            visible_rows: summary.visible_rows,
        })
        .into_response(),
        Err(error) => (
            StatusCode::BAD_GATEWAY,
            Json(RefreshFailure {
                error: error.to_string(),
            }),
        )
            .into_response(),
    }
}

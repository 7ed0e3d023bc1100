use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::exam_modules::core::row_query::{Page, SortField, SortOrder, SortSpec};
use crate::modules::exam_modules::view_model::ViewStatus;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RowsParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
}

#[derive(Deserialize)]
pub struct SearchBody {
    pub text: String,
}

#[derive(Deserialize)]
pub struct FiltersBody {
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub survey: Option<bool>,
    #[serde(default)]
    pub exam: Vec<bool>,
}

pub async fn rows(
    State(state): State<AppState>,
    Query(params): Query<RowsParams>,
) -> impl IntoResponse {
    let page = Page {
        number: params.page.unwrap_or(1),
        size: params.page_size.unwrap_or(state.page_size).max(1),
    };
    let sort = params.sort.map(|field| SortSpec {
        field,
        order: params.order.unwrap_or_default(),
    });

    let view = state.view_model.read().await.displayed_rows(sort, page);
    match view.status {
        ViewStatus::Failed(_) => (StatusCode::SERVICE_UNAVAILABLE, Json(view)).into_response(),
        _ => Json(view).into_response(),
    }
}

pub async fn columns(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.view_model.read().await.columns())
}

pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY,
    };
    tracing::debug!(text = %body.text, "search committed");
    state.view_model.write().await.commit_search(body.text);
    StatusCode::NO_CONTENT
}

pub async fn reset_search(State(state): State<AppState>) -> impl IntoResponse {
    state.view_model.write().await.reset_search();
    StatusCode::NO_CONTENT
}

pub async fn filters(
    State(state): State<AppState>,
    body: Result<Json<FiltersBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY,
    };
    state
        .view_model
        .write()
        .await
        .set_filters(body.programs, body.survey, body.exam);
    StatusCode::NO_CONTENT
}

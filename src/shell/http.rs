use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::exam_modules::use_cases::browse_rows::inbound::http as browse_http;
use crate::modules::exam_modules::use_cases::load_exam_modules::inbound::http as load_http;
use crate::modules::exam_modules::use_cases::toggle_flag::inbound::http as toggle_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rows", get(browse_http::rows))
        .route("/columns", get(browse_http::columns))
        .route("/search", post(browse_http::search))
        .route("/search/reset", post(browse_http::reset_search))
        .route("/filters", post(browse_http::filters))
        .route("/toggle", post(toggle_http::handle))
        .route("/notifications", get(toggle_http::notifications))
        .route("/refresh", post(load_http::handle))
        .with_state(state)
}

use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use exam_modules::modules::exam_modules::adapters::outbound::http_service::HttpExamModuleService;
use exam_modules::shared::config::AppConfig;
use exam_modules::shell::http::router;
use exam_modules::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let service = Arc::new(HttpExamModuleService::new(config.api_base_url.clone()));
    let state = AppState::new(service, config.cutoff, config.page_size);

    // A failed first load leaves the view in its error state; /refresh retries on demand.
    if let Err(error) = state.load_handler.handle().await {
        tracing::error!(%error, api = %config.api_base_url, "initial load failed");
    }

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Exam module rows: http://{}/rows", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

// Load handler fetches every class payload and rebuilds the view model from it.
//
// Responsibilities
// - Call the studio API once per load.
// - On success, flatten and date-filter into the view model.
// - On any failure, put the whole view into the failed state. No partial results, no retry.

use crate::modules::exam_modules::ports::{ExamModuleService, RemoteError};
use crate::modules::exam_modules::view_model::ViewModelHandle;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("failed to load exam modules: {0}")]
    Remote(#[from] RemoteError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub total_rows: usize,
    pub visible_rows: usize,
}

pub struct LoadExamModulesHandler {
    view_model: ViewModelHandle,
    service: Arc<dyn ExamModuleService>,
}

impl LoadExamModulesHandler {
    pub fn new(view_model: ViewModelHandle, service: Arc<dyn ExamModuleService>) -> Self {
        Self {
            view_model,
            service,
        }
    }

    pub async fn handle(&self) -> Result<LoadSummary, LoadError> {
        self.view_model.write().await.begin_loading();

        let payload = match self.service.fetch_all().await {
            Ok(payload) => payload,
            Err(error) => {
                tracing::error!(%error, "exam module load failed");
                self.view_model.write().await.fail(error.to_string());
                return Err(LoadError::Remote(error));
            }
        };

        let mut view_model = self.view_model.write().await;
        view_model.load(&payload);
        let summary = LoadSummary {
            total_rows: view_model.all_rows().len(),
            visible_rows: view_model.filtered_rows().len(),
        };
        tracing::info!(
            classes = payload.len(),
            total_rows = summary.total_rows,
            visible_rows = summary.visible_rows,
            cutoff = %view_model.cutoff(),
            "exam modules loaded"
        );
        Ok(summary)
    }
}

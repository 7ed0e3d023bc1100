use crate::modules::exam_modules::ports::ExamModuleService;
use crate::modules::exam_modules::use_cases::load_exam_modules::handler::LoadExamModulesHandler;
use crate::modules::exam_modules::use_cases::toggle_flag::handler::ToggleFlagHandler;
use crate::modules::exam_modules::view_model::{ExamModuleViewModel, ViewModelHandle};
use crate::shared::notifications::NotificationFeed;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub view_model: ViewModelHandle,
    pub load_handler: Arc<LoadExamModulesHandler>,
    pub toggle_handler: Arc<ToggleFlagHandler>,
    pub notifications: Arc<NotificationFeed>,
    pub page_size: usize,
}

impl AppState {
    pub fn new(
        service: Arc<dyn ExamModuleService>,
        cutoff: DateTime<Utc>,
        page_size: usize,
    ) -> Self {
        let view_model = ExamModuleViewModel::new(cutoff).into_handle();
        let notifications = Arc::new(NotificationFeed::new());
        let load_handler = Arc::new(LoadExamModulesHandler::new(
            view_model.clone(),
            service.clone(),
        ));
        let toggle_handler = Arc::new(ToggleFlagHandler::new(
            view_model.clone(),
            service,
            notifications.clone(),
        ));
        Self {
            view_model,
            load_handler,
            toggle_handler,
            notifications,
            page_size,
        }
    }
}

use crate::modules::exam_modules::core::payload::ClassModulePayload;
use crate::modules::exam_modules::core::row::ModuleRow;

/// One row per (class, module) pair, in payload order. Absent flags read as `false`.
pub fn flatten_modules(payload: &[ClassModulePayload]) -> Vec<ModuleRow> {
    payload
        .iter()
        .flat_map(|class| {
            class.modules.iter().map(move |module| ModuleRow {
                class_id: class.class_id,
                module_id: module.module_id,
                class_name: class.class_name.clone(),
                program_name: class.program_name.clone(),
                module_name: module.module_name.clone(),
                start_date: module.start_date.clone(),
                end_date: module.end_date.clone(),
                survey: module.is_survey.unwrap_or(false),
                exam: module.is_exam.unwrap_or(false),
            })
        })
        .collect()
}

// Shared test fixtures for studio API payloads and module rows.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::exam_modules::core::date_filter::parse_timestamp;
use crate::modules::exam_modules::core::payload::{ClassModulePayload, ModulePayload};
use crate::modules::exam_modules::core::row::ModuleRow;
use chrono::{DateTime, Utc};

const GET_ALL_EXAM_MODULE_JSON: &str = include_str!("json/get_all_exam_module.json");

/// A recorded `GET /Workers/GetAllExamModule` response.
pub fn make_get_all_exam_module_payload() -> Vec<ClassModulePayload> {
    serde_json::from_str(GET_ALL_EXAM_MODULE_JSON).unwrap()
}

/// The cutoff the view applies by default: 2024-10-01T00:00:00Z.
pub fn cutoff() -> DateTime<Utc> {
    parse_timestamp("2024-10-01").unwrap()
}

pub struct ModulePayloadBuilder {
    inner: ModulePayload,
}

impl Default for ModulePayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ModulePayloadBuilder {
    pub fn new() -> Self {
        Self {
            inner: ModulePayload {
                module_id: 10,
                module_name: "Databases".to_string(),
                start_date: "2024-09-02T00:00:00".to_string(),
                end_date: "2024-11-01T00:00:00".to_string(),
                is_survey: None,
                is_exam: None,
            },
        }
    }

    pub fn module_id(mut self, v: i64) -> Self {
        self.inner.module_id = v;
        self
    }

    pub fn module_name(mut self, v: impl Into<String>) -> Self {
        self.inner.module_name = v.into();
        self
    }

    pub fn start_date(mut self, v: impl Into<String>) -> Self {
        self.inner.start_date = v.into();
        self
    }

    pub fn end_date(mut self, v: impl Into<String>) -> Self {
        self.inner.end_date = v.into();
        self
    }

    pub fn is_survey(mut self, v: Option<bool>) -> Self {
        self.inner.is_survey = v;
        self
    }

    pub fn is_exam(mut self, v: Option<bool>) -> Self {
        self.inner.is_exam = v;
        self
    }

    pub fn build(self) -> ModulePayload {
        self.inner
    }
}

pub struct ClassModulePayloadBuilder {
    inner: ClassModulePayload,
}

impl Default for ClassModulePayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClassModulePayloadBuilder {
    pub fn new() -> Self {
        Self {
            inner: ClassModulePayload {
                class_id: 1,
                class_name: "PB-101".to_string(),
                program_name: "Programming Backend".to_string(),
                modules: Vec::new(),
            },
        }
    }

    pub fn class_id(mut self, v: i64) -> Self {
        self.inner.class_id = v;
        self
    }

    pub fn class_name(mut self, v: impl Into<String>) -> Self {
        self.inner.class_name = v.into();
        self
    }

    pub fn program_name(mut self, v: impl Into<String>) -> Self {
        self.inner.program_name = v.into();
        self
    }

    pub fn module(mut self, v: ModulePayload) -> Self {
        self.inner.modules.push(v);
        self
    }

    pub fn build(self) -> ClassModulePayload {
        self.inner
    }
}

pub struct ModuleRowBuilder {
    inner: ModuleRow,
}

impl Default for ModuleRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ModuleRowBuilder {
    pub fn new() -> Self {
        Self {
            inner: ModuleRow {
                class_id: 1,
                module_id: 10,
                class_name: "PB-101".to_string(),
                program_name: "Programming Backend".to_string(),
                module_name: "Databases".to_string(),
                start_date: "2024-09-02T00:00:00".to_string(),
                end_date: "2024-11-01T00:00:00".to_string(),
                survey: false,
                exam: false,
            },
        }
    }

    pub fn class_id(mut self, v: i64) -> Self {
        self.inner.class_id = v;
        self
    }

    pub fn module_id(mut self, v: i64) -> Self {
        self.inner.module_id = v;
        self
    }

    pub fn class_name(mut self, v: impl Into<String>) -> Self {
        self.inner.class_name = v.into();
        self
    }

    pub fn program_name(mut self, v: impl Into<String>) -> Self {
        self.inner.program_name = v.into();
        self
    }

    pub fn module_name(mut self, v: impl Into<String>) -> Self {
        self.inner.module_name = v.into();
        self
    }

    pub fn start_date(mut self, v: impl Into<String>) -> Self {
        self.inner.start_date = v.into();
        self
    }

    pub fn end_date(mut self, v: impl Into<String>) -> Self {
        self.inner.end_date = v.into();
        self
    }

    pub fn survey(mut self, v: bool) -> Self {
        self.inner.survey = v;
        self
    }

    pub fn exam(mut self, v: bool) -> Self {
        self.inner.exam = v;
        self
    }

    pub fn build(self) -> ModuleRow {
        self.inner
    }
}

#[cfg(test)]
mod exam_module_payload_fixture_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_recorded_response() {
        let payload = make_get_all_exam_module_payload();

        assert_eq!(payload.len(), 4);
        assert_eq!(payload[0].modules.len(), 3);
        assert_eq!(payload[1].modules[0].is_exam, None);
    }

    #[rstest]
    fn setters_override_the_defaults() {
        let row = ModuleRowBuilder::new()
            .class_id(7)
            .module_id(70)
            .class_name("X")
            .program_name("Y")
            .module_name("Z")
            .start_date("2024-01-01")
            .end_date("2024-02-01")
            .survey(true)
            .exam(true)
            .build();

        assert_eq!(row.key().class_id, 7);
        assert_eq!(row.key().module_id, 70);
        assert_eq!(row.display_identity().module_name, "Z");
        assert!(row.survey && row.exam);
    }
}

// Which programs get a survey or exam checkbox at all.
//
// A hidden control is absent, not disabled: the widget renders nothing and
// toggles for it are rejected before any state changes.

use crate::modules::exam_modules::core::row::Flag;

pub const SURVEY_EXCLUDED_PROGRAM: &str = "Proqramlaşdırma";
pub const EXAM_PROGRAMS: [&str; 2] = ["Programming Backend", "Programming Frontend"];

pub fn survey_control_visible(program_name: &str) -> bool {
    program_name != SURVEY_EXCLUDED_PROGRAM
}

pub fn exam_control_visible(program_name: &str) -> bool {
    EXAM_PROGRAMS.contains(&program_name)
}

pub fn is_control_visible(program_name: &str, flag: Flag) -> bool {
    match flag {
        Flag::Survey => survey_control_visible(program_name),
        Flag::Exam => exam_control_visible(program_name),
    }
}

use crate::modules::exam_modules::core::row::{Flag, ModuleRow};
use serde::Deserialize;

/// A checkbox click: the row as the widget rendered it, and which flag was clicked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToggleFlag {
    pub row: ModuleRow,
    pub flag: Flag,
}

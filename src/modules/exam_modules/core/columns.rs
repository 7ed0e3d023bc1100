// Column descriptors handed to the table widget.
//
// Purpose
// - Describe each column: the field it reads, its render rule, the sort field
//   and the filter options it offers.
//
// Boundaries
// - Metadata only. Rows are filtered and sorted by `row_query`, and checkbox
//   visibility is decided by `visibility`.

use crate::modules::exam_modules::core::row::Flag;
use crate::modules::exam_modules::core::row_query::SortField;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "flag")]
pub enum RenderRule {
    Text,
    Date,
    Checkbox(Flag),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub text: String,
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFilter {
    pub options: Vec<FilterOption>,
    pub multiple: bool,
    pub default_selected: Vec<FilterValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub width: Option<u32>,
    pub render: RenderRule,
    pub searchable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ColumnFilter>,
}

impl ColumnDescriptor {
    fn text(key: &'static str, title: &'static str, width: Option<u32>) -> Self {
        Self {
            key,
            title,
            width,
            render: RenderRule::Text,
            searchable: false,
            sort: None,
            filter: None,
        }
    }

    fn date(key: &'static str, title: &'static str, sort: SortField) -> Self {
        Self {
            render: RenderRule::Date,
            sort: Some(sort),
            ..Self::text(key, title, Some(100))
        }
    }

    fn checkbox(key: &'static str, title: &'static str, flag: Flag, filter: ColumnFilter) -> Self {
        Self {
            render: RenderRule::Checkbox(flag),
            filter: Some(filter),
            ..Self::text(key, title, None)
        }
    }
}

fn boolean_filter(multiple: bool, default_selected: Vec<FilterValue>) -> ColumnFilter {
    ColumnFilter {
        options: vec![
            FilterOption {
                text: "True".into(),
                value: FilterValue::Bool(true),
            },
            FilterOption {
                text: "False".into(),
                value: FilterValue::Bool(false),
            },
        ],
        multiple,
        default_selected,
    }
}

pub fn columns(program_options: &[String]) -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor {
            searchable: true,
            ..ColumnDescriptor::text("className", "Group Name", Some(200))
        },
        ColumnDescriptor {
            filter: Some(ColumnFilter {
                options: program_options
                    .iter()
                    .map(|name| FilterOption {
                        text: name.clone(),
                        value: FilterValue::Text(name.clone()),
                    })
                    .collect(),
                multiple: true,
                default_selected: Vec::new(),
            }),
            ..ColumnDescriptor::text("programName", "Program Name", Some(200))
        },
        ColumnDescriptor::text("moduleName", "Module Name", None),
        ColumnDescriptor::date("startDate", "Start Date", SortField::StartDate),
        ColumnDescriptor::date("endDate", "End Date", SortField::EndDate),
        ColumnDescriptor::checkbox(
            "survey",
            "Survey",
            Flag::Survey,
            boolean_filter(false, vec![FilterValue::Bool(false)]),
        ),
        ColumnDescriptor::checkbox("exam", "Exam", Flag::Exam, boolean_filter(true, Vec::new())),
    ]
}

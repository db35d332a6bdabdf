//! Response Assembler — maps requested categories to extracted sections and
//! salary data, and builds the structured payload handed to the rendering
//! call.

use serde_json::{json, Map, Value};

use crate::chat::category::QueryCategory;
use crate::chat::tables::DomainTables;
use crate::dataset::JobRecord;
use crate::sections::extract_section;

/// One labeled salary grade with a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeEntry {
    pub grade: String,
    pub value: String,
}

/// Structured salary data: display jurisdiction plus the non-empty grades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryInfo {
    pub jurisdiction: String,
    pub grades: Vec<GradeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Text(String),
    Salary(SalaryInfo),
}

/// The assembled content for one requested category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPayload {
    pub category: QueryCategory,
    pub content: SectionContent,
}

/// Produces one payload per requested category, in request order.
/// `Unknown` and unrecognized categories are dropped, not rendered. A job
/// with no salary row yields an empty grade list, never an error.
pub fn assemble(
    categories: &[QueryCategory],
    job: &JobRecord,
    tables: &DomainTables,
) -> Vec<SectionPayload> {
    categories
        .iter()
        .filter_map(|&category| match category {
            QueryCategory::Unknown => None,
            QueryCategory::Salary => {
                let grades = job
                    .salary
                    .as_ref()
                    .map(|salary| {
                        salary
                            .non_empty()
                            .into_iter()
                            .map(|(grade, value)| GradeEntry { grade, value })
                            .collect()
                    })
                    .unwrap_or_default();
                Some(SectionPayload {
                    category,
                    content: SectionContent::Salary(SalaryInfo {
                        jurisdiction: tables.display_jurisdiction(&job.jurisdiction),
                        grades,
                    }),
                })
            }
            section => Some(SectionPayload {
                category: section,
                content: SectionContent::Text(extract_section(
                    &job.description,
                    tables.headers_for(section),
                )),
            }),
        })
        .collect()
}

/// Builds the structured job payload for the rendering call:
/// `{title, jurisdiction, <category>: content, ...}`.
pub fn build_job_payload(
    job: &JobRecord,
    tables: &DomainTables,
    sections: &[SectionPayload],
) -> Value {
    let mut payload = Map::new();
    payload.insert("title".to_string(), Value::String(job.title.clone()));
    payload.insert(
        "jurisdiction".to_string(),
        Value::String(tables.display_jurisdiction(&job.jurisdiction)),
    );
    for section in sections {
        payload.insert(
            section.category.tag().to_string(),
            content_value(&section.content),
        );
    }
    Value::Object(payload)
}

fn content_value(content: &SectionContent) -> Value {
    match content {
        SectionContent::Text(text) => Value::String(text.clone()),
        SectionContent::Salary(info) => json!({
            "jurisdiction": info.jurisdiction,
            "grades": info
                .grades
                .iter()
                .map(|g| json!({"grade": g.grade, "value": g.value}))
                .collect::<Vec<_>>(),
        }),
    }
}

//! Job Dataset — joins the job-description and salary-grade source tables
//! into one in-memory mapping keyed by normalized (lowercased) job code.
//!
//! Built once at startup from two read-only JSON files, immutable after.
//! The join is permissive: a description without a salary row yields
//! `salary: None`; a salary row without a description is dropped silently.

#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Number of salary grade columns in the source table.
pub const GRADE_COUNT: usize = 14;

/// One row of the job-descriptions source table.
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptionRow {
    pub jurisdiction: String,
    pub code: String,
    pub title: String,
    pub description: String,
}

/// One row of the salary-grades source table. Field names mirror the source
/// file's column headers. Grades 3–14 are frequently absent upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryRow {
    #[serde(rename = "Job Code")]
    pub job_code: String,
    #[serde(rename = "Salary grade 1", default)]
    pub grade1: Option<String>,
    #[serde(rename = "Salary grade 2", default)]
    pub grade2: Option<String>,
    #[serde(rename = "Salary grade 3", default)]
    pub grade3: Option<String>,
    #[serde(rename = "Salary grade 4", default)]
    pub grade4: Option<String>,
    #[serde(rename = "Salary grade 5", default)]
    pub grade5: Option<String>,
    #[serde(rename = "Salary grade 6", default)]
    pub grade6: Option<String>,
    #[serde(rename = "Salary grade 7", default)]
    pub grade7: Option<String>,
    #[serde(rename = "Salary grade 8", default)]
    pub grade8: Option<String>,
    #[serde(rename = "Salary grade 9", default)]
    pub grade9: Option<String>,
    #[serde(rename = "Salary grade 10", default)]
    pub grade10: Option<String>,
    #[serde(rename = "Salary grade 11", default)]
    pub grade11: Option<String>,
    #[serde(rename = "Salary grade 12", default)]
    pub grade12: Option<String>,
    #[serde(rename = "Salary grade 13", default)]
    pub grade13: Option<String>,
    #[serde(rename = "Salary grade 14", default)]
    pub grade14: Option<String>,
}

impl SalaryRow {
    fn into_grades(self) -> SalaryGrades {
        SalaryGrades::new(vec![
            self.grade1.unwrap_or_default(),
            self.grade2.unwrap_or_default(),
            self.grade3.unwrap_or_default(),
            self.grade4.unwrap_or_default(),
            self.grade5.unwrap_or_default(),
            self.grade6.unwrap_or_default(),
            self.grade7.unwrap_or_default(),
            self.grade8.unwrap_or_default(),
            self.grade9.unwrap_or_default(),
            self.grade10.unwrap_or_default(),
            self.grade11.unwrap_or_default(),
            self.grade12.unwrap_or_default(),
            self.grade13.unwrap_or_default(),
            self.grade14.unwrap_or_default(),
        ])
    }
}

/// Ordered salary grades for one job. Always `GRADE_COUNT` entries; values
/// are trimmed at construction and absent grades are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryGrades {
    grades: Vec<String>,
}

impl SalaryGrades {
    pub fn new(values: Vec<String>) -> Self {
        let mut grades: Vec<String> = values
            .into_iter()
            .take(GRADE_COUNT)
            .map(|v| v.trim().to_string())
            .collect();
        grades.resize(GRADE_COUNT, String::new());
        Self { grades }
    }

    /// Grades with a non-empty value, labeled "Grade 1".."Grade 14" in order.
    /// Empty grades never appear in rendered output.
    pub fn non_empty(&self) -> Vec<(String, String)> {
        self.grades
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_empty())
            .map(|(i, v)| (format!("Grade {}", i + 1), v.clone()))
            .collect()
    }
}

/// A fully joined job posting. `code` is the normalized lowercase key.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub code: String,
    pub title: String,
    pub jurisdiction: String,
    pub description: String,
    pub salary: Option<SalaryGrades>,
}

/// The in-memory job dataset. Insertion order of the descriptions table is
/// preserved; lookup is by lowercased job code.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<JobRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Joins the two source tables. Salary rows with no matching description
    /// are discarded; descriptions with no salary row get `salary: None`.
    /// A repeated job code in the descriptions table replaces the earlier row.
    pub fn from_rows(descriptions: Vec<DescriptionRow>, salaries: Vec<SalaryRow>) -> Self {
        let salary_map: HashMap<String, SalaryGrades> = salaries
            .into_iter()
            .map(|row| (row.job_code.to_lowercase(), row.into_grades()))
            .collect();

        let mut dataset = Dataset::default();
        for row in descriptions {
            let code = row.code.to_lowercase();
            let record = JobRecord {
                salary: salary_map.get(&code).cloned(),
                code: code.clone(),
                title: row.title,
                jurisdiction: row.jurisdiction,
                description: row.description,
            };
            match dataset.index.get(&code) {
                Some(&i) => dataset.records[i] = record,
                None => {
                    dataset.index.insert(code, dataset.records.len());
                    dataset.records.push(record);
                }
            }
        }
        dataset
    }

    /// Case-insensitive lookup by job code.
    pub fn get_by_code(&self, code: &str) -> Option<&JobRecord> {
        self.index
            .get(&code.to_lowercase())
            .map(|&i| &self.records[i])
    }

    pub fn all(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn by_jurisdiction(&self, jurisdiction: &str) -> Vec<&JobRecord> {
        self.records
            .iter()
            .filter(|r| r.jurisdiction.eq_ignore_ascii_case(jurisdiction))
            .collect()
    }

    pub fn by_title_substring(&self, title: &str) -> Vec<&JobRecord> {
        let needle = title.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads both source tables from disk and builds the dataset.
pub fn load_dataset(descriptions_path: &str, salaries_path: &str) -> Result<Dataset> {
    let descriptions_json = std::fs::read_to_string(descriptions_path)
        .with_context(|| format!("Failed to read job descriptions from '{descriptions_path}'"))?;
    let descriptions: Vec<DescriptionRow> = serde_json::from_str(&descriptions_json)
        .with_context(|| format!("Invalid job descriptions JSON in '{descriptions_path}'"))?;

    let salaries_json = std::fs::read_to_string(salaries_path)
        .with_context(|| format!("Failed to read salary grades from '{salaries_path}'"))?;
    let salaries: Vec<SalaryRow> = serde_json::from_str(&salaries_json)
        .with_context(|| format!("Invalid salary grades JSON in '{salaries_path}'"))?;

    Ok(Dataset::from_rows(descriptions, salaries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(jurisdiction: &str, code: &str, title: &str) -> DescriptionRow {
        DescriptionRow {
            jurisdiction: jurisdiction.to_string(),
            code: code.to_string(),
            title: title.to_string(),
            description: "DEFINITION\nDoes things.\n".to_string(),
        }
    }

    fn salary(job_code: &str, grade1: &str, grade2: &str) -> SalaryRow {
        SalaryRow {
            job_code: job_code.to_string(),
            grade1: Some(grade1.to_string()),
            grade2: Some(grade2.to_string()),
            grade3: None,
            grade4: None,
            grade5: None,
            grade6: None,
            grade7: None,
            grade8: None,
            grade9: None,
            grade10: None,
            grade11: None,
            grade12: None,
            grade13: None,
            grade14: None,
        }
    }

    #[test]
    fn test_join_attaches_salary_when_codes_match() {
        let dataset = Dataset::from_rows(
            vec![desc("ventura", "SEC01", "Secretary")],
            vec![salary("sec01", "5000", "5200")],
        );
        let record = dataset.get_by_code("sec01").unwrap();
        assert!(record.salary.is_some());
    }

    #[test]
    fn test_description_without_salary_has_none() {
        let dataset = Dataset::from_rows(vec![desc("ventura", "SEC01", "Secretary")], vec![]);
        assert!(dataset.get_by_code("sec01").unwrap().salary.is_none());
    }

    #[test]
    fn test_salary_without_description_is_dropped() {
        let dataset = Dataset::from_rows(
            vec![desc("ventura", "SEC01", "Secretary")],
            vec![salary("orphan", "1000", "1100")],
        );
        assert_eq!(dataset.len(), 1);
        assert!(dataset.get_by_code("orphan").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dataset = Dataset::from_rows(vec![desc("ventura", "SEC01", "Secretary")], vec![]);
        assert!(dataset.get_by_code("SEC01").is_some());
        assert!(dataset.get_by_code("Sec01").is_some());
        assert_eq!(dataset.get_by_code("sec01").unwrap().code, "sec01");
    }

    #[test]
    fn test_repeated_code_replaces_earlier_row() {
        let dataset = Dataset::from_rows(
            vec![
                desc("ventura", "SEC01", "Secretary"),
                desc("kerncounty", "SEC01", "Senior Secretary"),
            ],
            vec![],
        );
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get_by_code("sec01").unwrap().title, "Senior Secretary");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let dataset = Dataset::from_rows(
            vec![
                desc("ventura", "B2", "Analyst"),
                desc("ventura", "A1", "Clerk"),
            ],
            vec![],
        );
        let codes: Vec<&str> = dataset.all().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["b2", "a1"]);
    }

    #[test]
    fn test_by_jurisdiction_matches_case_insensitively() {
        let dataset = Dataset::from_rows(
            vec![
                desc("ventura", "A1", "Clerk"),
                desc("kerncounty", "A2", "Clerk"),
            ],
            vec![],
        );
        let hits = dataset.by_jurisdiction("Ventura");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "a1");
    }

    #[test]
    fn test_by_title_substring() {
        let dataset = Dataset::from_rows(
            vec![
                desc("ventura", "A1", "Senior Secretary"),
                desc("ventura", "A2", "Accountant"),
            ],
            vec![],
        );
        let hits = dataset.by_title_substring("secretary");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "a1");
    }

    #[test]
    fn test_grades_are_trimmed_and_padded() {
        let grades = SalaryGrades::new(vec![" 5000 ".to_string(), "  ".to_string()]);
        let non_empty = grades.non_empty();
        assert_eq!(non_empty, vec![("Grade 1".to_string(), "5000".to_string())]);
    }

    #[test]
    fn test_non_empty_excludes_blank_grades() {
        let grades = SalaryGrades::new(vec![
            "5000".to_string(),
            "".to_string(),
            "5200".to_string(),
        ]);
        let labels: Vec<String> = grades.non_empty().into_iter().map(|(g, _)| g).collect();
        assert_eq!(labels, vec!["Grade 1", "Grade 3"]);
    }
}

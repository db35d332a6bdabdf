//! Domain lookup tables, injected at startup rather than embedded at the
//! point of use so tests can run against alternates.

use std::collections::HashMap;

use crate::chat::category::QueryCategory;

/// Immutable configuration data for the assembler: jurisdiction display
/// names and the section-header aliases for each category. A header
/// disjunction ("LICENSES|CERTIFICATIONS|REGISTRATIONS") is a list of
/// aliases, any one of which triggers the section match.
#[derive(Debug, Clone)]
pub struct DomainTables {
    jurisdiction_names: HashMap<String, String>,
    section_headers: HashMap<QueryCategory, Vec<String>>,
}

impl DomainTables {
    pub fn new(
        jurisdiction_names: HashMap<String, String>,
        section_headers: HashMap<QueryCategory, Vec<String>>,
    ) -> Self {
        Self {
            jurisdiction_names,
            section_headers,
        }
    }

    /// Human-readable jurisdiction name. Unknown codes pass through
    /// unchanged; a missing jurisdiction renders as "Unknown Jurisdiction".
    pub fn display_jurisdiction(&self, code: &str) -> String {
        if code.trim().is_empty() {
            return "Unknown Jurisdiction".to_string();
        }
        self.jurisdiction_names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Header aliases for a section category. Empty for `Salary` and
    /// `Unknown`, which are not backed by description sections.
    pub fn headers_for(&self, category: QueryCategory) -> &[String] {
        self.section_headers
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for DomainTables {
    fn default() -> Self {
        let jurisdiction_names = [
            ("sdcounty", "San Diego County"),
            ("sanbernardino", "San Bernardino"),
            ("ventura", "Ventura"),
            ("kerncounty", "Kern County"),
        ]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();

        let section_headers = [
            (QueryCategory::Knowledge, vec!["KNOWLEDGE"]),
            (QueryCategory::Skills, vec!["SKILLS"]),
            (QueryCategory::Abilities, vec!["ABILITIES"]),
            (QueryCategory::Duties, vec!["EXAMPLES OF DUTIES"]),
            (
                QueryCategory::Requirements,
                vec!["EDUCATION AND/OR EXPERIENCE"],
            ),
            (QueryCategory::Education, vec!["EDUCATION"]),
            (QueryCategory::Experience, vec!["EXPERIENCE"]),
            (
                QueryCategory::Licenses,
                vec!["LICENSES", "CERTIFICATIONS", "REGISTRATIONS"],
            ),
            (QueryCategory::Physical, vec!["PHYSICAL", "WORKING CONDITIONS"]),
            (QueryCategory::Description, vec!["DEFINITION"]),
        ]
        .into_iter()
        .map(|(category, aliases)| {
            (
                category,
                aliases.into_iter().map(str::to_string).collect(),
            )
        })
        .collect();

        Self::new(jurisdiction_names, section_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_jurisdictions_map_to_display_names() {
        let tables = DomainTables::default();
        assert_eq!(tables.display_jurisdiction("ventura"), "Ventura");
        assert_eq!(tables.display_jurisdiction("sdcounty"), "San Diego County");
        assert_eq!(
            tables.display_jurisdiction("sanbernardino"),
            "San Bernardino"
        );
        assert_eq!(tables.display_jurisdiction("kerncounty"), "Kern County");
    }

    #[test]
    fn test_unknown_jurisdiction_code_passes_through() {
        let tables = DomainTables::default();
        assert_eq!(tables.display_jurisdiction("lacounty"), "lacounty");
    }

    #[test]
    fn test_absent_jurisdiction_renders_placeholder() {
        let tables = DomainTables::default();
        assert_eq!(tables.display_jurisdiction(""), "Unknown Jurisdiction");
        assert_eq!(tables.display_jurisdiction("  "), "Unknown Jurisdiction");
    }

    #[test]
    fn test_header_table_matches_fixed_mapping() {
        let tables = DomainTables::default();
        assert_eq!(tables.headers_for(QueryCategory::Knowledge), ["KNOWLEDGE"]);
        assert_eq!(
            tables.headers_for(QueryCategory::Duties),
            ["EXAMPLES OF DUTIES"]
        );
        assert_eq!(
            tables.headers_for(QueryCategory::Requirements),
            ["EDUCATION AND/OR EXPERIENCE"]
        );
        assert_eq!(
            tables.headers_for(QueryCategory::Licenses),
            ["LICENSES", "CERTIFICATIONS", "REGISTRATIONS"]
        );
        assert_eq!(
            tables.headers_for(QueryCategory::Physical),
            ["PHYSICAL", "WORKING CONDITIONS"]
        );
        assert_eq!(
            tables.headers_for(QueryCategory::Description),
            ["DEFINITION"]
        );
    }

    #[test]
    fn test_salary_and_unknown_have_no_headers() {
        let tables = DomainTables::default();
        assert!(tables.headers_for(QueryCategory::Salary).is_empty());
        assert!(tables.headers_for(QueryCategory::Unknown).is_empty());
    }

    #[test]
    fn test_alternate_tables_can_be_injected() {
        let tables = DomainTables::new(
            [("testville".to_string(), "Testville".to_string())]
                .into_iter()
                .collect(),
            [(QueryCategory::Skills, vec!["COMPETENCIES".to_string()])]
                .into_iter()
                .collect(),
        );
        assert_eq!(tables.display_jurisdiction("testville"), "Testville");
        assert_eq!(tables.headers_for(QueryCategory::Skills), ["COMPETENCIES"]);
    }
}

use serde::{Deserialize, Serialize};

/// The closed set of information categories a query can request, plus the
/// `Unknown` sentinel for unrecognized tags. The oracle's `queryType`
/// strings map onto this enum via `from_tag`, which is total — it never
/// rejects, it degrades to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryCategory {
    Salary,
    Knowledge,
    Skills,
    Abilities,
    Duties,
    Requirements,
    Education,
    Experience,
    Licenses,
    Physical,
    Description,
    Unknown,
}

impl QueryCategory {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "salary" => Self::Salary,
            "knowledge" => Self::Knowledge,
            "skills" => Self::Skills,
            "abilities" => Self::Abilities,
            "duties" => Self::Duties,
            "requirements" => Self::Requirements,
            "education" => Self::Education,
            "experience" => Self::Experience,
            "licenses" => Self::Licenses,
            "physical" => Self::Physical,
            "description" => Self::Description,
            _ => Self::Unknown,
        }
    }

    /// The wire tag for this category, used as payload keys and in the
    /// rendering prompt.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Knowledge => "knowledge",
            Self::Skills => "skills",
            Self::Abilities => "abilities",
            Self::Duties => "duties",
            Self::Requirements => "requirements",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Licenses => "licenses",
            Self::Physical => "physical",
            Self::Description => "description",
            Self::Unknown => "unknown",
        }
    }
}

//! Oracle — the language-model collaborator behind a trait seam.
//!
//! The service depends on two capabilities: `classify` (which job, which
//! information categories) and `render` (phrase a structured payload as
//! prose). Production wires `AnthropicOracle`; tests inject deterministic
//! stubs. Callers treat every failure as recoverable — the resolver and
//! answerer have a total fallback for each path.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod client;
pub mod prompts;
#[cfg(test)]
pub mod stub;

pub use client::{AnthropicClient, OracleError};

use prompts::{
    CLASSIFY_PROMPT_TEMPLATE, CLASSIFY_SYSTEM, RENDER_PROMPT_TEMPLATE, RENDER_SYSTEM_TEMPLATE,
};

/// The classification reply contract. `job_code` is null when no job
/// matched; `query_type` carries raw category tags that are mapped to the
/// closed enum downstream, not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job_code: Option<String>,
    pub query_type: Vec<String>,
}

#[async_trait]
pub trait Oracle: Send + Sync {
    /// Picks a job code and requested categories from the candidate listing
    /// and the raw user message.
    async fn classify(&self, job_index: &str, message: &str) -> Result<JobMatch, OracleError>;

    /// Phrases the assembled job payload as a conversational answer.
    async fn render(&self, job_data: &Value, query_types: &[String]) -> Result<String, OracleError>;
}

/// Production oracle backed by the Anthropic Messages API.
pub struct AnthropicOracle {
    client: AnthropicClient,
}

impl AnthropicOracle {
    pub fn new(api_key: String) -> Self {
        Self {
            client: AnthropicClient::new(api_key),
        }
    }
}

#[async_trait]
impl Oracle for AnthropicOracle {
    async fn classify(&self, job_index: &str, message: &str) -> Result<JobMatch, OracleError> {
        let prompt = CLASSIFY_PROMPT_TEMPLATE
            .replace("{job_index}", job_index)
            .replace("{message}", message);
        self.client.call_json::<JobMatch>(&prompt, CLASSIFY_SYSTEM).await
    }

    async fn render(&self, job_data: &Value, query_types: &[String]) -> Result<String, OracleError> {
        let system = RENDER_SYSTEM_TEMPLATE.replace("{query_types}", &query_types.join(", "));
        let job_json = serde_json::to_string_pretty(job_data)?;
        let prompt = RENDER_PROMPT_TEMPLATE.replace("{job_data}", &job_json);

        let response = self.client.call(&prompt, &system).await?;
        Ok(response.text().unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_match_deserializes_contract() {
        let json = r#"{"jobCode": "sec01", "queryType": ["salary", "duties"]}"#;
        let reply: JobMatch = serde_json::from_str(json).unwrap();
        assert_eq!(reply.job_code.as_deref(), Some("sec01"));
        assert_eq!(reply.query_type, vec!["salary", "duties"]);
    }

    #[test]
    fn test_job_match_null_job_code() {
        let json = r#"{"jobCode": null, "queryType": ["unknown"]}"#;
        let reply: JobMatch = serde_json::from_str(json).unwrap();
        assert!(reply.job_code.is_none());
    }

    #[test]
    fn test_job_match_missing_query_type_is_an_error() {
        let json = r#"{"jobCode": "sec01"}"#;
        assert!(serde_json::from_str::<JobMatch>(json).is_err());
    }
}

//! Deterministic oracle stubs for tests. No network, scripted replies,
//! recorded calls.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{JobMatch, Oracle, OracleError};

/// Scripted oracle: returns the configured classification and render text,
/// or a failure when unconfigured. Records every call for assertions.
pub struct StubOracle {
    classify_reply: Option<JobMatch>,
    render_reply: Option<String>,
    pub classify_calls: Mutex<Vec<(String, String)>>,
    pub render_calls: Mutex<Vec<Value>>,
}

impl StubOracle {
    /// A stub whose classify and render calls both fail.
    pub fn failing() -> Self {
        Self {
            classify_reply: None,
            render_reply: None,
            classify_calls: Mutex::new(Vec::new()),
            render_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn classifying(reply: JobMatch) -> Self {
        Self {
            classify_reply: Some(reply),
            ..Self::failing()
        }
    }

    pub fn with_render(mut self, text: &str) -> Self {
        self.render_reply = Some(text.to_string());
        self
    }
}

/// Simulates a malformed-JSON reply from the model.
fn parse_failure() -> OracleError {
    OracleError::Parse(serde_json::from_str::<JobMatch>("not json").unwrap_err())
}

#[async_trait]
impl Oracle for StubOracle {
    async fn classify(&self, job_index: &str, message: &str) -> Result<JobMatch, OracleError> {
        self.classify_calls
            .lock()
            .unwrap()
            .push((job_index.to_string(), message.to_string()));
        self.classify_reply.clone().ok_or_else(parse_failure)
    }

    async fn render(&self, job_data: &Value, _query_types: &[String]) -> Result<String, OracleError> {
        self.render_calls.lock().unwrap().push(job_data.clone());
        self.render_reply.clone().ok_or_else(parse_failure)
    }
}

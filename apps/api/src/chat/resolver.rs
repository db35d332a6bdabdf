//! Query Resolver — builds the candidate listing and delegates job and
//! category identification to the oracle.
//!
//! The matching policy (jurisdiction mention first, then the most recently
//! listed title match, then the first match) lives in the classification
//! prompt; the resolver's job is to supply complete, correctly formatted
//! candidate context and to absorb every oracle failure into a fixed
//! fallback. `resolve` never returns an error.

use tracing::warn;

use crate::chat::category::QueryCategory;
use crate::chat::filter::filter_relevant;
use crate::dataset::{Dataset, JobRecord};
use crate::oracle::Oracle;

/// The resolver's output: a job code (absent when nothing matched) and a
/// never-empty ordered category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub job_code: Option<String>,
    pub categories: Vec<QueryCategory>,
}

impl ResolvedQuery {
    /// The total fallback used for every classification failure mode.
    pub fn fallback() -> Self {
        Self {
            job_code: None,
            categories: vec![QueryCategory::Unknown],
        }
    }
}

/// Formats candidates as the compact listing the classification prompt
/// enumerates.
pub fn build_job_index(candidates: &[&JobRecord]) -> String {
    candidates
        .iter()
        .map(|job| {
            format!(
                "Job Code: {}\nTitle: {}\nJurisdiction: {}\n",
                job.code, job.title, job.jurisdiction
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn resolve(message: &str, dataset: &Dataset, oracle: &dyn Oracle) -> ResolvedQuery {
    let candidates = filter_relevant(message, dataset);
    let job_index = build_job_index(&candidates);

    match oracle.classify(&job_index, message).await {
        Ok(reply) => {
            let mut categories: Vec<QueryCategory> = reply
                .query_type
                .iter()
                .map(|tag| QueryCategory::from_tag(tag))
                .collect();
            if categories.is_empty() {
                categories.push(QueryCategory::Unknown);
            }
            ResolvedQuery {
                job_code: reply.job_code,
                categories,
            }
        }
        Err(e) => {
            warn!("Classification failed, using fallback: {e}");
            ResolvedQuery::fallback()
        }
    }
}

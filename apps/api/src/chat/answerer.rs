//! The answer pipeline: candidate filter → classification → dataset lookup
//! → section assembly → rendering.
//!
//! Every failure mode inside the pipeline has a fixed user-facing fallback;
//! this function never surfaces an oracle error to the caller.

use tracing::{info, warn};

use crate::chat::assembler::{assemble, build_job_payload};
use crate::chat::resolver::resolve;
use crate::chat::tables::DomainTables;
use crate::dataset::Dataset;
use crate::oracle::Oracle;

pub const NO_MATCH_MESSAGE: &str =
    "I'm sorry, I couldn't find a job matching your request. Please try rephrasing your question.";

pub const NO_DETAILS_MESSAGE: &str =
    "I'm sorry, I couldn't find the details for this job. Please try again.";

/// Answers one user message. Stateless; each call is independent.
pub async fn answer(
    message: &str,
    dataset: &Dataset,
    oracle: &dyn Oracle,
    tables: &DomainTables,
) -> String {
    let resolved = resolve(message, dataset, oracle).await;

    let Some(job_code) = resolved.job_code else {
        return NO_MATCH_MESSAGE.to_string();
    };

    let Some(job) = dataset.get_by_code(&job_code) else {
        warn!("Oracle returned job code '{job_code}' with no dataset record");
        return NO_DETAILS_MESSAGE.to_string();
    };

    info!(
        "Resolved '{job_code}' ({}) with categories {:?}",
        job.title, resolved.categories
    );

    let sections = assemble(&resolved.categories, job, tables);
    let payload = build_job_payload(job, tables, &sections);
    let query_types: Vec<String> = resolved
        .categories
        .iter()
        .map(|c| c.tag().to_string())
        .collect();

    let display_jurisdiction = tables.display_jurisdiction(&job.jurisdiction);

    match oracle.render(&payload, &query_types).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => render_fallback(&job.title, &display_jurisdiction),
        Err(e) => {
            warn!("Rendering failed, using fallback: {e}");
            render_fallback(&job.title, &display_jurisdiction)
        }
    }
}

fn render_fallback(title: &str, jurisdiction: &str) -> String {
    format!(
        "I found the {title} position in {jurisdiction}, but I couldn't generate a response. Please try rephrasing your question."
    )
}

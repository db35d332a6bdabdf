//! Candidate Filter — narrows the dataset to jobs plausibly relevant to a
//! free-text query before the oracle disambiguates.

use crate::dataset::{Dataset, JobRecord};

/// Keyword overlap on title and jurisdiction. Tokens of 3 characters or
/// fewer are ignored. Falls back to the whole dataset when nothing matches
/// so the oracle always has candidates to choose from, at the cost of
/// precision on short or unclear queries.
pub fn filter_relevant<'a>(query: &str, dataset: &'a Dataset) -> Vec<&'a JobRecord> {
    let query_lower = query.to_lowercase();
    let keywords: Vec<&str> = query_lower
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .collect();

    let relevant: Vec<&JobRecord> = dataset
        .all()
        .iter()
        .filter(|job| {
            let title = job.title.to_lowercase();
            let jurisdiction = job.jurisdiction.to_lowercase();
            keywords
                .iter()
                .any(|keyword| title.contains(keyword) || jurisdiction.contains(keyword))
        })
        .collect();

    if relevant.is_empty() {
        dataset.all().iter().collect()
    } else {
        relevant
    }
}

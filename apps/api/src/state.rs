use std::sync::Arc;

use crate::chat::tables::DomainTables;
use crate::dataset::Dataset;
use crate::oracle::Oracle;

/// Shared application state injected into route handlers via Axum
/// extractors. The dataset and tables are built once at startup and
/// read-only afterwards, so requests share them without locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    /// Language-model collaborator behind a trait so tests inject stubs.
    pub oracle: Arc<dyn Oracle>,
    pub tables: Arc<DomainTables>,
}

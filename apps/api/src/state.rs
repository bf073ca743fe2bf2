use std::sync::Arc;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::scorer::{SimilarityScorer, TfidfCosineScorer};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// English language resources, loaded once at startup. Read-only.
    pub normalizer: Arc<Normalizer>,
    /// Pluggable similarity scorer. Default: TfidfCosineScorer.
    pub scorer: Arc<dyn SimilarityScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            normalizer: Arc::new(Normalizer::english()),
            scorer: Arc::new(TfidfCosineScorer),
        }
    }
}

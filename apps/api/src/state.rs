use std::sync::Arc;

use crate::config::Config;
use crate::extraction::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extractor. Selected from AI_PROVIDER at startup.
    pub extractor: Arc<dyn SkillExtractor>,
}

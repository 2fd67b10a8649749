use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::{MatchScorer, SkillOverlapScorer};
use crate::store::{PlatformData, Store};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Config,
    /// Pluggable match scorer. Default: SkillOverlapScorer. Jitter toggled via MATCH_JITTER.
    pub match_scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config, data: PlatformData) -> Self {
        let match_scorer = Arc::new(SkillOverlapScorer::from_config(config.match_jitter));
        Self {
            store: Arc::new(Store::new(data)),
            config,
            match_scorer,
        }
    }
}

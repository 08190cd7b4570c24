use std::sync::Arc;

use crate::config::Config;
use crate::services::Recommender;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub limits: RecommendLimits,
}

/// Request-shaping limits for `/api/recommend`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendLimits {
    /// Recommendations returned per request
    pub top_n: usize,
    /// Largest favorites list accepted
    pub max_favorites: usize,
}

impl Default for RecommendLimits {
    fn default() -> Self {
        Self {
            top_n: 5,
            max_favorites: 10,
        }
    }
}

impl From<&Config> for RecommendLimits {
    fn from(config: &Config) -> Self {
        Self {
            top_n: config.top_n,
            max_favorites: config.max_favorites,
        }
    }
}

impl AppState {
    /// Creates state around a prebuilt recommender
    pub fn new(recommender: Recommender, limits: RecommendLimits) -> Self {
        Self {
            recommender: Arc::new(recommender),
            limits,
        }
    }
}

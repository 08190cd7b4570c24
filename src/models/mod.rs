use serde::{Deserialize, Serialize};

pub mod movie;

pub use movie::{CatalogEntry, Recommendation};

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /api/recommend`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendRequest {
    pub favorites: Vec<String>,
}

/// Successful response of `POST /api/recommend`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub count: usize,
}

impl RecommendResponse {
    pub fn new(recommendations: Vec<Recommendation>) -> Self {
        let count = recommendations.len();
        Self {
            recommendations,
            count,
        }
    }
}

/// Error body returned with every non-2xx API response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

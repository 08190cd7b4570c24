use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{CatalogEntry, RecommendResponse};

use super::AppState;

const MISSING_FAVORITES: &str = "Please provide a list of favorite movies";
const EMPTY_FAVORITES: &str = "Favorites must be a non-empty list";
const NO_RECOMMENDATIONS: &str = "No recommendations found. Please check your movie selections.";

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get the full movie catalog
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    let movies = state.recommender.catalog().to_vec();
    tracing::debug!(count = movies.len(), "Serving catalog");
    Json(movies)
}

/// Recommend movies similar to the posted favorites
///
/// The body is validated by hand so that every malformed request gets a
/// 400 with an `error` message rather than axum's default rejection.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<RecommendResponse>> {
    let Json(body) = payload.map_err(|_| AppError::InvalidInput(MISSING_FAVORITES.to_string()))?;
    let favorites = parse_favorites(&body, state.limits.max_favorites)?;

    let recommendations = state
        .recommender
        .recommend(&favorites, state.limits.top_n);

    if recommendations.is_empty() {
        return Err(AppError::NotFound(NO_RECOMMENDATIONS.to_string()));
    }

    tracing::info!(
        favorites = favorites.len(),
        count = recommendations.len(),
        "Recommendations served"
    );

    Ok(Json(RecommendResponse::new(recommendations)))
}

fn parse_favorites(body: &Value, max_favorites: usize) -> AppResult<Vec<String>> {
    let favorites = body
        .get("favorites")
        .ok_or_else(|| AppError::InvalidInput(MISSING_FAVORITES.to_string()))?;

    let list = favorites
        .as_array()
        .filter(|list| !list.is_empty())
        .ok_or_else(|| AppError::InvalidInput(EMPTY_FAVORITES.to_string()))?;

    if list.len() > max_favorites {
        return Err(AppError::InvalidInput(format!(
            "Please select at most {} favorite movies",
            max_favorites
        )));
    }

    list.iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AppError::InvalidInput("Favorites must be movie titles".to_string())
            })
        })
        .collect()
}

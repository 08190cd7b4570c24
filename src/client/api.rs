//! Backend access for the page controller
//!
//! `MovieApi` is the seam the controller talks through. `HttpMovieApi` is the
//! production implementation over `reqwest`; tests swap in a mock.

use reqwest::Client as HttpClient;

use crate::models::{CatalogEntry, ErrorBody, Recommendation, RecommendRequest, RecommendResponse};

const RECOMMEND_FALLBACK_ERROR: &str = "Failed to get recommendations";
const CATALOG_FALLBACK_ERROR: &str = "Failed to load movies";

/// Errors surfaced to the page
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Network failure or an undecodable body
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` comes from the body's `error` field
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The request task panicked or was cancelled before producing a result
    #[error("Recommendation request failed: {0}")]
    Task(String),
}

/// Operations the page needs from the recommendation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieApi: Send + Sync {
    /// `GET /api/movies`
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, ClientError>;

    /// `POST /api/recommend` with the given favorites
    async fn recommend(&self, favorites: &[String]) -> Result<Vec<Recommendation>, ClientError>;
}

#[derive(Clone)]
pub struct HttpMovieApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpMovieApi {
    /// Creates a client for the backend at `base_url`, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    pub fn with_client(http_client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn backend_error(response: reqwest::Response, fallback: &str) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        ClientError::Backend { status, message }
    }
}

#[async_trait::async_trait]
impl MovieApi for HttpMovieApi {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, ClientError> {
        let url = format!("{}/api/movies", self.base_url);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::backend_error(response, CATALOG_FALLBACK_ERROR).await);
        }

        let movies: Vec<CatalogEntry> = response.json().await?;
        Ok(movies)
    }

    async fn recommend(&self, favorites: &[String]) -> Result<Vec<Recommendation>, ClientError> {
        let url = format!("{}/api/recommend", self.base_url);
        let request = RecommendRequest {
            favorites: favorites.to_vec(),
        };

        let response = self.http_client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(Self::backend_error(response, RECOMMEND_FALLBACK_ERROR).await);
        }

        let body: RecommendResponse = response.json().await?;
        Ok(body.recommendations)
    }
}

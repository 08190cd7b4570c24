use serde::Deserialize;

/// Backend configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movie dataset (CSV with title, genres, keywords, rating)
    #[serde(default = "default_movies_csv")]
    pub movies_csv: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of recommendations returned per request
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Upper bound on the favorites list accepted by /api/recommend
    #[serde(default = "default_max_favorites")]
    pub max_favorites: usize,

    /// Vocabulary cap for the TF-IDF vectorizer
    #[serde(default = "default_max_features")]
    pub max_features: usize,
}

fn default_movies_csv() -> String {
    "movies.csv".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_top_n() -> usize {
    5
}

fn default_max_favorites() -> usize {
    10
}

fn default_max_features() -> usize {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Page controller configuration, read from `REELMATCH_*` variables
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the recommendation backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Quiet period after the last keystroke before a search runs
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Maximum number of search results shown
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_search_limit() -> usize {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            search_debounce_ms: default_search_debounce_ms(),
            search_limit: default_search_limit(),
        }
    }
}

impl ClientConfig {
    /// Load client configuration from `REELMATCH_`-prefixed environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("REELMATCH_")
            .from_env::<ClientConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load client config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.movies_csv, "movies.csv");
        assert_eq!(config.port, 5000);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.max_favorites, 10);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_config_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("TOP_N".to_string(), "3".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_client_config_prefixed() {
        let vars = vec![(
            "REELMATCH_SEARCH_DEBOUNCE_MS".to_string(),
            "50".to_string(),
        )];
        let config: ClientConfig = envy::prefixed("REELMATCH_").from_iter(vars).unwrap();
        assert_eq!(config.search_debounce_ms, 50);
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.api_base_url, "http://localhost:5000");
    }
}

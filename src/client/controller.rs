use std::sync::Arc;

use crate::client::{
    api::{ClientError, MovieApi},
    render,
    search::{normalize_query, search},
    selection::Selection,
};
use crate::config::ClientConfig;
use crate::models::{CatalogEntry, Recommendation};

pub const LOAD_ERROR: &str = "Failed to load movies. Make sure the backend server is running.";
pub const EMPTY_SELECTION_ERROR: &str = "Please select at least one movie";
pub const BUTTON_LABEL: &str = "Get Recommendations";
pub const BUTTON_LOADING_LABEL: &str = "Loading...";

/// Search dropdown contents
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    Hidden,
    Shown(Vec<CatalogEntry>),
}

/// Recommendations section contents
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Hidden,
    Loading,
    Error(String),
    Results(Vec<Recommendation>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub label: &'static str,
}

/// Rendered page, one field per region the host swaps in
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub search_input: String,
    /// `None` while the dropdown is hidden
    pub search_results: Option<String>,
    pub selected: String,
    pub button: ButtonState,
    /// `None` while the recommendations section is hidden
    pub recommendations: Option<String>,
}

/// Everything the page remembers for one session
#[derive(Debug, Clone)]
pub struct PageState {
    pub catalog: Vec<CatalogEntry>,
    pub selection: Selection,
    pub search_input: String,
    pub search_results: SearchResults,
    pub panel: Panel,
    pub in_flight: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            selection: Selection::new(),
            search_input: String::new(),
            search_results: SearchResults::Hidden,
            panel: Panel::Hidden,
            in_flight: false,
        }
    }
}

/// Page controller: owns the session state and reacts to user actions
pub struct PageController {
    api: Arc<dyn MovieApi>,
    config: ClientConfig,
    state: PageState,
}

impl PageController {
    pub fn new(api: Arc<dyn MovieApi>, config: ClientConfig) -> Self {
        Self {
            api,
            config,
            state: PageState::default(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> Arc<dyn MovieApi> {
        Arc::clone(&self.api)
    }

    /// Fetches the catalog once. On failure the load error stays on screen
    /// and searches find nothing.
    pub async fn load_catalog(&mut self) -> bool {
        match self.api.fetch_catalog().await {
            Ok(movies) => {
                tracing::info!(count = movies.len(), "Loaded movies");
                self.state.catalog = movies;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading movies");
                self.state.panel = Panel::Error(LOAD_ERROR.to_string());
                false
            }
        }
    }

    /// Records a keystroke. Returns the normalized query to search for once
    /// the debounce window passes, or `None` when the input is blank, in
    /// which case the dropdown is hidden right away.
    pub fn set_search_input(&mut self, raw: &str) -> Option<String> {
        self.state.search_input = raw.to_string();
        let query = normalize_query(raw);
        if query.is_empty() {
            self.state.search_results = SearchResults::Hidden;
            return None;
        }
        Some(query)
    }

    /// Runs a search immediately. An empty query hides the dropdown.
    pub fn search(&mut self, query: &str) {
        if normalize_query(query).is_empty() {
            self.state.search_results = SearchResults::Hidden;
            return;
        }

        let results = search(&self.state.catalog, query, self.config.search_limit)
            .into_iter()
            .cloned()
            .collect();
        self.state.search_results = SearchResults::Shown(results);
    }

    /// Click outside the search box
    pub fn dismiss_results(&mut self) {
        self.state.search_results = SearchResults::Hidden;
    }

    /// A search result was clicked: select it and reset the search box
    pub fn pick(&mut self, title: &str) {
        self.select(title);
        self.state.search_input.clear();
        self.state.search_results = SearchResults::Hidden;
    }

    pub fn select(&mut self, title: &str) -> bool {
        self.state.selection.add(title)
    }

    pub fn deselect(&mut self, title: &str) -> bool {
        self.state.selection.remove(title)
    }

    /// Enabled iff something is selected and no request is running
    pub fn button(&self) -> ButtonState {
        if self.state.in_flight {
            return ButtonState {
                enabled: false,
                label: BUTTON_LOADING_LABEL,
            };
        }
        ButtonState {
            enabled: !self.state.selection.is_empty(),
            label: BUTTON_LABEL,
        }
    }

    /// Starts a recommendation request. Returns the favorites to post, or
    /// `None` if a request is already running or nothing is selected.
    pub fn begin_recommendations(&mut self) -> Option<Vec<String>> {
        if self.state.in_flight {
            tracing::debug!("Recommendation request already in flight");
            return None;
        }
        if self.state.selection.is_empty() {
            self.state.panel = Panel::Error(EMPTY_SELECTION_ERROR.to_string());
            return None;
        }

        self.state.in_flight = true;
        self.state.panel = Panel::Loading;
        Some(self.state.selection.titles().to_vec())
    }

    /// Applies the outcome of a request started by `begin_recommendations`
    pub fn finish_recommendations(&mut self, result: Result<Vec<Recommendation>, ClientError>) {
        self.state.in_flight = false;
        self.state.panel = match result {
            Ok(recommendations) => {
                tracing::info!(count = recommendations.len(), "Received recommendations");
                Panel::Results(recommendations)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error getting recommendations");
                Panel::Error(e.to_string())
            }
        };
    }

    /// Posts the current selection and waits for the answer
    pub async fn request_recommendations(&mut self) {
        let Some(favorites) = self.begin_recommendations() else {
            return;
        };
        let result = self.api.recommend(&favorites).await;
        self.finish_recommendations(result);
    }

    pub fn view(&self) -> View {
        let search_results = match &self.state.search_results {
            SearchResults::Hidden => None,
            SearchResults::Shown(results) => {
                let refs: Vec<&CatalogEntry> = results.iter().collect();
                Some(render::render_search_results(&refs))
            }
        };

        let recommendations = match &self.state.panel {
            Panel::Hidden => None,
            Panel::Loading => Some(render::render_loading()),
            Panel::Error(message) => Some(render::render_error(message)),
            Panel::Results(recommendations) => Some(render::render_cards(recommendations)),
        };

        View {
            search_input: self.state.search_input.clone(),
            search_results,
            selected: render::render_selection(&self.state.selection),
            button: self.button(),
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::MockMovieApi;

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("The Matrix", "Action|Sci-Fi", "hacker", Some(8.7)),
            CatalogEntry::new("Heat", "Crime|Thriller", "heist", Some(8.3)),
            CatalogEntry::new("Alien", "Horror|Sci-Fi", "space", None),
        ]
    }

    fn recommendation(title: &str, score: f64) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            genres: "Action".to_string(),
            keywords: "kw".to_string(),
            rating: 7.0,
            similarity_score: score,
        }
    }

    fn mock_with_catalog() -> MockMovieApi {
        let mut api = MockMovieApi::new();
        api.expect_fetch_catalog().returning(|| Ok(catalog()));
        api
    }

    async fn loaded(api: MockMovieApi) -> PageController {
        let mut controller = PageController::new(Arc::new(api), ClientConfig::default());
        assert!(controller.load_catalog().await);
        controller
    }

    #[tokio::test]
    async fn test_load_failure_shows_persistent_error() {
        let mut api = MockMovieApi::new();
        api.expect_fetch_catalog().times(1).returning(|| {
            Err(ClientError::Backend {
                status: 500,
                message: "Dataset not loaded".to_string(),
            })
        });
        let mut controller = PageController::new(Arc::new(api), ClientConfig::default());

        assert!(!controller.load_catalog().await);
        let view = controller.view();
        assert!(view.recommendations.unwrap().contains(LOAD_ERROR));

        controller.search("matrix");
        assert_eq!(controller.state().search_results, SearchResults::Shown(vec![]));
    }

    #[tokio::test]
    async fn test_empty_search_clears_results() {
        let mut controller = loaded(mock_with_catalog()).await;
        controller.search("heat");
        assert!(controller.view().search_results.is_some());

        assert_eq!(controller.set_search_input("   "), None);
        assert!(controller.view().search_results.is_none());
    }

    #[tokio::test]
    async fn test_search_finds_known_title() {
        let mut controller = loaded(mock_with_catalog()).await;
        let query = controller.set_search_input(" MaTr ").unwrap();
        assert_eq!(query, "matr");

        controller.search(&query);
        match &controller.state().search_results {
            SearchResults::Shown(results) => {
                assert!(results.len() <= 10);
                assert!(results.iter().any(|m| m.title == "The Matrix"));
            }
            SearchResults::Hidden => panic!("results should be shown"),
        }
    }

    #[tokio::test]
    async fn test_pick_clears_search_and_dedupes() {
        let mut controller = loaded(mock_with_catalog()).await;
        controller.set_search_input("heat");
        controller.search("heat");

        controller.pick("Heat");
        controller.pick("Heat");

        let state = controller.state();
        assert_eq!(state.selection.titles(), ["Heat"]);
        assert!(state.search_input.is_empty());
        assert_eq!(state.search_results, SearchResults::Hidden);
    }

    #[tokio::test]
    async fn test_button_enabled_iff_selection_non_empty() {
        let mut controller = loaded(mock_with_catalog()).await;
        assert!(!controller.button().enabled);

        controller.select("Heat");
        assert!(controller.button().enabled);

        controller.deselect("Heat");
        assert!(!controller.button().enabled);
        assert_eq!(controller.button().label, BUTTON_LABEL);
    }

    #[tokio::test]
    async fn test_request_with_empty_selection_shows_error() {
        let mut api = mock_with_catalog();
        api.expect_recommend().never();
        let mut controller = loaded(api).await;

        controller.request_recommendations().await;
        let view = controller.view();
        assert!(view.recommendations.unwrap().contains(EMPTY_SELECTION_ERROR));
    }

    #[tokio::test]
    async fn test_successful_request_renders_cards() {
        let mut api = mock_with_catalog();
        api.expect_recommend()
            .withf(|favorites| favorites.len() == 1 && favorites[0] == "Heat")
            .times(1)
            .returning(|_| Ok(vec![recommendation("Ronin", 0.72), recommendation("Thief", 0.4)]));
        let mut controller = loaded(api).await;
        controller.select("Heat");

        controller.request_recommendations().await;

        let html = controller.view().recommendations.unwrap();
        assert_eq!(html.matches(r#"class="movie-card""#).count(), 2);
        assert!(html.contains(r#"style="width: 72%""#));
        assert!(html.contains(r#"style="width: 40%""#));
        assert!(html.find("Ronin").unwrap() < html.find("Thief").unwrap());
        assert_eq!(controller.button().label, BUTTON_LABEL);
        assert!(controller.button().enabled);
    }

    #[tokio::test]
    async fn test_backend_error_shown_inline_and_button_restored() {
        let mut api = mock_with_catalog();
        api.expect_recommend().times(1).returning(|_| {
            Err(ClientError::Backend {
                status: 404,
                message: "No recommendations found. Please check your movie selections."
                    .to_string(),
            })
        });
        let mut controller = loaded(api).await;
        controller.select("Heat");

        controller.request_recommendations().await;

        let view = controller.view();
        assert!(view
            .recommendations
            .unwrap()
            .contains("No recommendations found. Please check your movie selections."));
        assert!(view.button.enabled);
        assert!(!controller.state().in_flight);
    }

    #[tokio::test]
    async fn test_in_flight_blocks_second_request() {
        let mut controller = loaded(mock_with_catalog()).await;
        controller.select("Heat");

        assert_eq!(controller.begin_recommendations(), Some(vec!["Heat".to_string()]));
        assert_eq!(controller.state().panel, Panel::Loading);
        assert_eq!(
            controller.button(),
            ButtonState {
                enabled: false,
                label: BUTTON_LOADING_LABEL
            }
        );
        assert_eq!(controller.begin_recommendations(), None);

        controller.finish_recommendations(Ok(vec![]));
        let html = controller.view().recommendations.unwrap();
        assert!(html.contains(render::NO_RECOMMENDATIONS));
    }

    #[tokio::test]
    async fn test_dismiss_hides_results() {
        let mut controller = loaded(mock_with_catalog()).await;
        controller.search("sci");
        controller.dismiss_results();
        assert!(controller.view().search_results.is_none());
    }
}

//! Page controller for the recommendation demo
//!
//! Loads the catalog once, filters it as the user types, keeps the list of
//! selected titles and asks the backend for recommendations. Output is a
//! [`View`] of escaped HTML fragments; input is a stream of [`UiEvent`]s.

pub mod api;
pub mod controller;
pub mod event_loop;
pub mod render;
pub mod search;
pub mod selection;

pub use api::{ClientError, HttpMovieApi, MovieApi};
pub use controller::{ButtonState, PageController, PageState, Panel, SearchResults, View};
pub use event_loop::{spawn, PageHandle, UiEvent};
pub use selection::Selection;

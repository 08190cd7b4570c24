//! Event-driven wiring for the page controller
//!
//! The host forwards DOM events as [`UiEvent`]s and renders every [`View`]
//! published on the watch channel. Searches wait for a quiet period after the
//! last keystroke. A recommendation request runs on its own task, so input
//! keeps flowing while it is in flight. The loop awaits the task's handle, so
//! a request that panics still ends the loading state. Dropping the event
//! sender ends the loop and aborts any request still running.

use std::time::Duration;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{sleep_until, Instant},
};

use crate::client::{
    api::ClientError,
    controller::{PageController, View},
};
use crate::models::Recommendation;

/// User actions the host page reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search box now contains this text
    SearchInput(String),
    /// Click somewhere outside the search box and its dropdown
    ClickOutside,
    /// A search result was clicked
    Pick(String),
    /// The remove button on a selected title was clicked
    Remove(String),
    /// The "Get Recommendations" button was clicked
    RequestRecommendations,
}

/// Host-side ends of a running page
pub struct PageHandle {
    pub events: mpsc::UnboundedSender<UiEvent>,
    pub view: watch::Receiver<View>,
    pub task: JoinHandle<()>,
}

impl PageHandle {
    /// Reports an event; returns `false` once the page has shut down
    pub fn send(&self, event: UiEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// The most recently published view
    pub fn current(&self) -> View {
        self.view.borrow().clone()
    }
}

type RecommendOutcome = Result<Vec<Recommendation>, ClientError>;

/// Spawns the page on the current runtime. The catalog is loaded before any
/// event is handled.
pub fn spawn(controller: PageController) -> PageHandle {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (view_tx, view_rx) = watch::channel(controller.view());
    let task = tokio::spawn(run(controller, events_rx, view_tx));

    PageHandle {
        events: events_tx,
        view: view_rx,
        task,
    }
}

pub async fn run(
    mut controller: PageController,
    mut events: mpsc::UnboundedReceiver<UiEvent>,
    view: watch::Sender<View>,
) {
    controller.load_catalog().await;
    view.send_replace(controller.view());

    let debounce = Duration::from_millis(controller.config().search_debounce_ms);
    let mut pending_search: Option<(Instant, String)> = None;
    let mut in_flight: Option<JoinHandle<RecommendOutcome>> = None;

    loop {
        let deadline = pending_search.as_ref().map(|(at, _)| *at);

        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                tracing::trace!(?event, "UI event");

                match event {
                    UiEvent::SearchInput(raw) => {
                        pending_search = controller
                            .set_search_input(&raw)
                            .map(|query| (Instant::now() + debounce, query));
                    }
                    UiEvent::ClickOutside => controller.dismiss_results(),
                    UiEvent::Pick(title) => {
                        pending_search = None;
                        controller.pick(&title);
                    }
                    UiEvent::Remove(title) => {
                        controller.deselect(&title);
                    }
                    UiEvent::RequestRecommendations => {
                        if let Some(favorites) = controller.begin_recommendations() {
                            let api = controller.api();
                            in_flight = Some(tokio::spawn(async move {
                                api.recommend(&favorites).await
                            }));
                        }
                    }
                }
            }
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some((_, query)) = pending_search.take() {
                    controller.search(&query);
                }
            }
            joined = async {
                match in_flight.as_mut() {
                    Some(task) => task.await,
                    None => std::future::pending().await,
                }
            }, if in_flight.is_some() => {
                in_flight = None;
                // A panicked or cancelled request still has to release the button
                let outcome = joined.unwrap_or_else(|e| Err(ClientError::Task(e.to_string())));
                controller.finish_recommendations(outcome);
            }
        }

        view.send_replace(controller.view());
    }

    if let Some(task) = in_flight {
        tracing::debug!("Page closed with a request in flight");
        task.abort();
    }
}

//! Search page controller.
//!
//! Owns the paginated fetch state machine (idle / loading / exhausted), the
//! infinite-scroll trigger, result rendering, the stats and no-results
//! panels, the filters/feedback panel toggles, and feedback submission. All
//! state that used to live in page globals is a field here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use maud::Render;
use tracing::{debug, error};

use crate::api::{ApiClient, ApiError, Cursor, SearchResponse};
use crate::components::TrialCard;
use crate::config::{Config, ConfigError};
use crate::constants::{
    FEEDBACK_BODY, FEEDBACK_CONTAINER, FEEDBACK_PANEL, FEEDBACK_STATUS, FEEDBACK_SUBJECT,
    FILTERS_CONTAINER, FILTERS_STATUS, LOADING_INDICATOR, NO_RESULTS_MESSAGE, NO_RESULTS_PANEL,
    PANEL_DISPLAY, RESULTS_CONTAINER, STATS_PANEL,
};
use crate::dom::Dom;
use crate::notify::Notifier;

/// Whether the given route serves the JSON search API.
///
/// The home route renders a recent-trials page without search; a controller
/// built for it starts exhausted and never fetches.
#[must_use]
pub fn search_enabled(path: &str) -> bool {
    path != "/"
}

#[derive(Debug, Clone, Copy)]
struct FetchState {
    cursor: Cursor,
    loading: bool,
}

/// Controller for the search results page.
pub struct SearchPage<D, N> {
    client: ApiClient,
    dom: D,
    notifier: N,
    scroll_threshold: f64,
    state: Mutex<FetchState>,
    feedback_in_flight: AtomicBool,
}

impl<D: Dom, N: Notifier> SearchPage<D, N> {
    /// Construct the controller for the page at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: &Config, path: &str, dom: D, notifier: N) -> Result<Self, ConfigError> {
        let client = ApiClient::new(config)?;
        let cursor = if search_enabled(path) {
            Cursor::Page(0)
        } else {
            Cursor::Exhausted
        };
        Ok(Self {
            client,
            dom,
            notifier,
            scroll_threshold: config.scroll_threshold,
            state: Mutex::new(FetchState {
                cursor,
                loading: false,
            }),
            feedback_in_flight: AtomicBool::new(false),
        })
    }

    /// The DOM the controller runs against.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// The notifier the controller reports through.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Current pagination cursor.
    pub fn cursor(&self) -> Cursor {
        self.state().cursor
    }

    fn state(&self) -> MutexGuard<'_, FetchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Initial fetch, run once when the page has loaded.
    pub async fn on_page_load(&self) {
        self.load_more().await;
    }

    /// Scroll listener: load more once the user passes the threshold.
    ///
    /// Purely advisory; [`Self::load_more`] stays idempotent against the
    /// loading guard.
    pub async fn on_scroll(&self, scroll_top: f64, viewport_height: f64, document_height: f64) {
        // NaN from a zero scrollable height fails the comparison.
        let scrolled = scroll_top / (document_height - viewport_height);
        if scrolled > self.scroll_threshold {
            self.load_more().await;
        }
    }

    /// Fetch and render the next page of results.
    ///
    /// No-op while a fetch is in flight or once the cursor is exhausted. The
    /// guard is taken synchronously before the request starts, so a trigger
    /// racing with another observes either the in-flight fetch or its settled
    /// cursor.
    pub async fn load_more(&self) {
        let next = {
            let mut state = self.state();
            if state.loading {
                return;
            }
            let Some(next) = state.cursor.next_page() else {
                return;
            };
            state.loading = true;
            next
        };

        debug!(page = next, "fetching results page");
        self.dom.show(LOADING_INDICATOR);
        let result = self.client.fetch_page(next).await;
        self.dom.hide(LOADING_INDICATOR);

        let mut state = self.state();
        state.loading = false;
        match result {
            Ok(response) => self.apply_response(&mut state, &response),
            Err(err) => self.apply_error(&mut state, &err),
        }
    }

    fn apply_response(&self, state: &mut FetchState, response: &SearchResponse) {
        state.cursor = response.page;

        if response.papers.is_empty() {
            self.dom.show(NO_RESULTS_PANEL);
            state.cursor = Cursor::Exhausted;
            return;
        }

        if state.cursor.is_exhausted() {
            self.dom.show(NO_RESULTS_PANEL);
        }

        match response.stats.as_deref().filter(|stats| !stats.is_empty()) {
            Some(stats) => {
                self.dom.set_html(STATS_PANEL, stats);
                self.dom.show(STATS_PANEL);
            }
            None => {
                self.dom.set_html(STATS_PANEL, "");
                self.dom.hide(STATS_PANEL);
            }
        }

        debug!(count = response.papers.len(), "rendering results");
        for paper in &response.papers {
            self.dom
                .append_html(RESULTS_CONTAINER, &TrialCard::new(paper).render().into_string());
        }
    }

    fn apply_error(&self, state: &mut FetchState, err: &ApiError) {
        error!(error = %err, "search request failed");
        state.cursor = Cursor::Exhausted;
        self.dom
            .set_html(NO_RESULTS_MESSAGE, "Refresh the page to try again.");
        self.dom.show(NO_RESULTS_PANEL);
        match err {
            // The timeout is self-inflicted; one notice is enough.
            ApiError::Timeout => self.notifier.error("Sorry! Request timed out."),
            other => self.notifier.error(&other.to_string()),
        }
    }

    /// Toggle the advanced-filters panel, updating its status label.
    pub fn toggle_advanced_filters(&self) {
        if self.dom.is_hidden(FILTERS_CONTAINER) {
            self.dom.set_display(FILTERS_CONTAINER, PANEL_DISPLAY);
            self.dom.set_html(FILTERS_STATUS, "Hide");
        } else {
            self.dom.set_display(FILTERS_CONTAINER, "none");
            self.dom.set_html(FILTERS_STATUS, "");
        }
    }

    /// Toggle the feedback panel.
    pub fn toggle_feedback(&self) {
        if self.dom.is_hidden(FEEDBACK_PANEL) {
            self.dom.set_display(FEEDBACK_PANEL, PANEL_DISPLAY);
        } else {
            self.dom.set_display(FEEDBACK_PANEL, "none");
        }
    }

    /// Submit the feedback form.
    ///
    /// Overlapping submissions are rejected by a re-entrancy flag that is
    /// cleared once the request settles, regardless of outcome. On success
    /// the form is cleared and hidden; on error the form is left intact and
    /// the raw response body is surfaced.
    pub async fn submit_feedback(&self) {
        if self.feedback_in_flight.swap(true, Ordering::SeqCst) {
            return;
        }

        let subject = self.dom.value(FEEDBACK_SUBJECT);
        let body = self.dom.value(FEEDBACK_BODY);
        let result = self
            .client
            .send_feedback(subject.trim(), body.trim())
            .await;

        match result {
            Ok(message) => {
                self.notifier.success(&message);
                self.dom.set_value(FEEDBACK_SUBJECT, "");
                self.dom.set_value(FEEDBACK_BODY, "");
                self.dom.set_display(FEEDBACK_CONTAINER, "none");
                self.dom.set_html(FEEDBACK_STATUS, "");
            }
            Err(err) => {
                error!(error = %err, "feedback submission failed");
                let message = err
                    .response_body()
                    .map_or_else(|| err.to_string(), str::to_string);
                self.notifier.error(&message);
            }
        }

        self.feedback_in_flight.store(false, Ordering::SeqCst);
    }
}

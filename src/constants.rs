//! Shared constants used across the page controllers.
//!
//! The element identifiers are part of the contract with the page templates:
//! the controllers address elements exclusively through these ids.

use std::time::Duration;

/// Container the search page appends rendered result blocks to.
pub const RESULTS_CONTAINER: &str = "rtable";

/// Loading indicator shown while a search fetch is in flight.
pub const LOADING_INDICATOR: &str = "loader";

/// Panel shown when the result set is exhausted or a fetch failed.
pub const NO_RESULTS_PANEL: &str = "noresults";

/// Message element inside the no-results panel.
pub const NO_RESULTS_MESSAGE: &str = "noresults-message";

/// Panel holding the server-rendered search statistics line.
pub const STATS_PANEL: &str = "stats";

/// Advanced-filters panel toggled from the search form.
pub const FILTERS_CONTAINER: &str = "filters-container";

/// Status element next to the advanced-filters toggle.
pub const FILTERS_STATUS: &str = "filters-status";

/// Feedback panel toggled from the page header.
pub const FEEDBACK_PANEL: &str = "feedback";

/// Subject field of the feedback form.
pub const FEEDBACK_SUBJECT: &str = "feedback-subject";

/// Body field of the feedback form.
pub const FEEDBACK_BODY: &str = "feedback-body";

/// Container wrapping the feedback form, hidden after a successful submit.
pub const FEEDBACK_CONTAINER: &str = "feedback-container";

/// Status element inside the feedback form.
pub const FEEDBACK_STATUS: &str = "feedback-status";

/// Container holding the volunteer form's "other symptom" rows, placed
/// directly after the fixed symptom checkbox group.
pub const OTHER_ENTRIES_CONTAINER: &str = "other-symptoms";

/// Display value used when opening the filters and feedback panels.
pub const PANEL_DISPLAY: &str = "grid";

/// Placeholder shown for any result field the server left missing or empty.
pub const UNSPECIFIED: &str = "Unspecified";

/// Client-side timeout after which an in-flight search fetch is aborted.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Fraction of the scrollable height past which scrolling loads more results.
pub const SCROLL_THRESHOLD: f64 = 0.9;

//! Maud HTML components rendered by the page controllers.
//!
//! - `trial_card`: one search result block appended to the results container
//! - `form`: the volunteer form's "other symptom" checkbox/text-field row

pub mod form;
pub mod trial_card;

pub use form::OtherEntryRow;
pub use trial_card::TrialCard;

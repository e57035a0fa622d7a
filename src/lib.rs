//! Client-side behavior layer for a clinical-trial search site.
//!
//! Two independent page controllers, constructed at page initialization and
//! driven by event callbacks: the search page (infinite-scroll pagination of
//! trial results, panel toggles, feedback submission) and the volunteer form
//! (a growable list of "other symptom" checkbox/text-field pairs). Both run
//! against injected [`dom::Dom`] and [`notify::Notifier`] seams, so the
//! behavior is fully exercisable without a browser.

pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod dom;
pub mod notify;
pub mod pages;

//! HTTP client and wire models for the search and feedback endpoints.

pub mod client;
pub mod models;

pub use client::{ApiClient, ApiError};
pub use models::{Cursor, SearchResponse, Timestamp, TrialRecord};

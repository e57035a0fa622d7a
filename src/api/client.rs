//! HTTP client for the search and feedback endpoints.

use std::time::Duration;

use reqwest::header;
use thiserror::Error;

use crate::api::models::SearchResponse;
use crate::config::{Config, ConfigError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The client-side timeout elapsed and the request was abandoned.
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ApiError {
    /// Raw response body, for error notices that surface it verbatim.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Client for the page's JSON endpoints.
///
/// The search fetch is subject to the configured client-side timeout; the
/// feedback request runs without one.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    search_url: String,
    feedback_url: String,
    fetch_timeout: Duration,
}

impl ApiClient {
    /// Build a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            http: reqwest::Client::new(),
            search_url: config.search_url.clone(),
            feedback_url: config.feedback_url.clone(),
            fetch_timeout: config.fetch_timeout,
        })
    }

    /// Fetch one page of search results.
    ///
    /// The request carries JSON content-type and accept headers; the server
    /// dispatches on them to serve the JSON API instead of the HTML page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Timeout`] if the timeout elapses, or a transport
    /// or status error otherwise.
    pub async fn fetch_page(&self, page: u32) -> Result<SearchResponse, ApiError> {
        let request = async {
            let response = self
                .http
                .get(&self.search_url)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::ACCEPT, "application/json")
                .query(&[("page", page)])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::Status { status, body });
            }

            Ok(response.json::<SearchResponse>().await?)
        };

        match tokio::time::timeout(self.fetch_timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout),
        }
    }

    /// Submit feedback, returning the server's plain-text reply.
    ///
    /// # Errors
    ///
    /// Returns a status error carrying the raw response body so callers can
    /// surface it to the user.
    pub async fn send_feedback(&self, subject: &str, body: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .get(&self.feedback_url)
            .query(&[("subject", subject), ("body", body)])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::Status { status, body: text })
        }
    }
}

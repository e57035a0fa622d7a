use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid value for {name}: {message}")]
    InvalidValue {
        name: &'static str,
        message: String,
    },
}

/// Controller configuration supplied by the host page.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint serving paginated JSON search results.
    pub search_url: String,
    /// Endpoint receiving feedback submissions.
    pub feedback_url: String,
    /// Client-side abort timeout for the search fetch.
    pub fetch_timeout: Duration,
    /// Fraction of the scrollable height that triggers loading more results.
    pub scroll_threshold: f64,
}

impl Config {
    /// Create a configuration with the default timeout and scroll threshold.
    #[must_use]
    pub fn new(search_url: impl Into<String>, feedback_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
            feedback_url: feedback_url.into(),
            fetch_timeout: constants::FETCH_TIMEOUT,
            scroll_threshold: constants::SCROLL_THRESHOLD,
        }
    }

    /// Configuration for tests.
    #[must_use]
    pub fn for_testing(search_url: &str, feedback_url: &str) -> Self {
        Self::new(search_url, feedback_url)
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint URL does not parse, the timeout is
    /// zero, or the scroll threshold is outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.search_url).map_err(|source| ConfigError::InvalidUrl {
            name: "search_url",
            source,
        })?;
        Url::parse(&self.feedback_url).map_err(|source| ConfigError::InvalidUrl {
            name: "feedback_url",
            source,
        })?;
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "fetch_timeout",
                message: "must be non-zero".to_string(),
            });
        }
        if !(self.scroll_threshold > 0.0 && self.scroll_threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                name: "scroll_threshold",
                message: format!("must be within (0, 1], got {}", self.scroll_threshold),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config::new("https://example.com/search", "https://example.com/feedback");
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_search_url() {
        let config = Config::new("not a url", "https://example.com/feedback");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { name: "search_url", .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::new("https://example.com/search", "https://example.com/feedback");
        config.fetch_timeout = Duration::ZERO;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { name: "fetch_timeout", .. })
        ));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut config = Config::new("https://example.com/search", "https://example.com/feedback");
        config.scroll_threshold = 1.5;
        assert!(config.validate().is_err());
        config.scroll_threshold = 0.0;
        assert!(config.validate().is_err());
    }
}

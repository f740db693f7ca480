//! Error types for contract checks against the reqres API.
//!
//! Every failure a scenario can hit is one of these variants: the HTTP layer
//! (status, latency, transport), decoding (missing data, bad JSON, bad
//! timestamps) and plain value mismatches.

use thiserror::Error;

/// Result type alias for reqres API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while issuing a call or checking its response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The response status did not match the active response specification.
    #[error("expected status {expected} but got {actual} from {url}: {body}")]
    UnexpectedStatus {
        /// Status required by the response specification
        expected: u16,
        /// Status actually returned
        actual: u16,
        /// The URL that was requested
        url: String,
        /// Raw response body, kept for diagnosis
        body: String,
    },

    /// The response arrived after the configured time bound.
    #[error("response from {url} took {elapsed_ms} ms, limit is {limit_ms} ms")]
    TooSlow {
        /// The URL that was requested
        url: String,
        /// Measured wall-clock time
        elapsed_ms: u128,
        /// Upper bound from the response specification
        limit_ms: u128,
    },

    /// A `data` envelope was required but absent or null.
    #[error("response from {url} has no `data` field")]
    MissingData {
        /// The URL that was requested
        url: String,
    },

    /// A value in the response did not match the expected one.
    #[error("{check}: expected {expected}, got {actual}")]
    AssertionFailed {
        /// Short name of the check that failed
        check: String,
        /// Expected value, rendered for display
        expected: String,
        /// Actual value, rendered for display
        actual: String,
    },

    /// A timestamp field could not be parsed as RFC 3339.
    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        /// The raw timestamp text
        value: String,
        /// Underlying parse failure
        #[source]
        source: chrono::ParseError,
    },

    /// Client configuration is invalid.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an [`ApiError::AssertionFailed`] from anything displayable.
    pub fn assertion(
        check: impl Into<String>,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::AssertionFailed {
            check: check.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

//! Validation service error types.

use thiserror::Error;

/// Errors that can occur while obtaining a verdict.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the API asked us to wait.
        retry_after_secs: u64,
    },

    /// The model reply could not be read as JSON or had no content.
    #[error("parse error: {0}")]
    Parse(String),

    /// The model reply was JSON but did not match the verdict schema.
    #[error("verdict schema violation: {errors:?}")]
    Schema {
        /// Individual error messages from the schema validator.
        errors: Vec<String>,
    },

    /// The LLM validator was requested without usable configuration.
    #[error("validator not configured: {0}")]
    NotConfigured(String),
}

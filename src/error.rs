// src/error.rs
//! Application error types with structured error handling.
//!
//! Three kinds of failure can reach a caller: the network never produced a
//! response, the Notion API answered with a non-2xx status, or the response
//! body did not match the expected schema. Each gets its own variant so the
//! embedding application can present them differently.

use thiserror::Error;

pub use reqwest::StatusCode;

/// A response body that did not match the expected schema.
///
/// Every variant carries the path of the offending field so a decode
/// failure in page 37 of a query response names exactly where it happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A discriminant value outside the supported set.
    #[error("unsupported variant `{variant}` at {path}")]
    UnsupportedVariant { path: String, variant: String },

    /// A field that was missing or had the wrong JSON shape.
    #[error("unexpected shape at {path}: expected {expected}, found {actual}")]
    Shape {
        path: String,
        expected: String,
        actual: String,
    },
}

impl DecodeError {
    pub(crate) fn shape(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Shape {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Connection-level failure: no response was received at all.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// The request exceeded the fixed request ceiling.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The Notion API answered with a non-2xx status.
    #[error("Notion API returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The response body did not match the expected schema.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Malformed id or token at the configuration boundary.
    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("missing configuration: {0}")]
    MissingConfiguration(String),
}

// Route timeouts to their own variant so the embedding application can
// distinguish "slow" from "offline".
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            AppError::Network(err)
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

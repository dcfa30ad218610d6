//! Error types for Pillarkit
//!
//! This module provides the error type hierarchy using `thiserror`.
//! Extraction itself never fails; these errors cover request validation,
//! the completion call, and keyword dataset loading.

use thiserror::Error;

/// The main error type for Pillarkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// Request validation errors
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    /// Text-generation call errors
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    /// Keyword dataset errors
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Input validation errors, raised before anything is dispatched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No keyword survived comma-split and trim
    #[error("at least one keyword is required")]
    EmptyKeywords,

    /// A required field was blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors from the chat-completion endpoint
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The credential was rejected
    #[error("credential rejected ({status})")]
    Unauthorized {
        /// HTTP status code
        status: u16,
    },

    /// Any other non-success status
    #[error("HTTP error {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Response decoded but did not carry usable text
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Keyword dataset errors
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Dataset could not be parsed
    #[error("failed to parse dataset: {0}")]
    Parse(String),

    /// Unknown sort column
    #[error("unknown sort field: {0}")]
    UnknownField(String),
}

/// Result type alias for Pillarkit operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Create a configuration error from a string
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CompletionError::MalformedResponse(err.to_string())
        } else {
            CompletionError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Request(RequestError::EmptyKeywords);
        assert!(err.to_string().contains("Invalid request"));
        assert!(err.to_string().contains("at least one keyword"));
    }

    #[test]
    fn test_missing_field() {
        let err = RequestError::MissingField("context");
        assert_eq!(err.to_string(), "missing required field: context");
    }

    #[test]
    fn test_http_error() {
        let err = CompletionError::Http {
            status: 500,
            message: "upstream exploded".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("upstream exploded"));
    }

    #[test]
    fn test_unauthorized_error() {
        let err = Error::from(CompletionError::Unauthorized { status: 401 });
        assert_eq!(err.to_string(), "Completion error: credential rejected (401)");
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}

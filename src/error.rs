//! Error types for the Akeneo API client.
//!
//! Every failure mode of the crate is covered by one [`Error`] variant, from
//! construction-time configuration problems to per-call transport failures.

use serde::Deserialize;
use thiserror::Error;

/// A specialized `Result` type for Akeneo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Akeneo API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client construction input (missing credentials, bad base URL,
    /// unsupported PIM version). Detected before any request is made.
    #[error("configuration error: {0}")]
    Config(String),

    /// Password or refresh grant failed, or the token endpoint returned an
    /// incomplete token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Query options could not be encoded as URL parameters.
    #[error("query serialization error: {0}")]
    Serialization(String),

    /// The server kept throttling past the configured retry budget.
    #[error("throttled after {attempts} attempts: {message}")]
    ThrottleExhausted {
        /// Total attempts made, initial call included.
        attempts: u32,
        /// Last server message, when one was decodable.
        message: String,
    },

    /// API returned a non-success response other than 429/404.
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Numeric error code from the Akeneo error envelope.
        code: Option<i64>,
        /// Human-readable server message.
        message: String,
    },

    /// Resource not found (404). Distinct from [`Error::Api`] because callers
    /// commonly branch on it.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid input provided to a call, rejected before anything is sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The pagination producer task failed unrecoverably.
    #[error("stream error: {0}")]
    Stream(String),

    /// I/O failure while writing a downloaded body.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Returns `true` if this error is a 404 on a resource or download path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns `true` if this error is potentially transient and the whole
    /// operation could be retried by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Http(_) | Error::ThrottleExhausted { .. })
    }
}

/// Error envelope returned by the Akeneo API on non-success responses.
///
/// See <https://api.akeneo.com/documentation/responses.html>.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

impl ErrorResponse {
    /// Decode the envelope from a raw body, tolerating non-JSON payloads.
    pub(crate) fn from_body(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::Auth("bad grant".into()).is_auth_error());
        assert!(!Error::NotFound("gone".into()).is_auth_error());
        assert!(Error::NotFound("gone".into()).is_not_found());
        assert!(Error::ThrottleExhausted { attempts: 3, message: "slow down".into() }
            .is_retryable());
        assert!(!Error::Config("empty secret".into()).is_retryable());
    }

    #[test]
    fn test_error_response_decoding() {
        let envelope =
            ErrorResponse::from_body(br#"{"code":422,"message":"Property does not exist"}"#)
                .expect("valid envelope");
        assert_eq!(envelope.code, Some(422));
        assert_eq!(envelope.message, "Property does not exist");

        assert!(ErrorResponse::from_body(b"<html>gateway</html>").is_none());
    }
}

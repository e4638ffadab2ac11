//! Error types for the paypayopa library.
//!
//! API-level failures (HTTP 4xx/5xx with a PayPay result code) are not errors:
//! they come back as [`ResultInfo`](crate::types::ResultInfo). This module only
//! covers failures that prevent a request from being sent or understood.

use crate::jwt::AuthorizationResponseToken;
use thiserror::Error;

/// Main error type for PayPay API operations.
#[derive(Error, Debug)]
pub enum OpaError {
    /// The outgoing request body could not be read for signing
    #[error("failed to read body: {0}")]
    BodyRead(String),

    /// Error during HTTP request/response handling
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during Base64 decoding
    #[error("Base64 error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    /// Error parsing URL
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// The request did not complete within its timeout
    #[error("request timeout")]
    TimeoutExceeded,

    /// A header value could not be encoded
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The authorization response token is malformed, badly signed or not yet valid
    #[error("jwt: invalid: {0}")]
    InvalidToken(String),

    /// The token audience is not the configured merchant
    #[error("jwt: audience not match (expected {expected:?}, got {actual:?})")]
    AudienceMismatch {
        /// Merchant ID from the credentials
        expected: String,
        /// Audience claim found in the token
        actual: String,
    },

    /// The token signature is valid but `exp` has passed.
    /// The decoded token is carried so callers can still inspect it.
    #[error("jwt: token is expired")]
    TokenExpired(Box<AuthorizationResponseToken>),
}

/// Result type alias for PayPay API operations.
pub type Result<T> = std::result::Result<T, OpaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OpaError::BodyRead("stream body".to_string());
        assert_eq!(err.to_string(), "failed to read body: stream body");

        assert_eq!(OpaError::TimeoutExceeded.to_string(), "request timeout");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let opa_err: OpaError = json_err.into();
        assert!(matches!(opa_err, OpaError::JsonError(_)));
    }

    #[test]
    fn test_audience_mismatch_display() {
        let err = OpaError::AudienceMismatch {
            expected: "MERCHANT_ID".to_string(),
            actual: "OTHER".to_string(),
        };
        assert!(err.to_string().starts_with("jwt: audience not match"));
    }
}

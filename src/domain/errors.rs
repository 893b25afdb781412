//! Domain error types
//!
//! This module defines the error hierarchy for the PII setup client.
//! Errors are domain-specific and don't expose third-party HTTP client types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PiiSetupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote store errors
    #[error("Remote store error: {0}")]
    Remote(#[from] RemoteError),

    /// A create, update or delete was rejected or could not be delivered.
    ///
    /// Carries the user-facing message that was also sent as a notification.
    #[error("{0}")]
    Operation(String),

    /// A loaded value failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Remote store errors
///
/// Errors that occur when talking to the REST endpoint holding the
/// configuration records.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request never produced a response (DNS, refused, reset, TLS)
    #[error("Failed to connect to remote store: {0}")]
    ConnectionFailed(String),

    /// The store answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded
    #[error("{0}")]
    InvalidResponse(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// No request could be built for the resource
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl RemoteError {
    /// Whether the failure happened before any HTTP response was seen
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout(_) | Self::InvalidUrl(_)
        )
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteError::Timeout(err.to_string())
        } else if err.is_decode() {
            RemoteError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            RemoteError::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            RemoteError::ConnectionFailed(err.to_string())
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for PiiSetupError {
    fn from(err: std::io::Error) -> Self {
        PiiSetupError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PiiSetupError {
    fn from(err: serde_json::Error) -> Self {
        PiiSetupError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PiiSetupError {
    fn from(err: toml::de::Error) -> Self {
        PiiSetupError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PiiSetupError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_operation_error_displays_message_verbatim() {
        let err = PiiSetupError::Operation("Failed to add configuration".to_string());
        assert_eq!(err.to_string(), "Failed to add configuration");
    }

    #[test]
    fn test_remote_error_conversion() {
        let remote_err = RemoteError::ConnectionFailed("Network error".to_string());
        let err: PiiSetupError = remote_err.into();
        assert!(matches!(err, PiiSetupError::Remote(_)));
    }

    #[test]
    fn test_status_error_message() {
        let err = RemoteError::Status {
            status: 404,
            body: "Not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_classification() {
        assert!(RemoteError::ConnectionFailed("refused".to_string()).is_transport());
        assert!(RemoteError::Timeout("30s".to_string()).is_transport());
        assert!(RemoteError::InvalidUrl("mailto:x".to_string()).is_transport());
        assert!(!RemoteError::InvalidResponse("bad json".to_string()).is_transport());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PiiSetupError = io_err.into();
        assert!(matches!(err, PiiSetupError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PiiSetupError = json_err.into();
        assert!(matches!(err, PiiSetupError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PiiSetupError = toml_err.into();
        assert!(matches!(err, PiiSetupError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = PiiSetupError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
        let err = RemoteError::Timeout("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}

//! Error types for the zonectl client

use thiserror::Error;

use zonectl_core::poll::ProbeError;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the zonectl client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Whether retrying the same request can possibly succeed
    ///
    /// A request that could not even be built (bad base URL, invalid
    /// header) stays broken no matter how often it is retried. Everything
    /// else is a service-side or network condition.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RequestFailed(e) => !e.is_builder(),
            Self::ApiError { .. } | Self::ParseError(_) => true,
        }
    }
}

impl From<ClientError> for ProbeError {
    /// Maps client failures onto the polling loop's error classes
    ///
    /// Retryable failures make the job count as not-yet-done for the
    /// round; unretryable ones abort the whole run.
    fn from(e: ClientError) -> Self {
        if e.is_retryable() {
            ProbeError::Unavailable(e.to_string())
        } else {
            ProbeError::Fatal(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_are_retryable() {
        let err = ClientError::api_error(503, "down for maintenance");
        assert!(err.is_retryable());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_detection() {
        assert!(ClientError::api_error(404, "no such job").is_not_found());
    }

    #[test]
    fn test_retryable_errors_map_to_unavailable() {
        let probe_err: ProbeError = ClientError::api_error(500, "boom").into();
        assert!(!probe_err.is_fatal());
    }
}

//! Error types for REST API calls.
//!
//! Distinguishes transport failures from responses the service rejected and
//! responses whose shape did not match the expected model. The client never
//! retries on its own; [`ApiError::is_retryable`] lets callers decide.

use std::fmt;

use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by API operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network-level connectivity failure.
    #[error("network connection failed: {message}")]
    Network {
        /// Error message describing the network failure
        message: String,
    },

    /// Request exceeded the configured timeout.
    #[error("request timeout after {timeout_seconds}s")]
    Timeout {
        /// Configured timeout in seconds
        timeout_seconds: u64,
    },

    /// Non-2xx response, or a 2xx response whose envelope has `status: false`.
    #[error("API error: HTTP {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the response envelope, or the raw body
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("unexpected response shape: {message}")]
    Decode {
        /// Decoder diagnostic
        message: String,
    },

    /// Invalid client configuration.
    #[error("invalid client configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ApiError {
    /// Creates a network error from a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_seconds: u64) -> Self {
        Self::Timeout { timeout_seconds }
    }

    /// Creates an API error from a rejected response.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api { status, message: message.into() }
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// HTTP status of a rejected response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Determines if this error represents a temporary failure that may
    /// succeed if the same request is sent again.
    ///
    /// Returns `true` for network errors, timeouts, rate limiting (429) and
    /// server errors (5xx).
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Decode { .. } | Self::Configuration { .. } => false,
        }
    }
}

/// Category of API error for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connectivity or timeout.
    Network,
    /// Request rejected (4xx or `status: false`).
    Client,
    /// Service failure (5xx).
    Server,
    /// Response did not decode.
    Decode,
    /// Configuration problem.
    Configuration,
}

impl From<&ApiError> for ErrorCategory {
    fn from(error: &ApiError) -> Self {
        match error {
            ApiError::Network { .. } | ApiError::Timeout { .. } => Self::Network,
            ApiError::Api { status, .. } if *status >= 500 => Self::Server,
            ApiError::Api { .. } => Self::Client,
            ApiError::Decode { .. } => Self::Decode,
            ApiError::Configuration { .. } => Self::Configuration,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Client => write!(f, "client"),
            Self::Server => write!(f, "server"),
            Self::Decode => write!(f, "decode"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

//! Error types for the Globalization Pipeline client library.

use thiserror::Error;

/// The main error type for all Globalization Pipeline client operations.
#[derive(Error, Debug)]
pub enum GpError {
    /// Invalid client or credential configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A computed header value is not valid HTTP header text
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The service returned an error response
    #[error("Globalization Pipeline API error: {0}")]
    Api(ApiError),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: user ID and secret required for signed requests")]
    MissingCredentials,
}

/// An error reported by the Globalization Pipeline service itself.
///
/// Every JSON response carries a `status` field; anything other than
/// `success` is surfaced through this type together with the HTTP status
/// code and the optional `message` detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status_code: u16,
    /// The `status` field from the response body (e.g., "ERROR")
    pub status: String,
    /// Human-readable error message, when the service provides one
    pub message: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "HTTP {} {}: {}", self.status_code, self.status, message),
            None => write!(f, "HTTP {} {}", self.status_code, self.status),
        }
    }
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status_code: u16, status: impl Into<String>, message: Option<String>) -> Self {
        Self {
            status_code,
            status: status.into(),
            message,
        }
    }

    /// Check if the request was rejected for bad or missing credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code == 401 || self.status_code == 403
    }

    /// Check if the target resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    /// Check if the service failed on its side.
    pub fn is_server_error(&self) -> bool {
        self.status_code >= 500
    }
}

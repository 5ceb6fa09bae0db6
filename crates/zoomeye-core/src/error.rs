use serde_json::Value;
use thiserror::Error;

/// Result type alias for ZoomEye operations
pub type Result<T> = std::result::Result<T, ZoomEyeError>;

/// Errors that can occur when using the ZoomEye API
#[derive(Error, Debug)]
pub enum ZoomEyeError {
    /// Credentials required by the operation are missing
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required argument is missing or empty
    #[error("validation error: {0}")]
    Validation(String),

    /// Login completed but the service did not hand out a usable token
    #[error("authentication failed: {}", describe_response(.response))]
    Authentication {
        /// Raw login response, `None` when the body was empty
        response: Option<Value>,
    },

    /// The service answered with a status other than 200
    #[error("request failed with status {status}: {body}")]
    Request {
        /// HTTP status code
        status: u16,
        /// Full response body, untouched
        body: Value,
    },

    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

#[allow(clippy::ref_option)]
fn describe_response(response: &Option<Value>) -> String {
    response.as_ref().map_or_else(|| "empty login response".to_string(), Value::to_string)
}

impl ZoomEyeError {
    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::Request { status: 401 | 403, .. }
        )
    }

    /// Returns the HTTP status code if the service answered with a failure
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw body carried by request and authentication failures
    #[must_use]
    pub const fn response_body(&self) -> Option<&Value> {
        match self {
            Self::Request { body, .. } => Some(body),
            Self::Authentication { response } => response.as_ref(),
            _ => None,
        }
    }
}

//! API Error - Failure taxonomy for calls to the backend.
//!
//! Every HTTP failure is classified once, in the adapter, so callers match
//! on the variant instead of probing for a status code.

use serde_json::Value;

use crate::domain::foundation::FieldErrors;

/// Shown for any network failure or unreadable response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Used when a non-2xx response carries no message of its own.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Errors from the HTTP client adapter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response carrying a field-error map.
    #[error("{message}")]
    ServerValidation {
        status: u16,
        message: String,
        errors: FieldErrors,
    },

    /// Non-2xx response without field errors.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Network failure, or a body that is not the expected JSON.
    ///
    /// `cause` is kept for logs only; `message` is always the generic text.
    #[error("{message}")]
    Transport { message: String, cause: String },
}

impl ApiError {
    /// Wraps a low-level failure as a transport error.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        ApiError::Transport {
            message: NETWORK_ERROR_MESSAGE.to_string(),
            cause: cause.to_string(),
        }
    }

    /// Classifies a non-2xx response from its status and parsed JSON body.
    pub fn from_status_body(status: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(REQUEST_FAILED_MESSAGE)
            .to_string();

        match body
            .get("errors")
            .and_then(FieldErrors::from_json)
            .filter(|errors| !errors.is_empty())
        {
            Some(errors) => ApiError::ServerValidation {
                status,
                message,
                errors,
            },
            None => ApiError::Request { status, message },
        }
    }

    /// HTTP status, present only when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ServerValidation { status, .. } | ApiError::Request { status, .. } => {
                Some(*status)
            }
            ApiError::Transport { .. } => None,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        match self {
            ApiError::ServerValidation { message, .. }
            | ApiError::Request { message, .. }
            | ApiError::Transport { message, .. } => message,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::ServerValidation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}

//! Errors surfaced at the page boundary.
//!
//! Every failure a user can see ends up as a [`PageError`]. Client-side form
//! problems and server field errors share one lookup, [`PageError::field_error`],
//! so a form paints both the same way.

use thiserror::Error;

use crate::domain::foundation::FieldErrors;
use crate::ports::{ApiError, StorageError};

/// Banner shown when client-side validation blocks a submission.
pub const FIX_ERRORS_MESSAGE: &str = "Please fix all errors before submitting";

/// Banner shown when the session could not be written locally.
pub const STORAGE_FAILED_MESSAGE: &str = "Could not save your session. Please try again.";

/// A failure as shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    /// Client-side validation failed; nothing was sent.
    #[error("Please fix all errors before submitting")]
    Validation(FieldErrors),

    /// The server rejected the request with per-field messages.
    #[error("{message}")]
    ServerValidation {
        status: u16,
        message: String,
        errors: FieldErrors,
    },

    /// The server rejected the request without field details.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The server could not be reached or answered with garbage.
    #[error("{message}")]
    Transport { message: String, cause: String },

    /// A 2xx response that did not deliver what the page needed.
    #[error("{0}")]
    Rejected(String),

    /// The session could not be persisted.
    #[error("Could not save your session. Please try again.")]
    Storage(String),
}

impl PageError {
    pub fn rejected(message: impl Into<String>) -> Self {
        PageError::Rejected(message.into())
    }

    /// First message for a form field, from client or server validation.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors().and_then(|errors| errors.first(field))
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            PageError::Validation(errors) | PageError::ServerValidation { errors, .. } => {
                Some(errors)
            }
            _ => None,
        }
    }

    /// Single-line message for the page banner.
    pub fn banner(&self) -> String {
        self.to_string()
    }

    /// Whether a retry button makes sense.
    ///
    /// True for failures of the request itself. Validation and rejected
    /// responses would fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PageError::Transport { .. } | PageError::Request { .. })
    }
}

impl From<ApiError> for PageError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ServerValidation {
                status,
                message,
                errors,
            } => PageError::ServerValidation {
                status,
                message,
                errors,
            },
            ApiError::Request { status, message } => PageError::Request { status, message },
            ApiError::Transport { message, cause } => PageError::Transport { message, cause },
        }
    }
}

impl From<StorageError> for PageError {
    fn from(err: StorageError) -> Self {
        PageError::Storage(err.to_string())
    }
}

//! Error types for the domain layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Field-level error messages keyed by form field name.
///
/// Used both for client-side form validation and for the `errors` map the
/// backend returns alongside a failed request. Each field may carry several
/// messages; forms display the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for a field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Builder-style variant of [`FieldErrors::insert`].
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(field, message);
        self
    }

    /// First message recorded for a field, if any.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// All messages recorded for a field.
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reads a server-supplied error map.
    ///
    /// Accepts `{"field": ["msg", ...]}` as well as the single-string form
    /// `{"field": "msg"}`. Returns `None` for anything that is not an object,
    /// including `null`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let mut errors = FieldErrors::new();
        for (field, messages) in map {
            match messages {
                Value::String(message) => errors.insert(field.clone(), message.clone()),
                Value::Array(items) => {
                    for item in items {
                        if let Some(message) = item.as_str() {
                            errors.insert(field.clone(), message);
                        }
                    }
                }
                _ => {}
            }
        }
        Some(errors)
    }
}

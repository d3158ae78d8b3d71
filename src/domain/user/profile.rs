//! Signed-in user's profile as returned by the auth endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::ValidationError;

/// Avatar initial shown when the profile has no usable name.
const FALLBACK_INITIAL: char = 'P';

/// Opaque user record passed through from the backend.
///
/// Any JSON value is kept as-is. Fields are only looked up when the record is
/// an object, and may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Value);

impl UserProfile {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parses the persisted JSON form. Only malformed JSON is rejected.
    pub fn from_json_str(raw: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(raw)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("user", e.to_string()))
    }

    /// Serializes to the persisted JSON form.
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn id(&self) -> Option<&Value> {
        self.get("id").filter(|v| !v.is_null())
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.str_field("email")
    }

    /// A top-level field, when the record is an object.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(field))
    }

    /// Uppercased first letter of the name, for the avatar badge.
    pub fn initial(&self) -> char {
        self.name()
            .and_then(|n| n.trim().chars().next())
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or(FALLBACK_INITIAL)
    }

    /// Name used in greetings, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name().or_else(|| self.email()).unwrap_or("Student")
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

impl From<Value> for UserProfile {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

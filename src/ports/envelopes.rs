//! Response envelopes shared by the auth and events endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ success, token, user, message }` from `/login` and `/register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Token and user, when the response carries a usable session.
    pub fn credentials(&self) -> Option<(&str, &Value)> {
        if !self.success {
            return None;
        }
        let token = self.token.as_deref().filter(|t| !t.is_empty())?;
        let user = self.user.as_ref().filter(|u| !u.is_null())?;
        Some((token, user))
    }
}

/// `{ success, data, message }` from the events endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> DataEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// The payload, only when the server reported success.
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

/// Body of responses that only carry a message, such as `/logout`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

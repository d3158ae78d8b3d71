//! Authenticated session value.

use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::ValidationError;
use crate::domain::user::UserProfile;

/// Token and user, always held together.
///
/// # Invariants
///
/// - `token` is non-empty
/// - `user` is a JSON object
#[derive(Debug, Clone)]
pub struct Session {
    token: Secret<String>,
    user: UserProfile,
}

impl Session {
    /// Builds a session, rejecting an empty token.
    pub fn new(token: impl Into<String>, user: UserProfile) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        Ok(Self {
            token: Secret::new(token),
            user,
        })
    }

    /// Raw bearer token for the Authorization header.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.token() == other.token() && self.user == other.user
    }
}

//! RegisterHandler - Creates a student account and signs it in.

use std::sync::Arc;

use super::session_from_response;
use crate::application::{PageError, SessionStore};
use crate::domain::session::Session;
use crate::domain::user::RegistrationForm;
use crate::ports::AuthApi;

/// Shown when the server answers 2xx without a usable session.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

/// Handler for the registration form.
pub struct RegisterHandler {
    auth: Arc<dyn AuthApi>,
    store: Arc<SessionStore>,
}

impl RegisterHandler {
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<SessionStore>) -> Self {
        Self { auth, store }
    }

    pub async fn handle(&self, form: &RegistrationForm) -> Result<Session, PageError> {
        let request = form.validate().map_err(|errors| {
            tracing::debug!(fields = errors.len(), "Registration form has errors");
            PageError::Validation(errors)
        })?;

        let response = self.auth.register(&request).await?;
        let session = session_from_response(&response, REGISTRATION_FAILED_MESSAGE)?;

        self.store.commit(session.clone())?;
        tracing::info!("Registration succeeded");

        Ok(session)
    }
}

//! LoginHandler - Signs a student in and persists the session.

use std::sync::Arc;

use super::session_from_response;
use crate::application::{PageError, SessionStore};
use crate::domain::session::Session;
use crate::domain::user::LoginForm;
use crate::ports::AuthApi;

/// Shown when the server answers 2xx without a usable session.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// Handler for the login form.
pub struct LoginHandler {
    auth: Arc<dyn AuthApi>,
    store: Arc<SessionStore>,
}

impl LoginHandler {
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<SessionStore>) -> Self {
        Self { auth, store }
    }

    pub async fn handle(&self, form: &LoginForm) -> Result<Session, PageError> {
        // 1. Validate locally
        let request = form.validate().map_err(PageError::Validation)?;

        // 2. Call the backend
        let response = self.auth.login(&request).await?;

        // 3. Require success, token and user
        let session = session_from_response(&response, LOGIN_FAILED_MESSAGE)?;

        // 4. Persist
        self.store.commit(session.clone())?;
        tracing::info!("Login succeeded");

        Ok(session)
    }
}

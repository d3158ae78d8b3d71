//! LogoutHandler - Ends the session locally, telling the backend if it can.

use std::sync::Arc;

use crate::application::SessionStore;
use crate::ports::AuthApi;

/// Handler for signing out.
///
/// Never fails: the backend call is best-effort and local state is always
/// cleared.
pub struct LogoutHandler {
    auth: Arc<dyn AuthApi>,
    store: Arc<SessionStore>,
}

impl LogoutHandler {
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<SessionStore>) -> Self {
        Self { auth, store }
    }

    pub async fn handle(&self) {
        // The token is still current here, so the request is authenticated.
        if self.store.is_authenticated() {
            if let Err(e) = self.auth.logout().await {
                tracing::warn!(error = %e, "Backend logout failed; clearing local session anyway");
            }
        }

        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Could not remove persisted session");
        }
        tracing::info!("Logged out");
    }
}

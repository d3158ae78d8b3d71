//! Session Store - the only reader and writer of the persisted session.
//!
//! Two string keys hold the session: `token` (the raw bearer token) and
//! `user` (the user record as JSON). They are written and cleared together.
//! A half-present or unreadable pair is treated as corrupt, cleared, and
//! reported as "no session".

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::session::Session;
use crate::domain::user::UserProfile;
use crate::ports::{LocalStorage, StorageError, TokenProvider};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Persisted session plus its in-memory copy.
pub struct SessionStore {
    storage: Arc<dyn LocalStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
        }
    }

    /// Loads the persisted session, if a complete and valid one exists.
    ///
    /// Never fails: read errors and corrupt data are logged and yield `None`.
    /// Corrupt data is also cleared.
    pub fn restore(&self) -> Option<Session> {
        let (token, user) = match (
            self.storage.get_item(TOKEN_KEY),
            self.storage.get_item(USER_KEY),
        ) {
            (Ok(token), Ok(user)) => (token, user),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "Could not read persisted session");
                self.set_current(None);
                return None;
            }
        };

        if token.is_none() && user.is_none() {
            self.set_current(None);
            return None;
        }

        match Self::parse(token.as_deref(), user.as_deref()) {
            Ok(session) => {
                tracing::debug!("Restored persisted session");
                self.set_current(Some(session.clone()));
                Some(session)
            }
            Err(reason) => {
                tracing::warn!(reason, "Discarding corrupt persisted session");
                if let Err(e) = self.clear() {
                    tracing::warn!(error = %e, "Could not clear corrupt session");
                }
                None
            }
        }
    }

    fn parse(token: Option<&str>, user: Option<&str>) -> Result<Session, &'static str> {
        let token = token.ok_or("user present without token")?;
        let user = user.ok_or("token present without user")?;
        let user = UserProfile::from_json_str(user).map_err(|_| "user is not valid JSON")?;
        Session::new(token, user).map_err(|_| "token is empty")
    }

    /// Persists both keys, then makes the session current.
    ///
    /// If the user write fails the token key is put back the way it was, and
    /// the in-memory session is left untouched.
    pub fn commit(&self, session: Session) -> Result<(), StorageError> {
        let previous_token = self.storage.get_item(TOKEN_KEY)?;
        self.storage.set_item(TOKEN_KEY, session.token())?;

        if let Err(e) = self
            .storage
            .set_item(USER_KEY, &session.user().to_json_string())
        {
            let rollback = match previous_token {
                Some(token) => self.storage.set_item(TOKEN_KEY, &token),
                None => self.storage.remove_item(TOKEN_KEY),
            };
            if let Err(rollback_err) = rollback {
                tracing::error!(error = %rollback_err, "Failed to roll back token write");
            }
            return Err(e);
        }

        self.set_current(Some(session));
        tracing::info!("Session committed");
        Ok(())
    }

    /// Forgets the session, in memory and on disk.
    ///
    /// The in-memory session is dropped even if the storage removal fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.set_current(None);
        let token = self.storage.remove_item(TOKEN_KEY);
        let user = self.storage.remove_item(USER_KEY);
        token.and(user)
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn set_current(&self, session: Option<Session>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

impl TokenProvider for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.token().to_string())
    }
}

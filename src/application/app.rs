//! App - Navigation and session lifecycle in one place.
//!
//! Owns the current [`NavigationState`] and moves it in response to page
//! requests, successful sign-in and sign-out. Rendering code reads
//! [`App::state`] and checks [`App::can_render`] before drawing a page.

use std::sync::Arc;

use super::handlers::{LoginHandler, LogoutHandler, RegisterHandler};
use super::{PageError, SessionStore};
use crate::domain::navigation::{navigate, NavigationState, Page};
use crate::domain::session::Session;
use crate::domain::user::{LoginForm, RegistrationForm};
use crate::ports::AuthApi;

pub const SIGN_IN_REQUIRED_MESSAGE: &str = "Please sign in to view this page.";

pub struct App {
    store: Arc<SessionStore>,
    login: LoginHandler,
    register: RegisterHandler,
    logout: LogoutHandler,
    state: NavigationState,
}

impl App {
    /// Builds the app without touching persisted state. Starts on landing.
    pub fn new(store: Arc<SessionStore>, auth: Arc<dyn AuthApi>) -> Self {
        Self {
            login: LoginHandler::new(auth.clone(), store.clone()),
            register: RegisterHandler::new(auth.clone(), store.clone()),
            logout: LogoutHandler::new(auth, store.clone()),
            store,
            state: NavigationState::landing(),
        }
    }

    /// Restores the persisted session and picks the first page.
    pub fn start(store: Arc<SessionStore>, auth: Arc<dyn AuthApi>) -> Self {
        let mut app = Self::new(store, auth);
        let session = app.store.restore();
        app.state = NavigationState::initial(session.as_ref());
        tracing::debug!(page = %app.state.current_page(), "App started");
        app
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn session(&self) -> Option<Session> {
        self.store.current()
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Moves to the requested page, applying redirects.
    pub fn navigate(&mut self, requested: &str) -> &NavigationState {
        let session = self.store.current();
        self.state = navigate(requested, session.as_ref());
        tracing::debug!(requested, page = %self.state.current_page(), "Navigated");
        &self.state
    }

    /// Navigates and only succeeds when `expected` is actually shown.
    ///
    /// Fails when the request was redirected to another page, or when the
    /// page it landed on needs a session that is missing.
    pub fn enter(&mut self, requested: &str, expected: Page) -> Result<&NavigationState, PageError> {
        let landed = self.navigate(requested).current_page();
        if landed == Page::Login || !self.can_render() {
            return Err(PageError::rejected(SIGN_IN_REQUIRED_MESSAGE));
        }
        if landed != expected {
            return Err(PageError::rejected(format!("Page not found: {requested}")));
        }
        Ok(&self.state)
    }

    /// Whether the current page may render for the current session.
    pub fn can_render(&self) -> bool {
        self.state.is_renderable(self.store.current().as_ref())
    }

    /// Called once a session has been committed.
    pub fn on_authenticated(&mut self) -> &NavigationState {
        self.state = NavigationState::page(Page::Home);
        &self.state
    }

    pub async fn login(&mut self, form: &LoginForm) -> Result<Session, PageError> {
        let session = self.login.handle(form).await?;
        self.on_authenticated();
        Ok(session)
    }

    pub async fn register(&mut self, form: &RegistrationForm) -> Result<Session, PageError> {
        let session = self.register.handle(form).await?;
        self.on_authenticated();
        Ok(session)
    }

    /// Signs out and always lands on the landing page.
    pub async fn logout(&mut self) -> &NavigationState {
        self.logout.handle().await;
        self.state = NavigationState::landing();
        &self.state
    }
}

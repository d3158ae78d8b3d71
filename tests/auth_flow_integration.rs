//! Integration tests for the sign-in lifecycle against a mock backend.
//!
//! These tests verify the full path from form input to persisted session:
//! 1. Login commits a session to file storage and lands on home
//! 2. Server field errors on register surface per field and commit nothing
//! 3. A committed session is restored by a fresh app and authenticates requests
//! 4. Logout clears storage and lands on landing

use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use evently::adapters::{ApiClient, FileLocalStorage, HttpAuthApi, HttpEventsApi};
use evently::application::{App, BrowseEventsHandler, SessionStore, TOKEN_KEY, USER_KEY};
use evently::domain::event::FilterCriteria;
use evently::domain::navigation::Page;
use evently::domain::user::{LoginForm, RegistrationForm};
use evently::ports::LocalStorage;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    server: MockServer,
    dir: TempDir,
}

impl Harness {
    async fn new() -> Self {
        Self {
            server: MockServer::start().await,
            dir: TempDir::new().unwrap(),
        }
    }

    fn storage(&self) -> FileLocalStorage {
        FileLocalStorage::in_dir(self.dir.path())
    }

    /// Builds an app the way the binary does, restoring from disk.
    fn app(&self) -> (App, Arc<SessionStore>, ApiClient) {
        let store = Arc::new(SessionStore::new(Arc::new(self.storage())));
        let client = ApiClient::new(format!("{}/api", self.server.uri()), None, store.clone()).unwrap();
        let auth = Arc::new(HttpAuthApi::new(client.clone()));
        (App::start(store.clone(), auth), store, client)
    }
}

fn registration() -> RegistrationForm {
    RegistrationForm {
        name: "Asha Patel".to_string(),
        email: "asha@campus.edu".to_string(),
        phone_number: "9876543210".to_string(),
        enrollment_number: "EN2025001".to_string(),
        clg_name: "City College".to_string(),
        course: "B.Tech".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn login_commits_session_and_navigates_home() {
    let h = Harness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "email": "a@x.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "token": "t1",
            "user": { "name": "A" }
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let (mut app, store, _) = h.app();
    assert_eq!(app.state().current_page(), Page::Landing);

    app.login(&LoginForm::new("a@x.com", "secret1")).await.unwrap();

    assert_eq!(app.state().current_page(), Page::Home);
    assert_eq!(store.current().unwrap().token(), "t1");

    let storage = h.storage();
    assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("t1"));
    let user: serde_json::Value =
        serde_json::from_str(&storage.get_item(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(user, json!({ "name": "A" }));
}

#[tokio::test]
async fn register_field_errors_block_commit() {
    let h = Harness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation failed",
            "errors": { "email": ["already taken"] }
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let (mut app, store, _) = h.app();
    app.navigate("register");

    let err = app.register(&registration()).await.unwrap_err();

    assert_eq!(err.field_error("email"), Some("already taken"));
    assert_eq!(err.banner(), "Validation failed");
    assert!(store.current().is_none());
    assert_eq!(h.storage().get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(app.state().current_page(), Page::Register);
}

#[tokio::test]
async fn register_never_sends_password_confirmation() {
    let h = Harness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .and(body_json(json!({
            "name": "Asha Patel",
            "email": "asha@campus.edu",
            "phone_number": "9876543210",
            "enrollment_number": "EN2025001",
            "clg_name": "City College",
            "course": "B.Tech",
            "password": "secret1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "token": "t2",
            "user": { "id": 3, "name": "Asha Patel" }
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let (mut app, _, _) = h.app();
    let session = app.register(&registration()).await.unwrap();

    assert_eq!(session.user().name(), Some("Asha Patel"));
    assert_eq!(app.state().current_page(), Page::Home);
}

#[tokio::test]
async fn restored_session_authenticates_requests() {
    let h = Harness::new().await;
    let storage = h.storage();
    storage.set_item(TOKEN_KEY, "restored-token").unwrap();
    storage.set_item(USER_KEY, r#"{"name":"A"}"#).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(header("authorization", "Bearer restored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": 1, "slug": "foo", "title": "Foo" }]
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let (mut app, _, client) = h.app();
    assert_eq!(app.state().current_page(), Page::Home);
    assert_eq!(app.navigate("browse").current_page(), Page::Browse);

    let page = BrowseEventsHandler::new(Arc::new(HttpEventsApi::new(client)))
        .handle(&FilterCriteria::default())
        .await
        .unwrap();
    assert_eq!(page.events.len(), 1);
}

#[tokio::test]
async fn corrupt_persisted_user_starts_logged_out() {
    let h = Harness::new().await;
    let storage = h.storage();
    storage.set_item(TOKEN_KEY, "t1").unwrap();
    storage.set_item(USER_KEY, "{oops").unwrap();

    let (app, _, _) = h.app();

    assert_eq!(app.state().current_page(), Page::Landing);
    assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
}

#[tokio::test]
async fn logout_clears_storage_even_when_backend_fails() {
    let h = Harness::new().await;
    let storage = h.storage();
    storage.set_item(TOKEN_KEY, "t1").unwrap();
    storage.set_item(USER_KEY, r#"{"name":"A"}"#).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .expect(1)
        .mount(&h.server)
        .await;

    let (mut app, _, _) = h.app();
    let page = app.logout().await.current_page();

    assert_eq!(page, Page::Landing);
    assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(app.navigate("gallery").current_page(), Page::Login);
}

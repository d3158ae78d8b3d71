//! Scripted port implementations for handler tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::event::Event;
use crate::domain::user::{LoginRequest, RegisterRequest};
use crate::ports::{
    ApiError, AuthApi, AuthResponse, DataEnvelope, EventList, EventsApi, MessageResponse,
};

pub fn auth_ok(token: &str, user: Value) -> AuthResponse {
    AuthResponse {
        success: true,
        token: Some(token.to_string()),
        user: Some(user),
        message: None,
    }
}

pub fn auth_failed(message: Option<&str>) -> AuthResponse {
    AuthResponse {
        success: false,
        token: None,
        user: None,
        message: message.map(str::to_string),
    }
}

pub fn validation_error(field: &str, message: &str) -> ApiError {
    ApiError::from_status_body(
        422,
        &json!({ "message": "Validation failed", "errors": { field: [message] } }),
    )
}

/// Auth API returning queued responses in order.
#[derive(Default)]
pub struct MockAuthApi {
    responses: Mutex<VecDeque<Result<AuthResponse, ApiError>>>,
    logout_result: Mutex<Option<ApiError>>,
    pub logins: Mutex<Vec<LoginRequest>>,
    pub registrations: Mutex<Vec<RegisterRequest>>,
    pub logout_calls: AtomicUsize,
}

impl MockAuthApi {
    pub fn returning(response: Result<AuthResponse, ApiError>) -> Self {
        let mock = Self::default();
        mock.responses.lock().unwrap().push_back(response);
        mock
    }

    pub fn failing_logout(self, err: ApiError) -> Self {
        *self.logout_result.lock().unwrap() = Some(err);
        self
    }

    pub fn calls(&self) -> usize {
        self.logins.lock().unwrap().len() + self.registrations.lock().unwrap().len()
    }

    fn next(&self) -> Result<AuthResponse, ApiError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(auth_failed(None)))
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.registrations.lock().unwrap().push(request.clone());
        self.next()
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.logins.lock().unwrap().push(request.clone());
        self.next()
    }

    async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        match self.logout_result.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(MessageResponse {
                success: true,
                message: Some("Logged out".to_string()),
            }),
        }
    }
}

/// Events API with one fixed answer per endpoint.
pub struct MockEventsApi {
    pub all: Result<EventList, ApiError>,
    pub latest: Result<EventList, ApiError>,
    pub featured: Result<EventList, ApiError>,
    pub trending: Result<EventList, ApiError>,
    pub by_slug: Result<DataEnvelope<Event>, ApiError>,
    pub requested_slugs: Mutex<Vec<String>>,
}

impl MockEventsApi {
    pub fn with_all(events: Vec<Event>) -> Self {
        Self {
            all: Ok(DataEnvelope::ok(events)),
            ..Self::default()
        }
    }
}

impl Default for MockEventsApi {
    fn default() -> Self {
        Self {
            all: Ok(DataEnvelope::ok(Vec::new())),
            latest: Ok(DataEnvelope::ok(Vec::new())),
            featured: Ok(DataEnvelope::ok(Vec::new())),
            trending: Ok(DataEnvelope::ok(Vec::new())),
            by_slug: Err(ApiError::Request {
                status: 404,
                message: "Event not found".to_string(),
            }),
            requested_slugs: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EventsApi for MockEventsApi {
    async fn get_all(&self) -> Result<EventList, ApiError> {
        self.all.clone()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<DataEnvelope<Event>, ApiError> {
        self.requested_slugs.lock().unwrap().push(slug.to_string());
        self.by_slug.clone()
    }

    async fn get_latest(&self) -> Result<EventList, ApiError> {
        self.latest.clone()
    }

    async fn get_featured(&self) -> Result<EventList, ApiError> {
        self.featured.clone()
    }

    async fn get_trending(&self) -> Result<EventList, ApiError> {
        self.trending.clone()
    }
}

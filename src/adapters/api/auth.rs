//! `AuthApi` over HTTP.

use async_trait::async_trait;
use serde_json::json;

use crate::adapters::http::{ApiClient, RequestConfig};
use crate::domain::user::{LoginRequest, RegisterRequest};
use crate::ports::{ApiError, AuthApi, AuthResponse, MessageResponse};

/// Auth endpoints of the events backend.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .post_json("/register", request, &RequestConfig::default())
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .post_json("/login", request, &RequestConfig::default())
            .await
    }

    async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.client
            .post_json("/logout", &json!({}), &RequestConfig::default())
            .await
    }
}

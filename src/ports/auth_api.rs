//! Auth API Port - Interface for the backend's authentication endpoints.

use async_trait::async_trait;

use super::{ApiError, AuthResponse, MessageResponse};
use crate::domain::user::{LoginRequest, RegisterRequest};

/// Port for `/register`, `/login` and `/logout`.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /logout`, authenticated with the current bearer token.
    async fn logout(&self) -> Result<MessageResponse, ApiError>;
}

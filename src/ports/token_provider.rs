//! Token Provider Port - Where the HTTP client finds the bearer token.

/// Supplies the token for the `Authorization` header.
pub trait TokenProvider: Send + Sync {
    /// Current bearer token, or `None` when signed out.
    fn bearer_token(&self) -> Option<String>;
}

/// Provider for unauthenticated clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

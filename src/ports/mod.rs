//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `AuthApi` - Registration, login and logout
//! - `EventsApi` - Event listing and lookup by slug
//! - `ApiError` - Failure taxonomy shared by both
//!
//! ## Client Ports
//!
//! - `LocalStorage` - Persistent key/value strings for the session
//! - `TokenProvider` - Bearer token lookup for outgoing requests

mod api_error;
mod auth_api;
mod envelopes;
mod events_api;
mod local_storage;
mod token_provider;

pub use api_error::{ApiError, NETWORK_ERROR_MESSAGE, REQUEST_FAILED_MESSAGE};
pub use auth_api::AuthApi;
pub use envelopes::{AuthResponse, DataEnvelope, MessageResponse};
pub use events_api::{EventList, EventsApi};
pub use local_storage::{LocalStorage, StorageError};
pub use token_provider::{NoToken, TokenProvider};

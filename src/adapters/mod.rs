//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - JSON client for the events backend (`reqwest`)
//! - `api` - `AuthApi` and `EventsApi` over that client
//! - `storage` - `LocalStorage` backends (file, in-memory)

pub mod api;
pub mod http;
pub mod storage;

pub use api::{HttpAuthApi, HttpEventsApi};
pub use http::{ApiClient, RequestConfig};
pub use storage::{FileLocalStorage, InMemoryLocalStorage};

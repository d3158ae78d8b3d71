//! API Surface - Named backend endpoints over the HTTP client.
//!
//! Each method forwards to [`ApiClient`](crate::adapters::http::ApiClient)
//! and returns its result, or its failure, unchanged.

mod auth;
mod events;

pub use auth::HttpAuthApi;
pub use events::HttpEventsApi;

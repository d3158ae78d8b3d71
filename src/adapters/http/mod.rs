//! HTTP client adapter.
//!
//! - `ApiClient` - JSON requests against the configured base URL
//! - `RequestConfig` - Per-request header overrides

mod client;
mod request_config;

pub use client::ApiClient;
pub use request_config::RequestConfig;

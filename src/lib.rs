//! Evently - Campus event discovery client
//!
//! This crate implements the client side of a campus event-discovery and
//! registration service: the HTTP client, the named API surface, the
//! persisted session, navigation between pages and client-side filtering.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

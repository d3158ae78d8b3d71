//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, field error maps, date display)
//! - `event` - Event read model, filter engine, gallery and suggestion helpers
//! - `user` - User profile passthrough and login/registration forms
//! - `session` - Authenticated session (token + user)
//! - `navigation` - Page enum, navigation state and the transition function

pub mod event;
pub mod foundation;
pub mod navigation;
pub mod session;
pub mod user;

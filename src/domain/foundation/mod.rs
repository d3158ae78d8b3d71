//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and display helpers shared by the event,
//! user, session and navigation modules.

pub mod datetime;
mod errors;

pub use errors::{FieldErrors, ValidationError};

//! Session domain module.
//!
//! A session is the bearer token plus the user record the backend returned
//! at login or registration. It exists either completely or not at all.

mod session;

pub use session::Session;

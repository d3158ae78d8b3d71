//! User module - the signed-in student and the forms that create a session.
//!
//! The backend owns the user record; the client only keeps the JSON it was
//! given and validates login/registration input before submitting it.

pub mod forms;
pub mod profile;

pub use forms::{LoginForm, LoginRequest, RegisterRequest, RegistrationForm, COURSES};
pub use profile::UserProfile;

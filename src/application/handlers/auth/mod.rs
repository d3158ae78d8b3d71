//! Authentication handlers: login, registration and logout.

mod login;
mod logout;
mod register;

pub use login::LoginHandler;
pub use logout::LogoutHandler;
pub use register::RegisterHandler;

use crate::application::PageError;
use crate::domain::session::Session;
use crate::domain::user::UserProfile;
use crate::ports::AuthResponse;

/// Turns an auth response into a session, or a rejection carrying the
/// server's message (or `fallback` when it sent none).
pub(crate) fn session_from_response(
    response: &AuthResponse,
    fallback: &str,
) -> Result<Session, PageError> {
    let rejected = || {
        PageError::rejected(
            response
                .message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(fallback),
        )
    };

    let (token, user) = response.credentials().ok_or_else(rejected)?;
    Session::new(token, UserProfile::from_value(user.clone())).map_err(|_| rejected())
}

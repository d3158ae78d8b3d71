//! Application layer - Session lifecycle, navigation and page handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are the boundary where API failures become [`PageError`]s.

mod app;
mod errors;
pub mod handlers;
pub mod session_store;

pub use app::{App, SIGN_IN_REQUIRED_MESSAGE};
pub use errors::{PageError, FIX_ERRORS_MESSAGE, STORAGE_FAILED_MESSAGE};
pub use handlers::{
    BrowseEventsHandler, BrowsePage, EventDetailsHandler, GalleryHandler, HomeFeed,
    HomeFeedHandler, LoginHandler, LogoutHandler, RegisterHandler,
};
pub use session_store::{SessionStore, TOKEN_KEY, USER_KEY};

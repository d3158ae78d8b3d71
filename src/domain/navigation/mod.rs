//! Navigation module - which page is shown and whether it may render.
//!
//! Page changes go through [`navigate`], a pure function of the requested
//! page name and the current session. The render guard lives on
//! [`NavigationState::is_renderable`].

mod page;
mod state;

pub use page::{Page, EVENT_DETAILS_PREFIX};
pub use state::{navigate, NavigationState};

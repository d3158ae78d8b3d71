//! Application handlers.
//!
//! Page-level operations that orchestrate ports and domain logic. Each
//! handler owns `Arc`s to the ports it needs and exposes one `handle` entry
//! point returning a [`PageError`](super::PageError) on failure.

pub mod auth;
pub mod events;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{LoginHandler, LogoutHandler, RegisterHandler};
pub use events::{
    BrowseEventsHandler, BrowsePage, EventDetailsHandler, GalleryHandler, HomeFeed,
    HomeFeedHandler,
};

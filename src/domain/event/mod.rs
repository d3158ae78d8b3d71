//! Event module - the events read model and client-side derivations.
//!
//! Events are fetched from the API on every page visit and never mutated
//! locally. Everything here is pure: filtering, distinct-value helpers for the
//! selectors, search suggestions, and gallery tiles.

mod event;
pub mod filter;
mod gallery;

pub use event::{Category, Event, EventMode};
pub use filter::{search_suggestions, unique_categories, FilterCriteria};
pub use gallery::{gallery_items, GalleryItem};

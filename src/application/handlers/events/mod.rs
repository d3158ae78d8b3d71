//! Event page handlers: home feed, browse, gallery and event details.

mod browse_events;
mod event_details;
mod gallery;
mod home_feed;

pub use browse_events::{BrowseEventsHandler, BrowsePage};
pub use event_details::{EventDetailsHandler, EVENT_DETAILS_FAILED_MESSAGE};
pub use gallery::GalleryHandler;
pub use home_feed::{HomeFeed, HomeFeedHandler};

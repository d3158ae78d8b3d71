//! Events API Port - Interface for reading events from the backend.
//!
//! Every method is a plain GET with no side effects, so callers may retry
//! freely.

use async_trait::async_trait;

use super::{ApiError, DataEnvelope};
use crate::domain::event::Event;

pub type EventList = DataEnvelope<Vec<Event>>;

/// Port for the event listing and lookup endpoints.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// `GET /events`
    async fn get_all(&self) -> Result<EventList, ApiError>;

    /// `GET /event/{slug}`
    async fn get_by_slug(&self, slug: &str) -> Result<DataEnvelope<Event>, ApiError>;

    /// `GET /events-latest`
    async fn get_latest(&self) -> Result<EventList, ApiError>;

    /// `GET /events-featured`
    async fn get_featured(&self) -> Result<EventList, ApiError>;

    /// `GET /events-trending`
    async fn get_trending(&self) -> Result<EventList, ApiError>;
}

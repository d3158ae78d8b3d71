//! EventDetailsHandler - One event looked up by slug.

use std::sync::Arc;

use crate::application::PageError;
use crate::domain::event::Event;
use crate::ports::EventsApi;

/// Shown when the lookup succeeds at the HTTP level but returns no event.
pub const EVENT_DETAILS_FAILED_MESSAGE: &str = "Failed to load event details";

pub struct EventDetailsHandler {
    events: Arc<dyn EventsApi>,
}

impl EventDetailsHandler {
    pub fn new(events: Arc<dyn EventsApi>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, slug: &str) -> Result<Event, PageError> {
        let envelope = self.events.get_by_slug(slug).await.map_err(|e| {
            tracing::error!(slug, error = %e, "Error fetching event details");
            PageError::from(e)
        })?;

        envelope
            .into_data()
            .ok_or_else(|| PageError::rejected(EVENT_DETAILS_FAILED_MESSAGE))
    }
}

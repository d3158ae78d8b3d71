//! GalleryHandler - Event banners as a photo gallery.

use std::sync::Arc;

use crate::application::PageError;
use crate::domain::event::{gallery_items, GalleryItem};
use crate::ports::EventsApi;

pub struct GalleryHandler {
    events: Arc<dyn EventsApi>,
}

impl GalleryHandler {
    pub fn new(events: Arc<dyn EventsApi>) -> Self {
        Self { events }
    }

    pub async fn handle(&self) -> Result<Vec<GalleryItem>, PageError> {
        let events = self
            .events
            .get_all()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error fetching gallery events");
                PageError::from(e)
            })?
            .into_data()
            .unwrap_or_default();

        Ok(gallery_items(&events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::MockEventsApi;
    use crate::domain::event::Event;

    #[tokio::test]
    async fn builds_tiles_from_banners() {
        let api = MockEventsApi::with_all(vec![
            Event::new(1, "a", "A").with_banner("https://img/a.jpg"),
            Event::new(2, "b", "B"),
            Event::new(3, "c", "C").with_banner("https://img/a.jpg"),
        ]);

        let items = GalleryHandler::new(Arc::new(api)).handle().await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "a");
    }
}

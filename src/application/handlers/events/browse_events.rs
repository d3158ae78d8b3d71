//! BrowseEventsHandler - The full catalogue with filters applied.

use std::sync::Arc;

use crate::application::PageError;
use crate::domain::event::{unique_categories, Event, FilterCriteria};
use crate::ports::EventsApi;

/// What the browse page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowsePage {
    /// Every event returned by the API.
    pub events: Vec<Event>,
    /// `events` narrowed by the criteria used for this page.
    pub filtered: Vec<Event>,
    pub categories: Vec<String>,
}

impl BrowsePage {
    /// Re-applies new criteria to the already-fetched events.
    pub fn refilter(&mut self, criteria: &FilterCriteria) {
        self.filtered = criteria.apply(&self.events);
    }
}

/// Loads events for browsing.
pub struct BrowseEventsHandler {
    events: Arc<dyn EventsApi>,
}

impl BrowseEventsHandler {
    pub fn new(events: Arc<dyn EventsApi>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, criteria: &FilterCriteria) -> Result<BrowsePage, PageError> {
        let events = self
            .events
            .get_all()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error fetching events");
                PageError::from(e)
            })?
            .into_data()
            .unwrap_or_default();

        let filtered = criteria.apply(&events);
        tracing::debug!(total = events.len(), shown = filtered.len(), "Browse events loaded");

        Ok(BrowsePage {
            categories: unique_categories(&events),
            filtered,
            events,
        })
    }

    /// The trending list shown beside the catalogue.
    pub async fn trending(&self) -> Result<Vec<Event>, PageError> {
        let envelope = self.events.get_trending().await?;
        Ok(envelope.into_data().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::MockEventsApi;
    use crate::ports::{ApiError, DataEnvelope};

    fn catalogue() -> Vec<Event> {
        vec![
            Event::new(1, "foo", "Foo").with_category("Tech"),
            Event::new(2, "bar", "Bar").with_category("Sports"),
            Event::new(3, "baz", "Baz").with_category("Tech"),
        ]
    }

    #[tokio::test]
    async fn category_filter_is_case_insensitive() {
        let handler = BrowseEventsHandler::new(Arc::new(MockEventsApi::with_all(catalogue())));

        let page = handler
            .handle(&FilterCriteria::new().with_category("tech"))
            .await
            .unwrap();

        let slugs: Vec<_> = page.filtered.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["foo", "baz"]);
        assert_eq!(page.events.len(), 3);
        assert_eq!(page.categories, vec!["Tech", "Sports"]);
    }

    #[tokio::test]
    async fn refilter_uses_fetched_events() {
        let handler = BrowseEventsHandler::new(Arc::new(MockEventsApi::with_all(catalogue())));
        let mut page = handler.handle(&FilterCriteria::default()).await.unwrap();
        assert_eq!(page.filtered.len(), 3);

        page.refilter(&FilterCriteria::new().with_search("ba"));
        assert_eq!(page.filtered.len(), 2);
    }

    #[tokio::test]
    async fn request_error_is_surfaced() {
        let api = MockEventsApi {
            all: Err(ApiError::Request {
                status: 500,
                message: "Server error".to_string(),
            }),
            ..MockEventsApi::default()
        };

        let err = BrowseEventsHandler::new(Arc::new(api))
            .handle(&FilterCriteria::default())
            .await
            .unwrap_err();

        assert_eq!(err.banner(), "Server error");
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn trending_reads_its_own_feed() {
        let api = MockEventsApi {
            trending: Ok(DataEnvelope::ok(vec![Event::new(9, "hot", "Hot")])),
            ..MockEventsApi::default()
        };

        let trending = BrowseEventsHandler::new(Arc::new(api)).trending().await.unwrap();
        assert_eq!(trending[0].slug, "hot");
    }
}

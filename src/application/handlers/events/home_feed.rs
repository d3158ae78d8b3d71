//! HomeFeedHandler - Featured and latest events for the home page.

use std::sync::Arc;

use crate::application::PageError;
use crate::domain::event::{search_suggestions, unique_categories, Event, FilterCriteria};
use crate::ports::EventsApi;

/// The two home page lists, as fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeFeed {
    pub featured: Vec<Event>,
    pub latest: Vec<Event>,
}

impl HomeFeed {
    fn all(&self) -> impl Iterator<Item = &Event> {
        self.featured.iter().chain(self.latest.iter())
    }

    /// Both lists narrowed by the same criteria.
    pub fn filtered(&self, criteria: &FilterCriteria) -> HomeFeed {
        HomeFeed {
            featured: criteria.apply(&self.featured),
            latest: criteria.apply(&self.latest),
        }
    }

    /// Category names for the selector, featured first.
    pub fn categories(&self) -> Vec<String> {
        unique_categories(self.all())
    }

    /// Title suggestions for the search box.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        search_suggestions(self.all(), query)
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.latest.is_empty()
    }
}

/// Loads the home feed.
pub struct HomeFeedHandler {
    events: Arc<dyn EventsApi>,
}

impl HomeFeedHandler {
    pub fn new(events: Arc<dyn EventsApi>) -> Self {
        Self { events }
    }

    /// Fetches featured and latest together; either failing fails both.
    pub async fn handle(&self) -> Result<HomeFeed, PageError> {
        let (featured, latest) =
            futures::try_join!(self.events.get_featured(), self.events.get_latest()).map_err(
                |e| {
                    tracing::error!(error = %e, "Error fetching home feed");
                    PageError::from(e)
                },
            )?;

        Ok(HomeFeed {
            featured: featured.into_data().unwrap_or_default(),
            latest: latest.into_data().unwrap_or_default(),
        })
    }
}

//! `EventsApi` over HTTP.

use async_trait::async_trait;

use crate::adapters::http::{ApiClient, RequestConfig};
use crate::domain::event::Event;
use crate::ports::{ApiError, DataEnvelope, EventList, EventsApi};

/// Event endpoints of the events backend.
#[derive(Debug, Clone)]
pub struct HttpEventsApi {
    client: ApiClient,
}

impl HttpEventsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn list(&self, path: &str) -> Result<EventList, ApiError> {
        self.client.get_json(path, &RequestConfig::default()).await
    }
}

#[async_trait]
impl EventsApi for HttpEventsApi {
    async fn get_all(&self) -> Result<EventList, ApiError> {
        self.list("/events").await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<DataEnvelope<Event>, ApiError> {
        let url = self.client.endpoint_with_segment("/event", slug)?;
        self.client
            .get_url_json(url, &RequestConfig::default())
            .await
    }

    async fn get_latest(&self) -> Result<EventList, ApiError> {
        self.list("/events-latest").await
    }

    async fn get_featured(&self) -> Result<EventList, ApiError> {
        self.list("/events-featured").await
    }

    async fn get_trending(&self) -> Result<EventList, ApiError> {
        self.list("/events-trending").await
    }
}

//! HTTP client adapter for the events backend.
//!
//! Every request goes to `<base_url><path>` with JSON content headers and,
//! when a token is available, `Authorization: Bearer <token>`. Responses are
//! parsed as JSON and failures are classified into [`ApiError`].
//!
//! # Example
//!
//! ```ignore
//! let client = ApiClient::from_config(&config.api, session_store.clone())?;
//! let body = client.get("/events", &RequestConfig::default()).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::RequestConfig;
use crate::config::ApiConfig;
use crate::ports::{ApiError, TokenProvider};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Thin JSON client over `reqwest`.
///
/// Holds no session state of its own; the token is looked up through the
/// injected [`TokenProvider`] on every request.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// `Transport` if the base URL does not parse or the HTTP client cannot
    /// be built.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(ApiError::transport)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::transport)?;

        Ok(Self {
            base_url,
            client,
            tokens,
        })
    }

    pub fn from_config(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.timeout(), tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path under the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{}/{}", self.base_url, path)).map_err(ApiError::transport)
    }

    /// Full URL for `path/segment`, with `segment` percent-encoded.
    pub fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::transport(format!("cannot append to {}", self.base_url)))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// `GET <base_url><path>`, returning the parsed JSON body.
    pub async fn get(&self, path: &str, config: &RequestConfig) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        self.send(Method::GET, url, None, config).await
    }

    /// `POST <base_url><path>` with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        config: &RequestConfig,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        let body = serde_json::to_value(body).map_err(ApiError::transport)?;
        self.send(Method::POST, url, Some(&body), config).await
    }

    /// `GET` and deserialize the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        config: &RequestConfig,
    ) -> Result<T, ApiError> {
        let body = self.get(path, config).await?;
        decode(body)
    }

    /// `GET` an already-built URL and deserialize the body into `T`.
    pub async fn get_url_json<T: DeserializeOwned>(
        &self,
        url: Url,
        config: &RequestConfig,
    ) -> Result<T, ApiError> {
        let body = self.send(Method::GET, url, None, config).await?;
        decode(body)
    }

    /// `POST` and deserialize the body into `T`.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        config: &RequestConfig,
    ) -> Result<T, ApiError> {
        let body = self.post(path, body, config).await?;
        decode(body)
    }

    fn headers(&self, config: &RequestConfig) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        if let Some(token) = self.tokens.bearer_token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(ApiError::transport)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in config.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(ApiError::transport)?;
            let value = HeaderValue::from_str(value).map_err(ApiError::transport)?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
        config: &RequestConfig,
    ) -> Result<Value, ApiError> {
        tracing::debug!(method = %method, url = %url, "Sending API request");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .headers(self.headers(config)?);
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "API request failed to send");
            ApiError::transport(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Failed to read API response");
            ApiError::transport(e)
        })?;

        let parsed: Value = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(url = %url, status = status.as_u16(), error = %e, "API response is not JSON");
            ApiError::transport(e)
        })?;

        if status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "API request succeeded");
            return Ok(parsed);
        }

        let error = ApiError::from_status_body(status.as_u16(), &parsed);
        tracing::error!(
            url = %url,
            status = status.as_u16(),
            reason = error.message(),
            "API request failed"
        );
        Err(error)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| {
        tracing::error!(error = %e, "API response has an unexpected shape");
        ApiError::transport(e)
    })
}

//! Per-request options for [`ApiClient`](super::ApiClient).

/// Extra headers for one request. Applied after the defaults, so they win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    headers: Vec<(String, String)>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a header for this request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

//! Event read model as served by the events API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Event category, e.g. `Tech` or `Cultural`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// How an event is attended.
///
/// The backend sends lowercase strings. Unknown values are kept verbatim so
/// filtering can still compare them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventMode {
    Online,
    Offline,
    Hybrid,
    Other(String),
}

impl EventMode {
    pub fn as_str(&self) -> &str {
        match self {
            EventMode::Online => "online",
            EventMode::Offline => "offline",
            EventMode::Hybrid => "hybrid",
            EventMode::Other(raw) => raw,
        }
    }
}

impl From<String> for EventMode {
    fn from(raw: String) -> Self {
        match raw.to_lowercase().as_str() {
            "online" => EventMode::Online,
            "offline" => EventMode::Offline,
            "hybrid" => EventMode::Hybrid,
            _ => EventMode::Other(raw),
        }
    }
}

impl From<EventMode> for String {
    fn from(mode: EventMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A campus event.
///
/// Fetched per page visit and never mutated on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    /// URL-safe unique identifier used for detail lookups.
    #[serde(default, deserialize_with = "text_or_null")]
    pub slug: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub mode: Option<EventMode>,
    #[serde(default)]
    pub start_datetime: Option<String>,
    #[serde(default)]
    pub end_datetime: Option<String>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub banner_image_url: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "lenient_count")]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub registration_deadline: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
}

impl Event {
    /// Creates an event with only the identifying fields set.
    pub fn new(id: u64, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            title: title.into(),
            description: None,
            venue: None,
            category: None,
            mode: None,
            start_datetime: None,
            end_datetime: None,
            banner_image: None,
            banner_image_url: None,
            is_featured: false,
            max_participants: None,
            registration_deadline: None,
            meeting_link: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(Category::new(name));
        self
    }

    pub fn with_mode(mut self, mode: EventMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start_datetime = Some(start.into());
        self
    }

    pub fn with_banner(mut self, url: impl Into<String>) -> Self {
        self.banner_image_url = Some(url.into());
        self
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Banner image URL, preferring the absolute URL form.
    pub fn banner(&self) -> Option<&str> {
        [self.banner_image_url.as_deref(), self.banner_image.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
    }
}

/// Accepts `true`/`false`, `0`/`1` and `null` for boolean flags.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        None => false,
    })
}

/// Whole non-negative number sent either as a JSON number or a numeric string.
fn whole_number(value: Option<Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Ids arrive as numbers or strings; anything unreadable becomes `0`.
fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(whole_number(Option::<Value>::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(whole_number(Option::<Value>::deserialize(deserializer)?)
        .and_then(|n| u32::try_from(n).ok()))
}

fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

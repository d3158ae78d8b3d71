//! Client-side filtering over fetched event collections.
//!
//! The displayed subset is recomputed from scratch every time the base
//! collection or a criterion changes; nothing is cached between runs.

use serde::{Deserialize, Serialize};

use super::Event;

/// Selector value meaning "do not filter on this dimension".
pub const ALL: &str = "all";

/// Maximum number of title suggestions offered for a query.
pub const MAX_SUGGESTIONS: usize = 5;

/// Transient filter inputs from the browse/home pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: String,
    pub mode: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: ALL.to_string(),
            mode: ALL.to_string(),
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// True when every stage would pass all events through.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.trim().is_empty()
            && is_all(&self.category)
            && is_all(&self.mode)
    }

    /// Search, then category, then mode. All stages must pass.
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event) && self.matches_category(event) && self.matches_mode(event)
    }

    /// Derives the displayed sequence, preserving input order.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }

    fn matches_search(&self, event: &Event) -> bool {
        if self.search_text.trim().is_empty() {
            return true;
        }
        let query = self.search_text.to_lowercase();

        contains_folded(Some(&event.title), &query)
            || contains_folded(event.description.as_deref(), &query)
            || contains_folded(event.venue.as_deref(), &query)
    }

    fn matches_category(&self, event: &Event) -> bool {
        if is_all(&self.category) {
            return true;
        }
        event
            .category_name()
            .is_some_and(|name| name.to_lowercase() == self.category.to_lowercase())
    }

    fn matches_mode(&self, event: &Event) -> bool {
        if is_all(&self.mode) {
            return true;
        }
        event
            .mode
            .as_ref()
            .is_some_and(|mode| mode.as_str().to_lowercase() == self.mode.to_lowercase())
    }
}

fn is_all(selector: &str) -> bool {
    selector.is_empty() || selector.eq_ignore_ascii_case(ALL)
}

fn contains_folded(field: Option<&str>, lowered_query: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(lowered_query))
}

/// Distinct category names in order of first appearance.
///
/// Dedupes by exact string equality, so `Tech` and `tech` both appear.
pub fn unique_categories<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for name in events.into_iter().filter_map(Event::category_name) {
        if !name.is_empty() && !seen.iter().any(|s| s == name) {
            seen.push(name.to_string());
        }
    }
    seen
}

/// Distinct titles containing `query`, capped at [`MAX_SUGGESTIONS`].
pub fn search_suggestions<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    query: &str,
) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();

    let mut titles: Vec<String> = Vec::new();
    for event in events {
        if titles.iter().any(|t| t == &event.title) {
            continue;
        }
        if event.title.to_lowercase().contains(&query) {
            titles.push(event.title.clone());
            if titles.len() == MAX_SUGGESTIONS {
                break;
            }
        }
    }
    titles
}

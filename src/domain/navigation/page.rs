//! Page enum for the client's views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requests of the form `event-details-<slug>` open a single event.
pub const EVENT_DETAILS_PREFIX: &str = "event-details-";

/// Every view the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Landing,
    Login,
    Register,
    Home,
    Browse,
    Gallery,
    EventDetails,
}

impl Page {
    /// Pages reachable by plain name.
    ///
    /// `EventDetails` is absent: it needs a slug and is only reached through
    /// [`EVENT_DETAILS_PREFIX`].
    pub const NAMED: [Page; 6] = [
        Page::Landing,
        Page::Login,
        Page::Register,
        Page::Home,
        Page::Browse,
        Page::Gallery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Login => "login",
            Page::Register => "register",
            Page::Home => "home",
            Page::Browse => "browse",
            Page::Gallery => "gallery",
            Page::EventDetails => "event-details",
        }
    }

    /// Looks up a page by its plain name. Exact match only.
    pub fn from_name(name: &str) -> Option<Page> {
        Self::NAMED.into_iter().find(|page| page.as_str() == name)
    }

    /// Returns true if the page needs an active session to render.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Page::Home | Page::Browse | Page::Gallery | Page::EventDetails
        )
    }

    /// Protected pages that redirect to login instead of rendering nothing.
    pub fn redirects_to_login(&self) -> bool {
        matches!(self, Page::Home | Page::Browse | Page::Gallery)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Navigation state and the page transition function.

use serde::Serialize;

use super::page::{Page, EVENT_DETAILS_PREFIX};
use crate::domain::session::Session;

/// The page being shown, plus the event slug when it is a detail page.
///
/// # Invariants
///
/// - `pending_slug` is `Some` (and non-empty) exactly when `page` is
///   `EventDetails`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    page: Page,
    pending_slug: Option<String>,
}

impl NavigationState {
    /// A slug-less page. `EventDetails` is not accepted here; it falls back
    /// to `Landing`.
    pub fn page(page: Page) -> Self {
        if page == Page::EventDetails {
            return Self::landing();
        }
        Self {
            page,
            pending_slug: None,
        }
    }

    pub fn landing() -> Self {
        Self::page(Page::Landing)
    }

    /// Detail page for `slug`, or `None` when the slug is empty.
    pub fn event_details(slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        if slug.is_empty() {
            return None;
        }
        Some(Self {
            page: Page::EventDetails,
            pending_slug: Some(slug),
        })
    }

    /// Where the app starts: home with a restored session, landing otherwise.
    pub fn initial(session: Option<&Session>) -> Self {
        match session {
            Some(_) => Self::page(Page::Home),
            None => Self::landing(),
        }
    }

    pub fn current_page(&self) -> Page {
        self.page
    }

    pub fn slug(&self) -> Option<&str> {
        self.pending_slug.as_deref()
    }

    /// Render guard: protected pages need a session.
    pub fn is_renderable(&self, session: Option<&Session>) -> bool {
        !self.page.is_protected() || session.is_some()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::landing()
    }
}

/// Resolves a requested page name against the current session.
///
/// Rules, first match wins:
/// 1. `event-details-<slug>` opens that event, with or without a session.
/// 2. Unknown names go home with a session, to landing without.
/// 3. `home`, `browse` and `gallery` without a session go to login.
/// 4. Anything else is shown as requested.
pub fn navigate(requested: &str, session: Option<&Session>) -> NavigationState {
    if let Some(state) = requested
        .strip_prefix(EVENT_DETAILS_PREFIX)
        .and_then(NavigationState::event_details)
    {
        return state;
    }

    let Some(page) = Page::from_name(requested) else {
        return NavigationState::initial(session);
    };

    if page.redirects_to_login() && session.is_none() {
        return NavigationState::page(Page::Login);
    }

    NavigationState::page(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserProfile;
    use proptest::prelude::*;
    use serde_json::json;

    fn session() -> Session {
        let user = UserProfile::from_value(json!({ "name": "A" }));
        Session::new("t1", user).unwrap()
    }

    #[test]
    fn detail_pattern_wins_regardless_of_session() {
        let s = session();
        for current in [None, Some(&s)] {
            let state = navigate("event-details-abc123", current);
            assert_eq!(state.current_page(), Page::EventDetails);
            assert_eq!(state.slug(), Some("abc123"));
        }
    }

    #[test]
    fn protected_page_without_session_goes_to_login() {
        assert_eq!(navigate("browse", None).current_page(), Page::Login);
        assert_eq!(navigate("home", None).current_page(), Page::Login);
        assert_eq!(navigate("gallery", None).current_page(), Page::Login);
    }

    #[test]
    fn protected_page_with_session_is_shown() {
        let s = session();
        assert_eq!(navigate("browse", Some(&s)).current_page(), Page::Browse);
    }

    #[test]
    fn unknown_page_depends_on_session() {
        let s = session();
        assert_eq!(navigate("unknown-page", Some(&s)).current_page(), Page::Home);
        assert_eq!(navigate("unknown-page", None).current_page(), Page::Landing);
    }

    #[test]
    fn public_pages_are_always_reachable() {
        let s = session();
        for name in ["landing", "login", "register"] {
            assert_eq!(navigate(name, None).current_page().as_str(), name);
            assert_eq!(navigate(name, Some(&s)).current_page().as_str(), name);
        }
    }

    #[test]
    fn empty_slug_is_an_unknown_page() {
        assert_eq!(navigate("event-details-", None).current_page(), Page::Landing);
        assert_eq!(navigate("event-details", None).current_page(), Page::Landing);
    }

    #[test]
    fn detail_page_without_session_is_not_renderable() {
        let state = navigate("event-details-x", None);
        assert!(!state.is_renderable(None));
        assert!(state.is_renderable(Some(&session())));
    }

    #[test]
    fn initial_state_follows_restore() {
        assert_eq!(NavigationState::initial(None).current_page(), Page::Landing);
        assert_eq!(
            NavigationState::initial(Some(&session())).current_page(),
            Page::Home
        );
    }

    #[test]
    fn page_constructor_refuses_slugless_details() {
        let state = NavigationState::page(Page::EventDetails);
        assert_eq!(state.current_page(), Page::Landing);
        assert!(NavigationState::event_details("").is_none());
    }

    proptest! {
        #[test]
        fn slug_is_whatever_follows_the_prefix(slug in "[a-z0-9-]{1,40}") {
            let requested = format!("{EVENT_DETAILS_PREFIX}{slug}");
            let state = navigate(&requested, None);
            prop_assert_eq!(state.current_page(), Page::EventDetails);
            prop_assert_eq!(state.slug(), Some(slug.as_str()));
        }

        #[test]
        fn only_detail_pages_carry_a_slug(requested in "\\PC{0,30}") {
            let state = navigate(&requested, None);
            prop_assert_eq!(
                state.slug().is_some(),
                state.current_page() == Page::EventDetails
            );
        }
    }
}

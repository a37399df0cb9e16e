//! Page, drawer, and input focus state types.
//!
//! These enums decide which page body is rendered, whether the mobile
//! navigation drawer is showing, and where typed characters go.
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::app::modes::{InputFocus, Page};
//!
//! assert_eq!(Page::from_path("/contact"), Some(Page::Contact));
//! assert_eq!(Page::Jobs.path(), "/jobs");
//! assert!(InputFocus::JobSearch.accepts_text());
//! ```

use crate::domain::ContactField;

/// Top-level routes of the landing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page: search form, job grid, and latest updates.
    Home,
    /// Full job listing grid with type filter.
    Jobs,
    /// Announcements feed with category filter and search.
    Announcements,
    /// Contact form.
    Contact,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Jobs, Self::Announcements, Self::Contact];

    /// Route path handed to the routing layer.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Jobs => "/jobs",
            Self::Announcements => "/announcements",
            Self::Contact => "/contact",
        }
    }

    /// Resolves a route path, ignoring a trailing slash and any query string.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or(path);
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }

    /// Heading shown above the page body.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Find your next role",
            Self::Jobs => "Open Positions",
            Self::Announcements => "Announcements",
            Self::Contact => "Contact Us",
        }
    }
}

/// Whether the mobile navigation drawer is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Which input, if any, receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFocus {
    #[default]
    None,
    /// Keyword box of the home/jobs search form.
    JobSearch,
    /// Search box above the announcements feed.
    AnnouncementSearch,
    /// One field of the contact form.
    Contact(ContactField),
}

impl InputFocus {
    #[must_use]
    pub const fn accepts_text(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_with_normalization() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/jobs/"), Some(Page::Jobs));
        assert_eq!(Page::from_path("/jobs?q=rust"), Some(Page::Jobs));
        assert_eq!(Page::from_path("/careers"), None);
    }

    #[test]
    fn drawer_toggles() {
        assert!(DrawerState::Closed.toggled().is_open());
        assert!(!DrawerState::Open.toggled().is_open());
    }
}

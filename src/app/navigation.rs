//! Sidebar navigation entries and the default page layout.
//!
//! A nav entry either points at a section of the home page (scrolled to in
//! place) or at another route (navigated to). Section entries are highlighted
//! by the scroll-spy while the home page is showing.

use crate::domain::Section;

/// Where a navigation entry leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// A section id on the home page.
    Section(String),
    /// A route path such as `/contact`.
    Route(String),
}

/// One entry of the sidebar navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
}

impl NavItem {
    #[must_use]
    pub fn section(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::Section(id.into()),
        }
    }

    #[must_use]
    pub fn route(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::Route(path.into()),
        }
    }

    /// Section id this entry scrolls to, if it is a section entry.
    #[must_use]
    pub fn section_id(&self) -> Option<&str> {
        match &self.target {
            NavTarget::Section(id) => Some(id),
            NavTarget::Route(_) => None,
        }
    }
}

/// Sidebar entries shown on every page.
#[must_use]
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::section("Home", "home"),
        NavItem::section("Jobs", "jobs"),
        NavItem::section("Updates", "updates"),
        NavItem::route("Contact", "/contact"),
    ]
}

/// Initial home page section bounds, replaced once the renderer measures the
/// real layout.
#[must_use]
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("home", "Home", 0.0, 600.0),
        Section::new("jobs", "Jobs", 600.0, 900.0),
        Section::new("updates", "Updates", 1500.0, 500.0),
    ]
}

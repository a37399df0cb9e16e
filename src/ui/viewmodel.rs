//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They carry display-ready
//! strings and flags only; no filtering or scroll logic happens past this point.
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::ui::viewmodel::{NavEntry, SidebarInfo};
//!
//! let sidebar = SidebarInfo {
//!     title: "JobBoard".to_string(),
//!     items: vec![NavEntry { label: "Home".to_string(), is_active: true, is_route: false }],
//!     drawer_open: false,
//! };
//! assert!(sidebar.items[0].is_active);
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub sidebar: SidebarInfo,
    pub header: HeaderInfo,
    pub body: PageBody,
    /// Shown in place of a list when filtering leaves nothing to display.
    pub empty_state: Option<EmptyState>,
    pub footer: FooterInfo,
}

/// Sidebar / top navigation.
#[derive(Debug, Clone)]
pub struct SidebarInfo {
    /// Site name shown as the brand.
    pub title: String,
    pub items: Vec<NavEntry>,
    /// Mobile drawer expanded.
    pub drawer_open: bool,
}

/// One rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    /// Highlighted by the scroll-spy or by the current route.
    pub is_active: bool,
    /// Leads to another page rather than a home page section.
    pub is_route: bool,
}

/// Page heading.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Page-specific content.
#[derive(Debug, Clone)]
pub enum PageBody {
    Home {
        search: SearchBarInfo,
        jobs: Vec<JobCard>,
        updates: Vec<FeedItem>,
    },
    Jobs {
        search: SearchBarInfo,
        tabs: TabsInfo,
        jobs: Vec<JobCard>,
    },
    Announcements {
        search: SearchBarInfo,
        tabs: TabsInfo,
        items: Vec<FeedItem>,
    },
    Contact(ContactView),
}

/// A labelled single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub label: String,
    pub query: String,
    pub is_focused: bool,
}

/// Category selector rendered as a row of tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsInfo {
    /// `(label, is_selected)` pairs, "All" first.
    pub options: Vec<(String, bool)>,
}

/// One row of the job grid.
#[derive(Debug, Clone)]
pub struct JobCard {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub posted: String,
    /// Pointer is over this card.
    pub is_hovered: bool,
    /// Search hits in `title`, as `(start, end)` character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// One row of the announcements feed.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub title: String,
    pub category: String,
    pub date: String,
    pub summary: String,
    /// Search hits in `title`, as `(start, end)` character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Contact page content.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub fields: Vec<FormFieldView>,
    pub status: Option<StatusBanner>,
    /// A submission is in flight; the submit control is disabled.
    pub submitting: bool,
}

/// One input of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
}

/// Result message shown under the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub message: String,
    pub is_error: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No jobs match your search").
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer content.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub copyright: String,
    pub links: Vec<String>,
}

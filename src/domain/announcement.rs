//! Announcement feed domain model.

use super::filter::Filterable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Category tabs offered above the feed, excluding the "All" sentinel.
pub const ANNOUNCEMENT_CATEGORIES: [&str; 3] = ["New", "Update", "Event"];

/// A dated post in the announcements feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    /// One of [`ANNOUNCEMENT_CATEGORIES`]; compared case-insensitively when filtering.
    pub category: String,
    pub summary: String,
    pub published: NaiveDate,
}

impl Announcement {
    /// Publication date formatted for the feed, e.g. `"Mar 04, 2026"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use jobboard_landing::domain::Announcement;
    ///
    /// let post = Announcement {
    ///     id: 1,
    ///     title: "Announcement Title 1".to_string(),
    ///     category: "New".to_string(),
    ///     summary: "We launched.".to_string(),
    ///     published: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
    /// };
    /// assert_eq!(post.published_label(), "Mar 04, 2026");
    /// ```
    #[must_use]
    pub fn published_label(&self) -> String {
        self.published.format("%b %d, %Y").to_string()
    }
}

impl Filterable for Announcement {
    fn category(&self) -> &str {
        &self.category
    }

    fn searchable_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}", self.title, self.summary))
    }
}

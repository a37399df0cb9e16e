//! Category and free-text filtering for listing collections.
//!
//! The job grid and the announcements feed share one filtering rule: a record
//! passes when its category matches the selected category (or the selection is
//! the [`ALL_CATEGORIES`] sentinel) and its searchable text contains the search
//! string, both compared case-insensitively. Filtering never reorders or mutates
//! the source collection.

use std::borrow::Cow;

/// Reserved category value that disables category filtering.
///
/// Compared exactly: `"all"` or `"ALL"` are treated as ordinary categories.
pub const ALL_CATEGORIES: &str = "All";

/// A record that can be narrowed down by [`filter_records`].
///
/// Implementors expose a category label and the text that search queries are
/// matched against. The rest of the record is opaque to the filter.
pub trait Filterable {
    /// Category label compared against [`FilterCriteria::selected_category`].
    fn category(&self) -> &str;

    /// Text that the search query must appear in.
    fn searchable_text(&self) -> Cow<'_, str>;
}

/// The live filter selection supplied by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Selected category, or [`ALL_CATEGORIES`].
    pub selected_category: String,
    /// Case-insensitive substring query; empty matches everything.
    pub search_text: String,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(selected_category: impl Into<String>, search_text: impl Into<String>) -> Self {
        Self {
            selected_category: selected_category.into(),
            search_text: search_text.into(),
        }
    }

    /// Returns `true` if these criteria let every record through.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.selected_category == ALL_CATEGORIES && self.search_text.is_empty()
    }

    /// Returns `true` if `record` passes both the category and the text test.
    #[must_use]
    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.matches_category(record) && self.matches_text(record)
    }

    fn matches_category<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.selected_category == ALL_CATEGORIES
            || record.category().to_lowercase() == self.selected_category.to_lowercase()
    }

    fn matches_text<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.search_text.is_empty()
            || record
                .searchable_text()
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(ALL_CATEGORIES, "")
    }
}

/// Returns the records that pass `criteria`, in their original order.
///
/// # Examples
///
/// ```
/// use jobboard_landing::domain::{filter_records, FilterCriteria, Filterable};
/// use std::borrow::Cow;
///
/// struct Note { category: &'static str, title: &'static str }
///
/// impl Filterable for Note {
///     fn category(&self) -> &str { self.category }
///     fn searchable_text(&self) -> Cow<'_, str> { Cow::Borrowed(self.title) }
/// }
///
/// let notes = [
///     Note { category: "new", title: "Announcement Title 1" },
///     Note { category: "old", title: "Announcement Title 2" },
/// ];
///
/// let hits = filter_records(&notes, &FilterCriteria::new("New", "title 1"));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Announcement Title 1");
/// ```
#[must_use]
pub fn filter_records<'a, R: Filterable>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    let _span = tracing::debug_span!(
        "filter_records",
        total = records.len(),
        category = %criteria.selected_category,
        query_len = criteria.search_text.len()
    )
    .entered();

    let filtered: Vec<&R> = records.iter().filter(|record| criteria.matches(*record)).collect();

    tracing::debug!(filtered_count = filtered.len(), "filter applied");
    filtered
}

/// Owned variant of [`filter_records`], cloning every passing record.
#[must_use]
pub fn filter_records_owned<R: Filterable + Clone>(records: &[R], criteria: &FilterCriteria) -> Vec<R> {
    filter_records(records, criteria).into_iter().cloned().collect()
}

/// Returns the character ranges in `text` where `query` occurs, case-insensitively.
///
/// Ranges are `(start, end)` character indices with exclusive end and never
/// overlap. Used by the view model to highlight search hits.
///
/// # Examples
///
/// ```
/// use jobboard_landing::domain::filter::match_ranges;
///
/// assert_eq!(match_ranges("Rust Engineer, Rust", "rust"), vec![(0, 4), (15, 19)]);
/// assert!(match_ranges("Designer", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    // Per-char lowering keeps indices aligned with `text.chars()`.
    let haystack: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    let mut ranges = Vec::new();
    let mut idx = 0;
    while idx + needle.len() <= haystack.len() {
        if haystack[idx..idx + needle.len()] == needle[..] {
            ranges.push((idx, idx + needle.len()));
            idx += needle.len();
        } else {
            idx += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        category: String,
        text: String,
    }

    impl Item {
        fn new(category: &str, text: &str) -> Self {
            Self {
                category: category.to_string(),
                text: text.to_string(),
            }
        }
    }

    impl Filterable for Item {
        fn category(&self) -> &str {
            &self.category
        }

        fn searchable_text(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.text)
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item::new("New", "Platform launch"),
            Item::new("Update", "Pricing update for employers"),
            Item::new("Event", "Career fair in Berlin"),
            Item::new("new", "New remote roles"),
        ]
    }

    #[test]
    fn sentinel_is_case_sensitive() {
        let items = sample();
        let lower_all = FilterCriteria::new("all", "");
        assert!(filter_records(&items, &lower_all).is_empty());
        assert_eq!(filter_records(&items, &FilterCriteria::default()).len(), 4);
    }

    #[test]
    fn category_matches_ignore_case() {
        let items = sample();
        let hits = filter_records(&items, &FilterCriteria::new("NEW", ""));
        assert_eq!(hits, vec![&items[0], &items[3]]);
    }

    #[test]
    fn both_tests_must_pass() {
        let items = sample();
        let hits = filter_records(&items, &FilterCriteria::new("New", "remote"));
        assert_eq!(hits, vec![&items[3]]);
    }

    #[test]
    fn owned_variant_preserves_order() {
        let items = sample();
        let hits = filter_records_owned(&items, &FilterCriteria::new(ALL_CATEGORIES, "e"));
        let texts: Vec<&str> = hits.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Pricing update for employers",
                "Career fair in Berlin",
                "New remote roles"
            ]
        );
    }

    #[test]
    fn unfiltered_criteria_detected() {
        assert!(FilterCriteria::default().is_unfiltered());
        assert!(!FilterCriteria::new(ALL_CATEGORIES, "x").is_unfiltered());
    }

    #[test]
    fn match_ranges_ignores_case_and_skips_overlaps() {
        assert_eq!(match_ranges("AAAA", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(match_ranges("Senior Engineer", "ENG"), vec![(7, 10)]);
        assert!(match_ranges("short", "much longer query").is_empty());
    }
}

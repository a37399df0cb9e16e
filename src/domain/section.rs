//! Page sections and scroll-position driven section activation.
//!
//! A single-page layout is split into vertically bounded [`Section`]s. As the
//! viewport scrolls, the navigation highlights whichever section contains the
//! *probe point*: the scroll offset plus half the viewport height.
//!
//! Measurements are supplied fresh by the caller on every scroll or resize; the
//! resolver holds no state between calls.

use serde::{Deserialize, Serialize};

/// A named, vertically bounded region of the page.
///
/// `top_offset` is expressed in document coordinates (pixels from the top of the
/// document), not relative to the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier, also used as the scroll target (e.g. `"home"`).
    pub id: String,
    /// Label shown in the sidebar navigation.
    pub label: String,
    /// Pixels from the document top to the section's top edge.
    pub top_offset: f64,
    /// Height of the section in pixels.
    pub height: f64,
}

impl Section {
    /// Creates a section from its identifier, label, and measured bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobboard_landing::domain::Section;
    ///
    /// let home = Section::new("home", "Home", 0.0, 600.0);
    /// assert_eq!(home.bottom(), 600.0);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            top_offset,
            height,
        }
    }

    /// Exclusive bottom edge of the section in document coordinates.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top_offset + self.height
    }

    /// Returns `true` if `probe` lies in `[top_offset, top_offset + height)`.
    ///
    /// NaN on either side never matches.
    #[must_use]
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top_offset && probe < self.bottom()
    }
}

/// Viewport measurements captured at a single scroll or resize event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Vertical scroll offset in pixels, `>= 0`.
    pub scroll_offset: f64,
    /// Visible viewport height in pixels, `> 0`.
    pub viewport_height: f64,
}

impl ScrollState {
    #[must_use]
    pub const fn new(scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }

    /// The vertical coordinate used to decide which section is in view.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobboard_landing::domain::ScrollState;
    ///
    /// assert_eq!(ScrollState::new(500.0, 800.0).probe(), 900.0);
    /// ```
    #[must_use]
    pub fn probe(&self) -> f64 {
        self.scroll_offset + self.viewport_height / 2.0
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0, 800.0)
    }
}

/// Determines which section, if any, contains the probe point.
///
/// Sections are scanned in input order and every match overwrites the previous
/// one, so when bounds overlap the **last** matching section wins. An empty
/// slice, or a probe outside every span, yields `None`.
///
/// # Examples
///
/// ```
/// use jobboard_landing::domain::{resolve_active_section, ScrollState, Section};
///
/// let sections = vec![
///     Section::new("home", "Home", 0.0, 600.0),
///     Section::new("updates", "Updates", 600.0, 500.0),
/// ];
///
/// assert_eq!(resolve_active_section(&ScrollState::new(0.0, 800.0), &sections), Some("home"));
/// assert_eq!(resolve_active_section(&ScrollState::new(500.0, 800.0), &sections), Some("updates"));
/// ```
#[must_use]
pub fn resolve_active_section<'a>(scroll: &ScrollState, sections: &'a [Section]) -> Option<&'a str> {
    let probe = scroll.probe();

    let mut active = None;
    for section in sections {
        if section.contains(probe) {
            active = Some(section.id.as_str());
        }
    }

    tracing::trace!(probe, active = ?active, "resolved active section");
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landing_sections() -> Vec<Section> {
        vec![
            Section::new("home", "Home", 0.0, 600.0),
            Section::new("jobs", "Jobs", 600.0, 900.0),
            Section::new("updates", "Updates", 1500.0, 500.0),
        ]
    }

    #[test]
    fn probe_at_top_edge_is_inclusive() {
        let sections = landing_sections();
        // probe = 200 + 400 = 600, exactly the top of "jobs"
        let scroll = ScrollState::new(200.0, 800.0);
        assert_eq!(resolve_active_section(&scroll, &sections), Some("jobs"));
    }

    #[test]
    fn probe_at_bottom_edge_is_exclusive() {
        let sections = vec![Section::new("home", "Home", 0.0, 600.0)];
        let scroll = ScrollState::new(200.0, 800.0);
        assert_eq!(resolve_active_section(&scroll, &sections), None);
    }

    #[test]
    fn probe_past_last_section_is_none() {
        let sections = landing_sections();
        let scroll = ScrollState::new(5_000.0, 800.0);
        assert_eq!(resolve_active_section(&scroll, &sections), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_last_match() {
        let sections = vec![
            Section::new("hero", "Hero", 0.0, 1_000.0),
            Section::new("search", "Search", 300.0, 400.0),
        ];
        let scroll = ScrollState::new(0.0, 800.0);
        assert_eq!(resolve_active_section(&scroll, &sections), Some("search"));
    }

    #[test]
    fn unsorted_input_still_resolves() {
        let mut sections = landing_sections();
        sections.reverse();
        let scroll = ScrollState::new(1_300.0, 800.0);
        assert_eq!(resolve_active_section(&scroll, &sections), Some("updates"));
    }

    #[test]
    fn nan_measurements_never_match() {
        let sections = vec![Section::new("home", "Home", f64::NAN, 600.0)];
        assert_eq!(resolve_active_section(&ScrollState::default(), &sections), None);

        let sections = landing_sections();
        let scroll = ScrollState::new(f64::NAN, 800.0);
        assert_eq!(resolve_active_section(&scroll, &sections), None);
    }

    #[test]
    fn zero_height_section_is_never_active() {
        let sections = vec![Section::new("spacer", "Spacer", 400.0, 0.0)];
        assert_eq!(resolve_active_section(&ScrollState::default(), &sections), None);
    }
}

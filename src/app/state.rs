//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the landing site: the
//! listings, the live filter selections, the scroll measurements, the contact
//! form, and the current page. Everything the renderer needs is derived from
//! it on demand by [`AppState::compute_viewmodel`].
//!
//! # Derived State
//!
//! Nothing filtered is cached. The visible jobs and announcements are
//! recomputed from the full collections and the current criteria every time
//! they are needed, and the active section is recomputed from the latest
//! scroll snapshot. The only stored derived value is `active_section`, kept so
//! the handler can tell whether a scroll event changed the highlight.
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::app::AppState;
//! use jobboard_landing::source::{ListingSource, MockSource};
//! use jobboard_landing::ui::Theme;
//!
//! let source = MockSource::new(6, 3);
//! let state = AppState::new(source.jobs()?, source.announcements()?, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert_eq!(viewmodel.header.title, "Find your next role");
//! # Ok::<(), jobboard_landing::LandingError>(())
//! ```

use super::modes::{DrawerState, InputFocus, Page};
use super::navigation::{default_nav_items, default_sections, NavItem, NavTarget};
use crate::domain::filter::match_ranges;
use crate::domain::{
    filter_records, resolve_active_section, Announcement, ContactField, ContactForm, FilterCriteria, JobListing,
    JobType, ScrollState, Section, SubmissionStatus, ALL_CATEGORIES, ANNOUNCEMENT_CATEGORIES,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ContactView, EmptyState, FeedItem, FooterInfo, FormFieldView, HeaderInfo, JobCard, NavEntry, PageBody,
    SearchBarInfo, SidebarInfo, StatusBanner, TabsInfo, UIViewModel,
};
use chrono::Datelike;

/// Number of announcements previewed in the home page "Updates" section.
const HOME_UPDATES_PREVIEW: usize = 3;

/// Rows taken by navigation, heading, borders, and footer.
const CHROME_ROWS: usize = 8;

/// Rows taken by a search box (3) and a tab row (1).
const FILTER_ROWS: usize = 4;

/// Delays the runtime waits before acting on navigation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTiming {
    /// Before scrolling to a section, letting the drawer close.
    pub scroll_settle_ms: u64,
    /// Before switching routes.
    pub navigate_settle_ms: u64,
}

impl Default for NavTiming {
    fn default() -> Self {
        Self {
            scroll_settle_ms: 200,
            navigate_settle_ms: 800,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Brand shown in the navigation bar.
    pub site_title: String,
    pub page: Page,
    pub nav_items: Vec<NavItem>,

    /// Latest measured home page sections, in document order.
    pub sections: Vec<Section>,
    /// Latest viewport measurements.
    pub scroll: ScrollState,
    /// Section id currently highlighted by the scroll-spy.
    pub active_section: Option<String>,
    pub drawer: DrawerState,

    /// Every job listing, in source order.
    pub jobs: Vec<JobListing>,
    /// Job type tab and keyword shared by the home and jobs pages.
    pub job_criteria: FilterCriteria,
    /// Id of the job card under the pointer.
    pub hovered_job: Option<u32>,

    /// Every announcement, in source order.
    pub announcements: Vec<Announcement>,
    pub announcement_criteria: FilterCriteria,

    pub contact: ContactForm,
    pub submission: SubmissionStatus,

    pub focus: InputFocus,
    pub timing: NavTiming,
    pub theme: Theme,
}

impl AppState {
    /// Creates state showing the home page scrolled to the top.
    #[must_use]
    pub fn new(jobs: Vec<JobListing>, announcements: Vec<Announcement>, theme: Theme) -> Self {
        let mut state = Self {
            site_title: "JobBoard".to_string(),
            page: Page::Home,
            nav_items: default_nav_items(),
            sections: default_sections(),
            scroll: ScrollState::default(),
            active_section: None,
            drawer: DrawerState::Closed,
            jobs,
            job_criteria: FilterCriteria::default(),
            hovered_job: None,
            announcements,
            announcement_criteria: FilterCriteria::default(),
            contact: ContactForm::default(),
            submission: SubmissionStatus::Idle,
            focus: InputFocus::None,
            timing: NavTiming::default(),
            theme,
        };
        state.refresh_active_section();
        state
    }

    /// Recomputes the highlighted section from the latest scroll snapshot.
    ///
    /// Only the home page has sections; on any other page the highlight is
    /// cleared. Returns `true` if the highlight changed.
    pub fn refresh_active_section(&mut self) -> bool {
        let resolved = if self.page == Page::Home {
            resolve_active_section(&self.scroll, &self.sections).map(str::to_string)
        } else {
            None
        };

        if resolved == self.active_section {
            return false;
        }

        tracing::debug!(from = ?self.active_section, to = ?resolved, "active section changed");
        self.active_section = resolved;
        true
    }

    /// Job listings passing the current type tab and keyword.
    #[must_use]
    pub fn visible_jobs(&self) -> Vec<&JobListing> {
        filter_records(&self.jobs, &self.job_criteria)
    }

    /// Announcements passing the current category tab and search.
    #[must_use]
    pub fn visible_announcements(&self) -> Vec<&Announcement> {
        filter_records(&self.announcements, &self.announcement_criteria)
    }

    /// Mutable handle to the text that typed characters currently edit.
    pub(crate) fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            InputFocus::None => None,
            InputFocus::JobSearch => Some(&mut self.job_criteria.search_text),
            InputFocus::AnnouncementSearch => Some(&mut self.announcement_criteria.search_text),
            InputFocus::Contact(field) => Some(match field {
                ContactField::Name => &mut self.contact.name,
                ContactField::Email => &mut self.contact.email,
                ContactField::Subject => &mut self.contact.subject,
                ContactField::Message => &mut self.contact.message,
            }),
        }
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// Lists are truncated to the rows left after navigation, heading, filter
    /// controls, and footer. When a filtered list comes back empty, an
    /// [`EmptyState`] describes why.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", page = ?self.page, rows, cols).entered();

        let list_rows = rows.saturating_sub(CHROME_ROWS + FILTER_ROWS).max(1);

        let (body, empty_state) = match self.page {
            Page::Home => {
                let jobs = self.job_cards(list_rows.saturating_sub(HOME_UPDATES_PREVIEW + 1).max(1));
                let updates = self
                    .announcements
                    .iter()
                    .take(HOME_UPDATES_PREVIEW)
                    .map(|post| Self::feed_item(post, ""))
                    .collect();
                let empty = jobs.is_empty().then(|| self.jobs_empty_state());
                (
                    PageBody::Home {
                        search: self.job_search_bar("Search jobs"),
                        jobs,
                        updates,
                    },
                    empty,
                )
            }
            Page::Jobs => {
                let jobs = self.job_cards(list_rows);
                let empty = jobs.is_empty().then(|| self.jobs_empty_state());
                (
                    PageBody::Jobs {
                        search: self.job_search_bar("Keyword"),
                        tabs: self.job_tabs(),
                        jobs,
                    },
                    empty,
                )
            }
            Page::Announcements => {
                let query = &self.announcement_criteria.search_text;
                let items: Vec<FeedItem> = self
                    .visible_announcements()
                    .into_iter()
                    .take(list_rows)
                    .map(|post| Self::feed_item(post, query))
                    .collect();
                let empty = items.is_empty().then(|| EmptyState {
                    message: "No announcements found".to_string(),
                    subtitle: "Try another category or clear the search".to_string(),
                });
                (
                    PageBody::Announcements {
                        search: SearchBarInfo {
                            label: "Search announcements".to_string(),
                            query: query.clone(),
                            is_focused: self.focus == InputFocus::AnnouncementSearch,
                        },
                        tabs: Self::tabs(
                            ANNOUNCEMENT_CATEGORIES.iter().copied(),
                            &self.announcement_criteria.selected_category,
                        ),
                        items,
                    },
                    empty,
                )
            }
            Page::Contact => (PageBody::Contact(self.contact_view()), None),
        };

        UIViewModel {
            sidebar: self.compute_sidebar(),
            header: HeaderInfo {
                title: self.page.title().to_string(),
            },
            body,
            empty_state,
            footer: Self::compute_footer(cols),
        }
    }

    fn compute_sidebar(&self) -> SidebarInfo {
        let items = self
            .nav_items
            .iter()
            .map(|item| {
                let is_active = match &item.target {
                    NavTarget::Section(id) => self.active_section.as_deref() == Some(id.as_str()),
                    NavTarget::Route(path) => Page::from_path(path) == Some(self.page),
                };
                NavEntry {
                    label: item.label.clone(),
                    is_active,
                    is_route: matches!(item.target, NavTarget::Route(_)),
                }
            })
            .collect();

        SidebarInfo {
            title: self.site_title.clone(),
            items,
            drawer_open: self.drawer.is_open(),
        }
    }

    fn job_search_bar(&self, label: &str) -> SearchBarInfo {
        SearchBarInfo {
            label: label.to_string(),
            query: self.job_criteria.search_text.clone(),
            is_focused: self.focus == InputFocus::JobSearch,
        }
    }

    fn job_tabs(&self) -> TabsInfo {
        Self::tabs(
            JobType::ALL.iter().map(|job_type| job_type.label()),
            &self.job_criteria.selected_category,
        )
    }

    fn tabs<'a>(categories: impl Iterator<Item = &'a str>, selected: &str) -> TabsInfo {
        let options = std::iter::once(ALL_CATEGORIES)
            .chain(categories)
            .map(|label| {
                // the sentinel is compared exactly, categories case-insensitively
                let is_selected = if label == ALL_CATEGORIES {
                    selected == ALL_CATEGORIES
                } else {
                    label.to_lowercase() == selected.to_lowercase()
                };
                (label.to_string(), is_selected)
            })
            .collect();
        TabsInfo { options }
    }

    fn job_cards(&self, limit: usize) -> Vec<JobCard> {
        let query = &self.job_criteria.search_text;
        self.visible_jobs()
            .into_iter()
            .take(limit)
            .map(|job| JobCard {
                title: job.title.clone(),
                company: job.company.clone(),
                location: job.location.clone(),
                job_type: job.job_type.label().to_string(),
                salary: job.salary.clone(),
                posted: job.posted_label(),
                is_hovered: self.hovered_job == Some(job.id),
                highlight_ranges: match_ranges(&job.title, query),
            })
            .collect()
    }

    fn jobs_empty_state(&self) -> EmptyState {
        if self.jobs.is_empty() {
            EmptyState {
                message: "No open positions yet".to_string(),
                subtitle: "Check back soon for new listings".to_string(),
            }
        } else {
            EmptyState {
                message: "No jobs match your search".to_string(),
                subtitle: "Try a different keyword or job type".to_string(),
            }
        }
    }

    fn feed_item(post: &Announcement, query: &str) -> FeedItem {
        FeedItem {
            title: post.title.clone(),
            category: post.category.clone(),
            date: post.published_label(),
            summary: post.summary.clone(),
            highlight_ranges: match_ranges(&post.title, query),
        }
    }

    fn contact_view(&self) -> ContactView {
        let fields = ContactField::ALL
            .into_iter()
            .map(|field| FormFieldView {
                label: field.label().to_string(),
                value: self.contact.get(field).to_string(),
                is_focused: self.focus == InputFocus::Contact(field),
            })
            .collect();

        let status = match &self.submission {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Pending => Some(StatusBanner {
                message: "Sending your message...".to_string(),
                is_error: false,
            }),
            SubmissionStatus::Success(reference) => Some(StatusBanner {
                message: format!("Thanks! Your message was sent (ref {reference})."),
                is_error: false,
            }),
            SubmissionStatus::Failure(reason) => Some(StatusBanner {
                message: reason.clone(),
                is_error: true,
            }),
        };

        ContactView {
            fields,
            status,
            submitting: self.submission.is_pending(),
        }
    }

    fn compute_footer(cols: usize) -> FooterInfo {
        let year = chrono::Utc::now().year();
        let links = ["About", "Privacy", "Terms", "Contact"];
        FooterInfo {
            copyright: format!("\u{a9} {year} JobBoard. All rights reserved."),
            // Narrow terminals drop the link row entirely.
            links: if cols >= 60 {
                links.iter().map(ToString::to_string).collect()
            } else {
                vec![]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ListingSource, MockSource};

    fn state() -> AppState {
        let source = MockSource::new(12, 9);
        AppState::new(
            source.jobs().unwrap(),
            source.announcements().unwrap(),
            Theme::default(),
        )
    }

    #[test]
    fn starts_on_home_with_first_section_active() {
        let state = state();
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.active_section.as_deref(), Some("home"));
    }

    #[test]
    fn leaving_home_clears_highlight() {
        let mut state = state();
        state.page = Page::Contact;
        assert!(state.refresh_active_section());
        assert_eq!(state.active_section, None);
        assert!(!state.refresh_active_section());
    }

    #[test]
    fn sidebar_marks_section_and_route_entries() {
        let mut state = state();
        let vm = state.compute_viewmodel(30, 100);
        let active: Vec<&str> = vm
            .sidebar
            .items
            .iter()
            .filter(|item| item.is_active)
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(active, vec!["Home"]);

        state.page = Page::Contact;
        state.refresh_active_section();
        let vm = state.compute_viewmodel(30, 100);
        let contact = vm.sidebar.items.iter().find(|item| item.label == "Contact").unwrap();
        assert!(contact.is_active && contact.is_route);
    }

    #[test]
    fn job_grid_respects_terminal_height() {
        let mut state = state();
        state.page = Page::Jobs;
        let vm = state.compute_viewmodel(CHROME_ROWS + FILTER_ROWS + 5, 100);
        let PageBody::Jobs { jobs, tabs, .. } = vm.body else {
            panic!("expected jobs page");
        };
        assert_eq!(jobs.len(), 5);
        assert_eq!(tabs.options[0], ("All".to_string(), true));
    }

    #[test]
    fn empty_search_reports_empty_state() {
        let mut state = state();
        state.job_criteria.search_text = "astronaut".to_string();
        let vm = state.compute_viewmodel(40, 100);
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No jobs match your search");
    }

    #[test]
    fn search_hits_are_highlighted_and_hover_marked() {
        let mut state = state();
        state.page = Page::Jobs;
        state.job_criteria.search_text = "designer".to_string();
        state.hovered_job = Some(3);

        let vm = state.compute_viewmodel(40, 100);
        let PageBody::Jobs { jobs, .. } = vm.body else {
            panic!("expected jobs page");
        };
        assert!(!jobs.is_empty());
        for card in &jobs {
            assert!(card.title.contains("Product Designer"));
            assert_eq!(card.highlight_ranges.len(), 1);
        }
        // Job 3 (index 2) is "Lead Product Designer"
        assert!(jobs[0].is_hovered);
    }

    #[test]
    fn announcement_tabs_follow_selection_case_insensitively() {
        let mut state = state();
        state.page = Page::Announcements;
        state.announcement_criteria.selected_category = "event".to_string();

        let vm = state.compute_viewmodel(40, 100);
        let PageBody::Announcements { tabs, items, .. } = vm.body else {
            panic!("expected announcements page");
        };
        let selected: Vec<&str> = tabs
            .options
            .iter()
            .filter(|(_, on)| *on)
            .map(|(label, _)| label.as_str())
            .collect();
        assert_eq!(selected, vec!["Event"]);
        assert!(items.iter().all(|item| item.category == "Event"));
    }

    #[test]
    fn contact_status_banner_reflects_submission() {
        let mut state = state();
        state.page = Page::Contact;
        state.submission = SubmissionStatus::Failure("Email: is required".to_string());

        let vm = state.compute_viewmodel(30, 100);
        let PageBody::Contact(view) = vm.body else {
            panic!("expected contact page");
        };
        assert_eq!(view.fields.len(), 4);
        let banner = view.status.unwrap();
        assert!(banner.is_error);
        assert!(!view.submitting);
    }

    #[test]
    fn narrow_footer_drops_links() {
        assert!(AppState::compute_footer(40).links.is_empty());
        assert_eq!(AppState::compute_footer(80).links.len(), 4);
    }
}

//! Event handling and state transition logic.
//!
//! The handler turns viewport measurements, pointer and keyboard input, and
//! backend results into state changes plus a list of [`Action`]s for the
//! runtime to carry out.
//!
//! # Data Flow
//!
//! ```text
//! Scroll/resize/input → Event → handle_event → AppState mutation → Actions → runtime
//!                                    ↑                                  │
//!                                    └──── SubmissionFinished/Failed ───┘
//! ```
//!
//! Scroll handling is a pure pipeline: every `Scrolled`, `Resized`, or
//! `SectionsMeasured` event stores the fresh measurements and re-runs the
//! section resolver. No listener or timer lives in the core.
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::app::{handle_event, AppState, Event};
//! use jobboard_landing::ui::Theme;
//!
//! let mut state = AppState::new(vec![], vec![], Theme::default());
//! let (needs_render, actions) = handle_event(&mut state, &Event::Scrolled { offset: 500.0 })?;
//! assert!(needs_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.active_section.as_deref(), Some("jobs"));
//! # Ok::<(), jobboard_landing::LandingError>(())
//! ```

use super::modes::{DrawerState, InputFocus, Page};
use super::navigation::NavTarget;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{JobType, Section, SubmissionStatus, ALL_CATEGORIES};
use crate::forms::{SubmissionRequest, SubmissionResponse};

/// Events triggered by measurements, user input, routing, or the forms backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The document scrolled to `offset` pixels.
    Scrolled { offset: f64 },
    /// The viewport height changed.
    Resized { viewport_height: f64 },
    /// Fresh section bounds after layout.
    SectionsMeasured(Vec<Section>),

    /// Hamburger button pressed.
    ToggleDrawer,
    /// Backdrop tapped or Escape pressed while the drawer is open.
    CloseDrawer,
    /// A sidebar entry was clicked, by index into `AppState::nav_items`.
    NavClicked(usize),
    /// The routing layer switched pages (e.g. browser back button).
    RouteChanged(Page),

    /// Pointer entered a job card (`Some(id)`) or left the grid (`None`).
    HoverJob(Option<u32>),
    /// Moves keyboard focus to an input.
    Focus(InputFocus),
    /// Types a character into the focused input.
    Char(char),
    /// Deletes the last character of the focused input.
    Backspace,

    /// Job type tab selected; `None` selects "All".
    SelectJobType(Option<JobType>),
    /// Announcement category tab selected, or `"All"`.
    SelectAnnouncementCategory(String),

    /// Home page search form submitted.
    SubmitSearch,
    /// Contact form submitted.
    SubmitContact,
    /// The forms backend answered.
    SubmissionFinished(SubmissionResponse),
    /// The forms backend could not be reached.
    SubmissionFailed(String),
    /// The contact status banner was dismissed.
    DismissStatus,
}

/// Processes an event, mutates application state, and returns actions.
///
/// The returned flag reports whether anything visible changed and the frame
/// should be re-rendered.
///
/// # Errors
///
/// Reserved for state transitions that depend on fallible collaborators; all
/// current events are handled infallibly.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Scrolled { offset } => {
            state.scroll.scroll_offset = *offset;
            Ok((state.refresh_active_section(), vec![]))
        }
        Event::Resized { viewport_height } => {
            state.scroll.viewport_height = *viewport_height;
            Ok((state.refresh_active_section(), vec![]))
        }
        Event::SectionsMeasured(sections) => {
            tracing::debug!(count = sections.len(), "sections measured");
            state.sections.clone_from(sections);
            Ok((state.refresh_active_section(), vec![]))
        }
        Event::ToggleDrawer => {
            state.drawer = state.drawer.toggled();
            tracing::debug!(open = state.drawer.is_open(), "drawer toggled");
            Ok((true, vec![]))
        }
        Event::CloseDrawer => {
            if !state.drawer.is_open() {
                return Ok((false, vec![]));
            }
            state.drawer = state.drawer.toggled();
            Ok((true, vec![]))
        }
        Event::NavClicked(index) => {
            let Some(item) = state.nav_items.get(*index).cloned() else {
                tracing::debug!(index, "nav click out of range");
                return Ok((false, vec![]));
            };
            state.drawer = DrawerState::Closed;
            state.focus = InputFocus::None;

            match item.target {
                NavTarget::Section(id) => Ok((true, scroll_to_section(state, id))),
                NavTarget::Route(path) => Ok((true, navigate(state, path))),
            }
        }
        Event::RouteChanged(page) => {
            if state.page == *page {
                return Ok((false, vec![]));
            }
            tracing::debug!(from = ?state.page, to = ?page, "route changed");
            state.page = *page;
            state.focus = InputFocus::None;
            state.hovered_job = None;
            state.scroll.scroll_offset = 0.0;
            state.refresh_active_section();
            Ok((true, vec![]))
        }
        Event::HoverJob(job_id) => {
            if state.hovered_job == *job_id {
                return Ok((false, vec![]));
            }
            state.hovered_job = *job_id;
            Ok((true, vec![]))
        }
        Event::Focus(focus) => {
            if state.focus == *focus {
                return Ok((false, vec![]));
            }
            state.focus = *focus;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let Some(text) = state.focused_text_mut() else {
                return Ok((false, vec![]));
            };
            text.push(*c);
            tracing::trace!(char = %c, "input updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let Some(text) = state.focused_text_mut() else {
                return Ok((false, vec![]));
            };
            Ok((text.pop().is_some(), vec![]))
        }
        Event::SelectJobType(job_type) => {
            let category = job_type.map_or(ALL_CATEGORIES, JobType::label);
            if state.job_criteria.selected_category == category {
                return Ok((false, vec![]));
            }
            state.job_criteria.selected_category = category.to_string();
            Ok((true, vec![]))
        }
        Event::SelectAnnouncementCategory(category) => {
            if &state.announcement_criteria.selected_category == category {
                return Ok((false, vec![]));
            }
            state.announcement_criteria.selected_category.clone_from(category);
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            state.focus = InputFocus::None;
            tracing::debug!(
                query = %state.job_criteria.search_text,
                matches = state.visible_jobs().len(),
                "job search submitted"
            );

            if state.page != Page::Home {
                return Ok((true, vec![]));
            }
            Ok((true, navigate(state, Page::Jobs.path().to_string())))
        }
        Event::SubmitContact => submit_contact(state),
        Event::SubmissionFinished(response) => {
            if !state.submission.is_pending() {
                tracing::debug!(response = ?response, "ignoring response with no pending submission");
                return Ok((false, vec![]));
            }

            match response {
                SubmissionResponse::Accepted { reference } => {
                    tracing::debug!(reference = %reference, "contact submission accepted");
                    state.submission = SubmissionStatus::Success(reference.clone());
                    state.contact.clear();
                    state.focus = InputFocus::None;
                }
                SubmissionResponse::Rejected { reason } => {
                    tracing::debug!(reason = %reason, "contact submission rejected");
                    state.submission = SubmissionStatus::Failure(reason.clone());
                }
            }
            Ok((true, vec![]))
        }
        Event::SubmissionFailed(message) => {
            if !state.submission.is_pending() {
                return Ok((false, vec![]));
            }
            tracing::error!(error = %message, "forms backend unavailable");
            state.submission = SubmissionStatus::Failure(format!("Could not send your message: {message}"));
            Ok((true, vec![]))
        }
        Event::DismissStatus => {
            if matches!(state.submission, SubmissionStatus::Idle | SubmissionStatus::Pending) {
                return Ok((false, vec![]));
            }
            state.submission = SubmissionStatus::Idle;
            Ok((true, vec![]))
        }
    }
}

/// Scrolls to a home page section, routing back home first if needed.
fn scroll_to_section(state: &mut AppState, id: String) -> Vec<Action> {
    let mut actions = vec![];

    if state.page != Page::Home {
        tracing::debug!(section = %id, "returning home before scrolling");
        state.page = Page::Home;
        state.refresh_active_section();
        actions.push(Action::Navigate {
            path: Page::Home.path().to_string(),
            delay_ms: state.timing.navigate_settle_ms,
        });
    }

    tracing::debug!(section = %id, "scrolling to section");
    actions.push(Action::ScrollToSection {
        id,
        delay_ms: state.timing.scroll_settle_ms,
    });
    actions
}

fn navigate(state: &mut AppState, path: String) -> Vec<Action> {
    match Page::from_path(&path) {
        Some(page) => {
            state.page = page;
            state.hovered_job = None;
            state.refresh_active_section();
        }
        None => tracing::debug!(path = %path, "navigating outside the landing site"),
    }

    vec![Action::Navigate {
        path,
        delay_ms: state.timing.navigate_settle_ms,
    }]
}

fn submit_contact(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.submission.is_pending() {
        tracing::debug!("submission already in flight");
        return Ok((false, vec![]));
    }

    if let Err(errors) = state.contact.validate() {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        tracing::debug!(error_count = errors.len(), "contact form invalid");
        state.submission = SubmissionStatus::Failure(message);
        return Ok((true, vec![]));
    }

    state.submission = SubmissionStatus::Pending;
    state.focus = InputFocus::None;
    Ok((
        true,
        vec![Action::SubmitContact(SubmissionRequest::from_form(&state.contact))],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactField, ContactForm};
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(vec![], vec![], Theme::default())
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Listing".to_string(),
            message: "How do I post a job?".to_string(),
        }
    }

    #[test]
    fn scrolling_within_a_section_does_not_rerender() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Scrolled { offset: 100.0 }).unwrap();
        assert!(!render);
        assert_eq!(state.active_section.as_deref(), Some("home"));
    }

    #[test]
    fn resize_moves_the_probe() {
        let mut state = state();
        // probe = 0 + 1400 / 2 = 700, inside "jobs"
        let (render, _) = handle_event(&mut state, &Event::Resized { viewport_height: 1_400.0 }).unwrap();
        assert!(render);
        assert_eq!(state.active_section.as_deref(), Some("jobs"));
    }

    #[test]
    fn measured_sections_replace_defaults() {
        let mut state = state();
        let sections = vec![Section::new("updates", "Updates", 0.0, 2_000.0)];
        handle_event(&mut state, &Event::SectionsMeasured(sections)).unwrap();
        assert_eq!(state.active_section.as_deref(), Some("updates"));

        handle_event(&mut state, &Event::SectionsMeasured(vec![])).unwrap();
        assert_eq!(state.active_section, None);
    }

    #[test]
    fn section_nav_closes_drawer_and_scrolls() {
        let mut state = state();
        handle_event(&mut state, &Event::ToggleDrawer).unwrap();
        assert!(state.drawer.is_open());

        let (_, actions) = handle_event(&mut state, &Event::NavClicked(2)).unwrap();
        assert!(!state.drawer.is_open());
        assert_eq!(
            actions,
            vec![Action::ScrollToSection {
                id: "updates".to_string(),
                delay_ms: 200
            }]
        );
    }

    #[test]
    fn section_nav_from_another_page_goes_home_first() {
        let mut state = state();
        handle_event(&mut state, &Event::RouteChanged(Page::Contact)).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::NavClicked(1)).unwrap();
        assert_eq!(state.page, Page::Home);
        assert_eq!(
            actions,
            vec![
                Action::Navigate {
                    path: "/".to_string(),
                    delay_ms: 800
                },
                Action::ScrollToSection {
                    id: "jobs".to_string(),
                    delay_ms: 200
                },
            ]
        );
    }

    #[test]
    fn route_nav_switches_page() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::NavClicked(3)).unwrap();
        assert_eq!(state.page, Page::Contact);
        assert_eq!(state.active_section, None);
        assert_eq!(
            actions,
            vec![Action::Navigate {
                path: "/contact".to_string(),
                delay_ms: 800
            }]
        );
    }

    #[test]
    fn out_of_range_nav_is_ignored() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::NavClicked(42)).unwrap(), (false, vec![]));
    }

    #[test]
    fn typing_goes_to_focused_input_only() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::Char('x')).unwrap().0);

        handle_event(&mut state, &Event::Focus(InputFocus::AnnouncementSearch)).unwrap();
        for c in "tit".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.announcement_criteria.search_text, "ti");
        assert!(state.job_criteria.search_text.is_empty());

        handle_event(&mut state, &Event::Focus(InputFocus::Contact(ContactField::Email))).unwrap();
        handle_event(&mut state, &Event::Char('@')).unwrap();
        assert_eq!(state.contact.email, "@");
    }

    #[test]
    fn backspace_on_empty_input_does_not_rerender() {
        let mut state = state();
        handle_event(&mut state, &Event::Focus(InputFocus::JobSearch)).unwrap();
        assert!(!handle_event(&mut state, &Event::Backspace).unwrap().0);
    }

    #[test]
    fn job_type_tabs_set_category() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectJobType(Some(JobType::Remote))).unwrap();
        assert_eq!(state.job_criteria.selected_category, "Remote");

        let (render, _) = handle_event(&mut state, &Event::SelectJobType(Some(JobType::Remote))).unwrap();
        assert!(!render);

        handle_event(&mut state, &Event::SelectJobType(None)).unwrap();
        assert_eq!(state.job_criteria.selected_category, ALL_CATEGORIES);
    }

    #[test]
    fn search_submit_on_home_opens_job_grid() {
        let mut state = state();
        handle_event(&mut state, &Event::Focus(InputFocus::JobSearch)).unwrap();
        for c in "design".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }

        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert_eq!(state.focus, InputFocus::None);
        assert_eq!(state.page, Page::Jobs);
        assert_eq!(state.job_criteria.search_text, "design");
        assert_eq!(
            actions,
            vec![Action::Navigate {
                path: "/jobs".to_string(),
                delay_ms: 800
            }]
        );

        // submitting again from the grid only clears focus
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn invalid_contact_form_fails_without_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::SubmitContact).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        let SubmissionStatus::Failure(message) = &state.submission else {
            panic!("expected failure, got {:?}", state.submission);
        };
        assert!(message.starts_with("Name: is required"));
    }

    #[test]
    fn contact_submission_lifecycle() {
        let mut state = state();
        state.contact = filled_form();

        let (_, actions) = handle_event(&mut state, &Event::SubmitContact).unwrap();
        assert_eq!(state.submission, SubmissionStatus::Pending);
        let [Action::SubmitContact(request)] = actions.as_slice() else {
            panic!("expected a single submit action, got {actions:?}");
        };
        assert_eq!(request.email, "ada@example.com");

        // double submit while pending is ignored
        let (render, actions) = handle_event(&mut state, &Event::SubmitContact).unwrap();
        assert!(!render && actions.is_empty());

        // pending cannot be dismissed
        assert!(!handle_event(&mut state, &Event::DismissStatus).unwrap().0);

        let accepted = SubmissionResponse::Accepted {
            reference: "MSG-0001".to_string(),
        };
        handle_event(&mut state, &Event::SubmissionFinished(accepted)).unwrap();
        assert_eq!(state.submission, SubmissionStatus::Success("MSG-0001".to_string()));
        assert_eq!(state.contact, ContactForm::default());

        handle_event(&mut state, &Event::DismissStatus).unwrap();
        assert_eq!(state.submission, SubmissionStatus::Idle);
    }

    #[test]
    fn rejected_submission_keeps_the_form() {
        let mut state = state();
        state.contact = filled_form();
        handle_event(&mut state, &Event::SubmitContact).unwrap();

        let rejected = SubmissionResponse::Rejected {
            reason: "Try again later".to_string(),
        };
        handle_event(&mut state, &Event::SubmissionFinished(rejected)).unwrap();
        assert_eq!(state.submission, SubmissionStatus::Failure("Try again later".to_string()));
        assert_eq!(state.contact, filled_form());
    }

    #[test]
    fn transport_failure_and_stale_responses() {
        let mut state = state();
        let stale = SubmissionResponse::Accepted {
            reference: "MSG-0009".to_string(),
        };
        assert!(!handle_event(&mut state, &Event::SubmissionFinished(stale)).unwrap().0);
        assert_eq!(state.submission, SubmissionStatus::Idle);

        state.contact = filled_form();
        handle_event(&mut state, &Event::SubmitContact).unwrap();
        handle_event(&mut state, &Event::SubmissionFailed("timeout".to_string())).unwrap();
        assert_eq!(
            state.submission,
            SubmissionStatus::Failure("Could not send your message: timeout".to_string())
        );
    }
}

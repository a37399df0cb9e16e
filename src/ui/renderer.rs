//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers, which
//!    write ANSI-styled text into one frame buffer
//!
//! The frame positions every line explicitly, so printing it over the
//! previous frame redraws the screen without clearing.
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::app::AppState;
//! use jobboard_landing::ui::{render, Theme};
//!
//! let state = AppState::new(vec![], vec![], Theme::default());
//! let frame = render(&state, 24, 80);
//! assert!(frame.contains("No open positions yet"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current state for a `rows` x `cols` terminal.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let mut out = String::with_capacity(rows * cols * 4);
    components::render_page(&mut out, vm, theme, cols, rows);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, Page};
    use crate::source::{ListingSource, MockSource};

    fn state() -> AppState {
        let source = MockSource::default();
        AppState::new(source.jobs().unwrap(), source.announcements().unwrap(), Theme::default())
    }

    #[test]
    fn home_frame_shows_grid_and_updates() {
        let frame = render(&state(), 30, 120);
        assert!(frame.contains("Find your next role"));
        assert!(frame.contains("Junior Frontend Developer"));
        assert!(frame.contains("Latest Updates"));
        assert!(frame.contains("Announcement Title 1"));
        assert!(frame.contains("All rights reserved."));
    }

    #[test]
    fn footer_sits_on_the_last_row() {
        let frame = render(&state(), 30, 120);
        assert!(frame.contains("\u{1b}[30;1H"));
        assert!(!frame.contains("\u{1b}[31;1H"));
    }

    #[test]
    fn contact_page_renders_form() {
        let mut state = state();
        handle_event(&mut state, &Event::RouteChanged(Page::Contact)).unwrap();

        let frame = render(&state, 24, 80);
        assert!(frame.contains("Contact Us"));
        assert!(frame.contains("Message"));
        assert!(frame.contains("[ Send Message ]"));
    }

    #[test]
    fn empty_filter_renders_message() {
        let mut state = state();
        handle_event(&mut state, &Event::RouteChanged(Page::Jobs)).unwrap();
        state.job_criteria.search_text = "zzz".to_string();

        let frame = render(&state, 24, 80);
        assert!(frame.contains("No jobs match your search"));
    }
}

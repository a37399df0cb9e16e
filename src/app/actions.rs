//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never scrolls, routes, or sends anything itself. It
//! returns these commands and the runtime carries them out, including any
//! settle delay, then reports results back as events.
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::app::Action;
//!
//! let actions = vec![
//!     Action::ScrollToSection { id: "jobs".to_string(), delay_ms: 200 },
//!     Action::Navigate { path: "/contact".to_string(), delay_ms: 800 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::forms::SubmissionRequest;

/// Commands produced by [`handle_event`](super::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Scrolls the home page so the section with `id` is in view.
    ///
    /// `delay_ms` lets the drawer close animation settle before scrolling.
    ScrollToSection { id: String, delay_ms: u64 },

    /// Asks the routing layer to show `path`.
    Navigate { path: String, delay_ms: u64 },

    /// Hands a validated contact form to the forms backend.
    ///
    /// The runtime answers with
    /// [`Event::SubmissionFinished`](super::Event::SubmissionFinished) or
    /// [`Event::SubmissionFailed`](super::Event::SubmissionFailed).
    SubmitContact(SubmissionRequest),
}

//! Forms backend abstraction and the simulated implementation.
//!
//! The app layer never talks to a backend directly: it emits
//! [`Action::SubmitContact`](crate::app::Action::SubmitContact) and later receives
//! [`Event::SubmissionFinished`](crate::app::Event::SubmissionFinished). The
//! runtime in between owns a [`FormsBackend`], so swapping the simulated one for
//! a real network client does not touch any state or rendering code.

use super::messages::{SubmissionRequest, SubmissionResponse};
use crate::domain::{LandingError, Result};

/// Destination for contact form submissions.
pub trait FormsBackend {
    /// Delivers one submission.
    ///
    /// A rejection is a normal [`SubmissionResponse::Rejected`], not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Forms`](crate::LandingError::Forms) when the
    /// backend could not be reached at all.
    fn submit(&mut self, request: &SubmissionRequest) -> Result<SubmissionResponse>;
}

/// Backend that answers immediately without sending anything.
///
/// Accepts every request with sequential references (`MSG-0001`, `MSG-0002`, ...)
/// unless configured to reject or to behave as unreachable.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    accepted: u32,
    mode: Mode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    Accept,
    Reject(String),
    Offline,
}

impl SimulatedBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that rejects every submission with `reason`.
    #[must_use]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            accepted: 0,
            mode: Mode::Reject(reason.into()),
        }
    }

    /// A backend that fails every submission as if the network were down.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            accepted: 0,
            mode: Mode::Offline,
        }
    }

    /// Number of submissions accepted so far.
    #[must_use]
    pub const fn accepted(&self) -> u32 {
        self.accepted
    }
}

impl FormsBackend for SimulatedBackend {
    fn submit(&mut self, request: &SubmissionRequest) -> Result<SubmissionResponse> {
        let _span = tracing::debug_span!("simulated_submit", email = %request.email).entered();

        match &self.mode {
            Mode::Accept => {}
            Mode::Reject(reason) => {
                tracing::debug!(reason = %reason, "submission rejected");
                return Ok(SubmissionResponse::Rejected {
                    reason: reason.clone(),
                });
            }
            Mode::Offline => {
                return Err(LandingError::Forms("forms backend is offline".to_string()));
            }
        }

        self.accepted += 1;
        let reference = format!("MSG-{:04}", self.accepted);
        tracing::debug!(reference = %reference, "submission accepted");

        Ok(SubmissionResponse::Accepted { reference })
    }
}

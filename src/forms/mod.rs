//! Contact form delivery.
//!
//! - [`messages`]: request/response wire types
//! - [`backend`]: the [`FormsBackend`] trait and [`SimulatedBackend`]

pub mod backend;
pub mod messages;

pub use backend::{FormsBackend, SimulatedBackend};
pub use messages::{SubmissionRequest, SubmissionResponse};

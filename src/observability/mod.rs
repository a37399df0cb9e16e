//! File-based logging for the preview binary and embedding hosts.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → jobboard-landing.log(.1 .2 .3)
//! ```
//!
//! Spans around section resolution, list filtering, view model computation,
//! and event handling are emitted throughout the crate; nothing is recorded
//! until [`init_tracing`] installs a subscriber.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;

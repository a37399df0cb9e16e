//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{default_log_file, expand_tilde, state_dir};

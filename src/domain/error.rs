//! Error types for the landing site core.
//!
//! This module defines the centralized error type [`LandingError`] and a type alias
//! [`Result`] used throughout the crate. The two pure resolvers (section activation
//! and list filtering) never produce errors; everything here belongs to the
//! surrounding configuration, data-source, theme, and forms plumbing.

use thiserror::Error;

/// The main error type for landing site operations.
///
/// Most variants carry a human-readable description. Standard library I/O errors
/// and `serde_json` decoding errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use jobboard_landing::domain::LandingError;
///
/// fn check_job_count(count: usize) -> Result<(), LandingError> {
///     if count == 0 {
///         return Err(LandingError::Config("job_count must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_job_count(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum LandingError {
    /// Filesystem or I/O operation failed.
    ///
    /// Raised when a config, theme, or listing fixture file cannot be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme lookup or theme file parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A listing source returned data that could not be decoded.
    #[error("Listing source error: {0}")]
    Source(#[from] serde_json::Error),

    /// The forms backend failed to process a submission.
    ///
    /// A backend *rejecting* a submission is not an error; it is reported as a
    /// regular response. This variant covers transport-level failures.
    #[error("Forms backend error: {0}")]
    Forms(String),
}

/// A specialized `Result` type for landing site operations.
pub type Result<T> = std::result::Result<T, LandingError>;

//! Listing source abstraction.
//!
//! The landing page only ever reads listings; it never writes them back. This
//! trait covers exactly those reads so the in-memory generator and a file or
//! API backed source are interchangeable.

use crate::domain::{Announcement, JobListing, Result};

/// Supplier of the records rendered by the job grid and announcements feed.
///
/// Records are returned in display order. Callers filter them with
/// [`filter_records`](crate::domain::filter_records) and must not assume any
/// other ordering.
///
/// # Implementations
///
/// - [`MockSource`](super::MockSource): deterministic in-memory data (default)
/// - [`JsonSource`](super::JsonSource): read-only JSON fixture file
pub trait ListingSource {
    /// Returns every job listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or decoded.
    fn jobs(&self) -> Result<Vec<JobListing>>;

    /// Returns every announcement, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or decoded.
    fn announcements(&self) -> Result<Vec<Announcement>>;
}

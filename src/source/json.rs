//! Read-only JSON fixture source.
//!
//! Lets the landing page show a hand-curated set of listings instead of the
//! generated ones. The file is read once when the source is opened and never
//! written back.
//!
//! # File Format
//!
//! ```json
//! {
//!   "jobs": [
//!     {
//!       "id": 1,
//!       "title": "Backend Engineer",
//!       "company": "Acme Corp",
//!       "location": "Remote",
//!       "job_type": "Full-time",
//!       "salary": "$100k - $130k",
//!       "posted_days_ago": 2
//!     }
//!   ],
//!   "announcements": [
//!     {
//!       "id": 1,
//!       "title": "We're live",
//!       "category": "New",
//!       "summary": "The new job board is open to everyone.",
//!       "published": "2026-01-15"
//!     }
//!   ]
//! }
//! ```
//!
//! Either array may be omitted.

use super::backend::ListingSource;
use crate::domain::{Announcement, JobListing, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
struct ListingFile {
    #[serde(default)]
    jobs: Vec<JobListing>,
    #[serde(default)]
    announcements: Vec<Announcement>,
}

/// Listings loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSource {
    file_path: Option<PathBuf>,
    data: ListingFile,
}

impl JsonSource {
    /// Reads and decodes the fixture at `file_path`.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Io`](crate::LandingError::Io) if the file cannot be
    /// read and [`LandingError::Source`](crate::LandingError::Source) if it is not
    /// valid listing JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jobboard_landing::source::{JsonSource, ListingSource};
    ///
    /// let source = JsonSource::open("listings.json")?;
    /// let jobs = source.jobs()?;
    /// # Ok::<(), jobboard_landing::LandingError>(())
    /// ```
    pub fn open(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        tracing::debug!(path = ?file_path, "opening listing fixture");

        let contents = std::fs::read_to_string(file_path)?;
        let mut source = Self::from_json(&contents)?;
        source.file_path = Some(file_path.to_path_buf());
        Ok(source)
    }

    /// Decodes listings from an in-memory JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Source`](crate::LandingError::Source) on malformed JSON.
    pub fn from_json(contents: &str) -> Result<Self> {
        let data: ListingFile = serde_json::from_str(contents)?;

        tracing::debug!(
            jobs = data.jobs.len(),
            announcements = data.announcements.len(),
            "listing fixture decoded"
        );

        Ok(Self {
            file_path: None,
            data,
        })
    }

    /// Path the listings were read from, if any.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl ListingSource for JsonSource {
    fn jobs(&self) -> Result<Vec<JobListing>> {
        Ok(self.data.jobs.clone())
    }

    fn announcements(&self) -> Result<Vec<Announcement>> {
        Ok(self.data.announcements.clone())
    }
}

//! Deterministic in-memory listing generator.
//!
//! Every field is derived from the record index with small modular formulas,
//! so the same counts always yield the same listings. This keeps the landing
//! page and its tests stable without any backing store.

use super::backend::ListingSource;
use crate::domain::{Announcement, JobListing, JobType, Result, ANNOUNCEMENT_CATEGORIES};
use chrono::{Days, NaiveDate};

const SENIORITIES: [&str; 3] = ["Junior", "Senior", "Lead"];

const ROLES: [&str; 4] = [
    "Frontend Developer",
    "Backend Engineer",
    "Product Designer",
    "Data Analyst",
];

const COMPANIES: [&str; 3] = ["Acme Corp", "Globex", "Initech"];

const LOCATIONS: [&str; 5] = [
    "New York, NY",
    "San Francisco, CA",
    "Austin, TX",
    "Remote",
    "London, UK",
];

const SUMMARIES: [&str; 4] = [
    "New features are now available on the platform.",
    "We've refreshed how employers review applications.",
    "Join our upcoming virtual career fair.",
    "Tips for making your profile stand out to recruiters.",
];

/// Days between two consecutive generated announcements.
const ANNOUNCEMENT_SPACING_DAYS: u64 = 5;

/// Reference date that generated announcements count back from.
const DEFAULT_BASE_DATE: (i32, u32, u32) = (2026, 1, 15);

/// Generates a fixed number of jobs and announcements on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSource {
    pub job_count: usize,
    pub announcement_count: usize,
    /// Publication date of the newest generated announcement.
    pub base_date: NaiveDate,
}

impl MockSource {
    /// Creates a generator anchored at the default base date.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobboard_landing::source::{ListingSource, MockSource};
    ///
    /// let source = MockSource::new(8, 6);
    /// let jobs = source.jobs()?;
    /// assert_eq!(jobs.len(), 8);
    /// assert_eq!(jobs[0].title, "Junior Frontend Developer");
    /// # Ok::<(), jobboard_landing::LandingError>(())
    /// ```
    #[must_use]
    pub fn new(job_count: usize, announcement_count: usize) -> Self {
        let (year, month, day) = DEFAULT_BASE_DATE;
        Self {
            job_count,
            announcement_count,
            base_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        }
    }

    fn job(index: usize) -> JobListing {
        let salary_floor = 60 + (index % 5) * 10;

        JobListing {
            id: to_id(index),
            title: format!("{} {}", SENIORITIES[index % 3], ROLES[index % 4]),
            company: COMPANIES[index % 3].to_string(),
            location: LOCATIONS[index % 5].to_string(),
            job_type: JobType::ALL[(index + 1) % 4],
            salary: format!("${salary_floor}k - ${}k", salary_floor + 20),
            posted_days_ago: u32::try_from(index * 2 % 21).unwrap_or(0),
        }
    }

    fn announcement(&self, index: usize) -> Announcement {
        let offset = Days::new(index as u64 * ANNOUNCEMENT_SPACING_DAYS);

        Announcement {
            id: to_id(index),
            title: format!("Announcement Title {}", index + 1),
            category: ANNOUNCEMENT_CATEGORIES[index % 3].to_string(),
            summary: SUMMARIES[index % 4].to_string(),
            published: self.base_date.checked_sub_days(offset).unwrap_or(self.base_date),
        }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(12, 9)
    }
}

impl ListingSource for MockSource {
    fn jobs(&self) -> Result<Vec<JobListing>> {
        tracing::debug!(count = self.job_count, "generating mock jobs");
        Ok((0..self.job_count).map(Self::job).collect())
    }

    fn announcements(&self) -> Result<Vec<Announcement>> {
        tracing::debug!(count = self.announcement_count, "generating mock announcements");
        Ok((0..self.announcement_count)
            .map(|index| self.announcement(index))
            .collect())
    }
}

/// Converts a zero-based index into a one-based record id.
fn to_id(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

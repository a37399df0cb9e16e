//! Job listing domain model.
//!
//! Listings populate the grid on the home page. The employment type doubles as
//! the listing's filter category, so the grid can be narrowed with the same
//! [`filter_records`](super::filter::filter_records) rule as the announcements feed.

use super::filter::Filterable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Number of days in one week.
const DAYS_PER_WEEK: u32 = 7;

/// Employment type of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    /// All job types in display order.
    pub const ALL: [Self; 4] = [Self::FullTime, Self::PartTime, Self::Contract, Self::Remote];

    /// Label shown on job cards and used as the filter category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single open position shown in the job grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    /// Free-form salary band, e.g. `"$90k - $120k"`.
    pub salary: String,
    pub posted_days_ago: u32,
}

impl JobListing {
    /// Returns a short description of how long ago the listing was posted.
    ///
    /// - `0` days: "Today"
    /// - `1` day: "1 day ago"
    /// - under a week: "N days ago"
    /// - otherwise: "N weeks ago" (rounded down, "1 week ago" for one)
    ///
    /// # Examples
    ///
    /// ```
    /// use jobboard_landing::domain::{JobListing, JobType};
    ///
    /// let mut job = JobListing {
    ///     id: 1,
    ///     title: "Backend Engineer".to_string(),
    ///     company: "Acme".to_string(),
    ///     location: "Remote".to_string(),
    ///     job_type: JobType::Remote,
    ///     salary: "$100k".to_string(),
    ///     posted_days_ago: 0,
    /// };
    /// assert_eq!(job.posted_label(), "Today");
    ///
    /// job.posted_days_ago = 15;
    /// assert_eq!(job.posted_label(), "2 weeks ago");
    /// ```
    #[must_use]
    pub fn posted_label(&self) -> String {
        match self.posted_days_ago {
            0 => "Today".to_string(),
            1 => "1 day ago".to_string(),
            days if days < DAYS_PER_WEEK => format!("{days} days ago"),
            days if days < DAYS_PER_WEEK * 2 => "1 week ago".to_string(),
            days => format!("{} weeks ago", days / DAYS_PER_WEEK),
        }
    }
}

impl Filterable for JobListing {
    fn category(&self) -> &str {
        self.job_type.label()
    }

    fn searchable_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {} {}", self.title, self.company, self.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{filter_records, FilterCriteria};

    fn listing(id: u32, title: &str, job_type: JobType) -> JobListing {
        JobListing {
            id,
            title: title.to_string(),
            company: "Northwind".to_string(),
            location: "Lisbon".to_string(),
            job_type,
            salary: "$80k - $95k".to_string(),
            posted_days_ago: id,
        }
    }

    #[test]
    fn posted_label_buckets() {
        let labels: Vec<String> = [1, 6, 7, 13, 14, 30]
            .into_iter()
            .map(|days| listing(days, "x", JobType::Contract).posted_label())
            .collect();
        assert_eq!(
            labels,
            vec!["1 day ago", "6 days ago", "1 week ago", "1 week ago", "2 weeks ago", "4 weeks ago"]
        );
    }

    #[test]
    fn job_type_filters_by_label() {
        let jobs = vec![
            listing(1, "Data Analyst", JobType::FullTime),
            listing(2, "Support Lead", JobType::PartTime),
            listing(3, "Data Engineer", JobType::FullTime),
        ];
        let hits = filter_records(&jobs, &FilterCriteria::new("full-time", "data"));
        let ids: Vec<u32> = hits.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn company_and_location_are_searchable() {
        let jobs = vec![listing(1, "Designer", JobType::Remote)];
        assert_eq!(filter_records(&jobs, &FilterCriteria::new("All", "northwind")).len(), 1);
        assert_eq!(filter_records(&jobs, &FilterCriteria::new("All", "LISBON")).len(), 1);
    }

    #[test]
    fn job_type_serializes_with_label() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"Full-time\"");
    }
}

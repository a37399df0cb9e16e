//! Domain layer for the landing site.
//!
//! This module contains the core value types and the two pure resolvers the
//! rest of the crate is built around, independent of rendering or data-source
//! concerns.
//!
//! # Organization
//!
//! - [`section`]: Page sections and scroll-spy activation
//! - [`filter`]: Category + substring filtering shared by all listings
//! - [`job`]: Job listing model
//! - [`announcement`]: Announcement feed model
//! - [`contact`]: Contact form, validation, and submission status
//! - [`error`]: Error types and result alias
//!
//! # Examples
//!
//! ```
//! use jobboard_landing::domain::{resolve_active_section, ScrollState, Section};
//!
//! let sections = [Section::new("home", "Home", 0.0, 600.0)];
//! assert_eq!(resolve_active_section(&ScrollState::default(), &sections), Some("home"));
//! ```

pub mod announcement;
pub mod contact;
pub mod error;
pub mod filter;
pub mod job;
pub mod section;

pub use announcement::{Announcement, ANNOUNCEMENT_CATEGORIES};
pub use contact::{ContactField, ContactForm, FieldError, SubmissionStatus};
pub use error::{LandingError, Result};
pub use filter::{filter_records, filter_records_owned, FilterCriteria, Filterable, ALL_CATEGORIES};
pub use job::{JobListing, JobType};
pub use section::{resolve_active_section, ScrollState, Section};

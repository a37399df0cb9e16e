//! Listing data sources.
//!
//! Provides the records behind the job grid and the announcements feed. The
//! landing page never persists anything, so every source here is read-only.
//!
//! - [`ListingSource`]: source trait
//! - [`MockSource`]: deterministic generated listings
//! - [`JsonSource`]: listings read from a JSON fixture

pub mod backend;
pub mod json;
pub mod mock;

pub use backend::ListingSource;
pub use json::JsonSource;
pub use mock::MockSource;

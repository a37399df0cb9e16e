//! JobBoard landing: the state and behaviour behind a job-board landing site.
//!
//! The crate models a marketing front end with:
//! - A home page with a job search form, a job grid, and an updates preview
//! - Scroll-spy navigation that highlights the section under the viewport centre
//! - Category + substring filtering for jobs and announcements
//! - A validated contact form handed to a (simulated) forms backend
//! - A terminal preview renderer with built-in and file-based themes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Preview binary (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Source Layer  │   │ Forms Layer   │
//! │ (ui/)         │   │ (source/)     │   │ (forms/)      │
//! │ - Rendering   │   │ - Mock data   │   │ - Requests    │
//! │ - Theming     │   │ - JSON files  │   │ - Simulated   │
//! │ - Components  │   │               │   │   backend     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Section resolver, list filter (domain/)          │
//! │  - Jobs, announcements, contact form (domain/)      │
//! │  - Paths (infrastructure/)                          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber to a rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core types, the section resolver, and the list filter
//! - [`source`]: Listing data sources (generated mock data, JSON fixtures)
//! - [`forms`]: Contact submission types and backends
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Path handling
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Either `key=value` pairs (see [`Config::from_map`]) or a TOML file:
//!
//! ```toml
//! site_title = "JobBoard"
//! theme_name = "landing-light"
//! job_count = 12
//! announcement_count = 9
//! # data_file = "~/fixtures/listings.json"
//! scroll_settle_ms = 200
//! navigate_settle_ms = 800
//! log_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! // The viewport centre moves into the jobs section
//! let (needs_render, _) = handle_event(&mut state, &Event::Scrolled { offset: 500.0 })?;
//! assert!(needs_render);
//! assert_eq!(state.active_section.as_deref(), Some("jobs"));
//!
//! let frame = jobboard_landing::ui::render(&state, 24, 100);
//! assert!(frame.contains("JobBoard"));
//! # Ok::<(), jobboard_landing::LandingError>(())
//! ```

pub mod app;
pub mod domain;
pub mod forms;
pub mod infrastructure;
pub mod observability;
pub mod source;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, NavTiming, Page};
pub use domain::{filter_records, resolve_active_section, FilterCriteria, LandingError, Result, ScrollState, Section};
pub use ui::Theme;

use serde::Deserialize;
use source::{JsonSource, ListingSource, MockSource};
use std::collections::BTreeMap;
use std::path::Path;

/// Landing site configuration.
///
/// Every field has a default, so an empty map or an empty TOML file yields
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brand shown in the navigation bar. Default: `"JobBoard"`
    pub site_title: String,

    /// Built-in theme name: `landing-dark` or `landing-light`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Number of generated job listings when no `data_file` is set. Default: 12
    pub job_count: usize,

    /// Number of generated announcements when no `data_file` is set. Default: 9
    pub announcement_count: usize,

    /// JSON fixture with `jobs` and `announcements` arrays.
    pub data_file: Option<String>,

    /// Delay before scrolling to a section after a nav click. Default: 200
    pub scroll_settle_ms: u64,

    /// Delay before switching routes. Default: 800
    pub navigate_settle_ms: u64,

    /// Log level filter (`trace`, `debug`, `info`, `warn`, `error`). Default: `"info"`
    pub log_level: Option<String>,

    /// Log file path. Default: `$XDG_STATE_HOME/jobboard-landing/jobboard-landing.log`
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let timing = NavTiming::default();
        Self {
            site_title: "JobBoard".to_string(),
            theme_name: None,
            theme_file: None,
            job_count: 12,
            announcement_count: 9,
            data_file: None,
            scroll_settle_ms: timing.scroll_settle_ms,
            navigate_settle_ms: timing.navigate_settle_ms,
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from `key=value` pairs.
    ///
    /// # Parsing Rules
    ///
    /// - Numeric keys fall back to their default when they fail to parse
    /// - `theme` is accepted as an alias for `theme_name`
    /// - Unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use jobboard_landing::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "landing-light".to_string());
    /// map.insert("job_count".to_string(), "5".to_string());
    /// map.insert("scroll_settle_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("landing-light"));
    /// assert_eq!(config.job_count, 5);
    /// assert_eq!(config.scroll_settle_ms, 200);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().with_overrides(map)
    }

    /// Loads configuration from a TOML file; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// [`LandingError::Io`] if the file cannot be read, [`LandingError::Config`]
    /// if it is not valid TOML for this struct.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| LandingError::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Applies `key=value` overrides on top of `self`.
    #[must_use]
    pub fn with_overrides(mut self, map: &BTreeMap<String, String>) -> Self {
        fn parsed<T: std::str::FromStr>(map: &BTreeMap<String, String>, key: &str, fallback: T) -> T {
            map.get(key).and_then(|s| s.trim().parse().ok()).unwrap_or(fallback)
        }

        if let Some(title) = map.get("site_title").filter(|t| !t.trim().is_empty()) {
            self.site_title = title.trim().to_string();
        }
        if let Some(theme) = map.get("theme_name").or_else(|| map.get("theme")) {
            self.theme_name = Some(theme.clone());
        }

        self.job_count = parsed(map, "job_count", self.job_count);
        self.announcement_count = parsed(map, "announcement_count", self.announcement_count);
        self.scroll_settle_ms = parsed(map, "scroll_settle_ms", self.scroll_settle_ms);
        self.navigate_settle_ms = parsed(map, "navigate_settle_ms", self.navigate_settle_ms);

        for (key, slot) in [
            ("theme_file", &mut self.theme_file),
            ("data_file", &mut self.data_file),
            ("log_level", &mut self.log_level),
            ("log_file", &mut self.log_file),
        ] {
            if let Some(value) = map.get(key) {
                *slot = Some(value.clone());
            }
        }

        self
    }
}

/// Builds the initial application state from configuration.
///
/// - Theme: `theme_file`, else `theme_name`, else the default. A theme that
///   fails to load is logged and replaced by the default.
/// - Listings: `data_file` if set, else generated mock data.
///
/// # Errors
///
/// Fails if `data_file` is set but cannot be read or parsed.
///
/// # Example
///
/// ```rust
/// use jobboard_landing::{initialize, Config};
///
/// let config = Config { job_count: 3, ..Default::default() };
/// let state = initialize(&config)?;
/// assert_eq!(state.jobs.len(), 3);
/// # Ok::<(), jobboard_landing::LandingError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize").entered();

    let theme = resolve_theme(config);

    let (jobs, announcements) = match &config.data_file {
        Some(data_file) => {
            let source = JsonSource::open(infrastructure::expand_tilde(data_file))?;
            (source.jobs()?, source.announcements()?)
        }
        None => {
            let source = MockSource::new(config.job_count, config.announcement_count);
            (source.jobs()?, source.announcements()?)
        }
    };

    tracing::debug!(
        jobs = jobs.len(),
        announcements = announcements.len(),
        theme = %theme.name,
        "initialized landing site"
    );

    let mut state = AppState::new(jobs, announcements, theme);
    state.site_title.clone_from(&config.site_title);
    state.timing = NavTiming {
        scroll_settle_ms: config.scroll_settle_ms,
        navigate_settle_ms: config.navigate_settle_ms,
    };
    Ok(state)
}

fn resolve_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_map_is_default() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn toml_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"site_title = \"Careers\"\nnavigate_settle_ms = 0\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.site_title, "Careers");
        assert_eq!(config.navigate_settle_ms, 0);
        assert_eq!(config.scroll_settle_ms, 200);
        assert_eq!(config.job_count, 12);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"job_count = \"many\"\n").unwrap();

        assert!(matches!(Config::from_file(file.path()), Err(LandingError::Config(_))));
        assert!(matches!(
            Config::from_file("/definitely/not/here.toml"),
            Err(LandingError::Io(_))
        ));
    }

    #[test]
    fn overrides_apply_on_top_of_file_config() {
        let base = Config {
            site_title: "Careers".to_string(),
            job_count: 4,
            ..Default::default()
        };
        let mut map = BTreeMap::new();
        map.insert("job_count".to_string(), "7".to_string());
        map.insert("log_level".to_string(), "trace".to_string());

        let config = base.with_overrides(&map);
        assert_eq!(config.site_title, "Careers");
        assert_eq!(config.job_count, 7);
        assert_eq!(config.log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn initialize_applies_title_timing_and_theme() {
        let config = Config {
            site_title: "Careers".to_string(),
            theme_name: Some("landing-light".to_string()),
            scroll_settle_ms: 0,
            job_count: 2,
            announcement_count: 1,
            ..Default::default()
        };

        let state = initialize(&config).unwrap();
        assert_eq!(state.site_title, "Careers");
        assert_eq!(state.timing.scroll_settle_ms, 0);
        assert_eq!(state.theme.name, "landing-light");
        assert_eq!((state.jobs.len(), state.announcements.len()), (2, 1));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).unwrap().theme.name, ui::DEFAULT_THEME);
    }

    #[test]
    fn missing_data_file_is_an_error() {
        let config = Config {
            data_file: Some("/definitely/not/here.json".to_string()),
            ..Default::default()
        };
        assert!(matches!(initialize(&config), Err(LandingError::Io(_))));
    }
}

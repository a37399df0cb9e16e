//! Terminal preview of the landing site.
//!
//! Builds the application state from configuration, replays a scripted set of
//! interactions given on the command line, and prints the resulting frame.
//!
//! # Usage
//!
//! ```text
//! jobboard-landing [config=path.toml] [setting=value ...] [input=value ...]
//! ```
//!
//! Settings are any [`Config`] key (`theme`, `job_count`, `data_file`, ...)
//! and override the TOML file. Inputs are replayed in this order:
//!
//! - `rows`, `cols`: frame size (default 30 x 100)
//! - `page`: `home`, `jobs`, `announcements`, or `contact`
//! - `viewport`, `scroll`: viewport height and scroll offset in pixels
//! - `category`: job type, or announcement category on the announcements page
//! - `search`: typed into the page's search box
//! - `name`, `email`, `subject`, `message`: typed into the contact form
//! - `hover`: job id under the pointer
//! - `drawer=open`: open the mobile drawer
//! - `nav`: index of a sidebar entry to click
//! - `submit=true`: submit the home search or the contact form
//! - `reject`: make the simulated forms backend reject with this reason
//! - `offline=true`: make the simulated forms backend unreachable
//!
//! # Action Execution
//!
//! Actions are executed immediately; settle delays are only logged.
//!
//! - `ScrollToSection` → `Scrolled` to the section's top offset
//! - `Navigate` → `RouteChanged`
//! - `SubmitContact` → [`SimulatedBackend`] → `SubmissionFinished` / `SubmissionFailed`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::Write;
use std::process::ExitCode;

use jobboard_landing::app::{InputFocus, Page};
use jobboard_landing::domain::{ContactField, JobType, ALL_CATEGORIES};
use jobboard_landing::forms::{FormsBackend, SimulatedBackend};
use jobboard_landing::{handle_event, Action, AppState, Config, Event, LandingError, Result};

const DEFAULT_ROWS: usize = 30;
const DEFAULT_COLS: usize = 100;

/// Keys consumed by the preview itself rather than [`Config`].
const INPUT_KEYS: [&str; 18] = [
    "config", "rows", "cols", "page", "viewport", "scroll", "category", "search", "name", "email", "subject",
    "message", "hover", "drawer", "nav", "submit", "reject", "offline",
];

/// Preview runtime wrapping the library state with the simulated forms backend.
struct Preview {
    app: AppState,
    backend: SimulatedBackend,
    /// Set once any handled event asked for a redraw.
    dirty: bool,
}

impl Preview {
    fn new(app: AppState, backend: SimulatedBackend) -> Self {
        Self {
            app,
            backend,
            dirty: true,
        }
    }

    /// Handles an event and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) {
        let _span = tracing::debug_span!("preview_dispatch", event_type = ?event).entered();

        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                self.dirty |= should_render;
                for action in actions {
                    self.execute_action(action);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
            }
        }
    }

    fn type_text(&mut self, focus: InputFocus, text: &str) {
        self.dispatch(&Event::Focus(focus));
        for c in text.chars() {
            self.dispatch(&Event::Char(c));
        }
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::ScrollToSection { id, delay_ms } => {
                tracing::debug!(section = %id, delay_ms, "scrolling to section");
                let Some(top) = self
                    .app
                    .sections
                    .iter()
                    .find(|section| section.id == id)
                    .map(|section| section.top_offset)
                else {
                    tracing::warn!(section = %id, "no such section");
                    return;
                };
                self.dispatch(&Event::Scrolled { offset: top });
            }
            Action::Navigate { path, delay_ms } => {
                tracing::debug!(path = %path, delay_ms, "navigating");
                match Page::from_path(&path) {
                    Some(page) => self.dispatch(&Event::RouteChanged(page)),
                    None => tracing::warn!(path = %path, "route outside the landing site"),
                }
            }
            Action::SubmitContact(request) => {
                tracing::debug!(email = %request.email, "submitting contact form");
                let event = match self.backend.submit(&request) {
                    Ok(response) => Event::SubmissionFinished(response),
                    Err(e) => Event::SubmissionFailed(e.to_string()),
                };
                self.dispatch(&event);
            }
        }
    }
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<BTreeMap<String, String>> {
    args.map(|arg| {
        arg.split_once('=')
            .map(|(key, value)| (key.trim().to_string(), value.to_string()))
            .ok_or_else(|| LandingError::Config(format!("expected key=value, got {arg:?}")))
    })
    .collect()
}

fn parse_page(value: &str) -> Result<Page> {
    let value = value.trim().trim_start_matches('/').to_ascii_lowercase();
    if value == "home" {
        return Ok(Page::Home);
    }
    Page::from_path(&format!("/{value}")).ok_or_else(|| LandingError::Config(format!("unknown page {value:?}")))
}

fn parse_number<T: std::str::FromStr>(args: &BTreeMap<String, String>, key: &str) -> Result<Option<T>> {
    args.get(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| LandingError::Config(format!("{key} must be a number, got {value:?}")))
        })
        .transpose()
}

fn load_config(args: &BTreeMap<String, String>) -> Result<Config> {
    let base = match args.get("config") {
        Some(path) => Config::from_file(jobboard_landing::infrastructure::expand_tilde(path))?,
        None => Config::default(),
    };

    let settings: BTreeMap<String, String> = args
        .iter()
        .filter(|(key, _)| !INPUT_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(base.with_overrides(&settings))
}

fn replay(preview: &mut Preview, args: &BTreeMap<String, String>) -> Result<()> {
    let page = args.get("page").map(|value| parse_page(value)).transpose()?;
    if let Some(page) = page {
        preview.dispatch(&Event::RouteChanged(page));
    }

    if let Some(viewport_height) = parse_number::<f64>(args, "viewport")? {
        preview.dispatch(&Event::Resized { viewport_height });
    }
    if let Some(offset) = parse_number::<f64>(args, "scroll")? {
        preview.dispatch(&Event::Scrolled { offset });
    }

    let on_announcements = preview.app.page == Page::Announcements;

    if let Some(category) = args.get("category") {
        if on_announcements {
            preview.dispatch(&Event::SelectAnnouncementCategory(category.clone()));
        } else if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            preview.dispatch(&Event::SelectJobType(None));
        } else {
            let job_type = JobType::ALL
                .into_iter()
                .find(|job_type| job_type.label().eq_ignore_ascii_case(category))
                .ok_or_else(|| LandingError::Config(format!("unknown job type {category:?}")))?;
            preview.dispatch(&Event::SelectJobType(Some(job_type)));
        }
    }

    if let Some(search) = args.get("search") {
        let focus = if on_announcements {
            InputFocus::AnnouncementSearch
        } else {
            InputFocus::JobSearch
        };
        preview.type_text(focus, search);
    }

    for field in ContactField::ALL {
        let key = field.label().to_ascii_lowercase();
        if let Some(value) = args.get(&key) {
            preview.type_text(InputFocus::Contact(field), value);
        }
    }

    if let Some(job_id) = parse_number::<u32>(args, "hover")? {
        preview.dispatch(&Event::HoverJob(Some(job_id)));
    }

    if args.get("drawer").is_some_and(|value| value == "open") {
        preview.dispatch(&Event::ToggleDrawer);
    }

    if let Some(index) = parse_number::<usize>(args, "nav")? {
        preview.dispatch(&Event::NavClicked(index));
    }

    if args.get("submit").is_some_and(|value| value == "true") {
        match preview.app.page {
            Page::Contact => preview.dispatch(&Event::SubmitContact),
            _ => preview.dispatch(&Event::SubmitSearch),
        }
    } else {
        preview.dispatch(&Event::Focus(InputFocus::None));
    }

    Ok(())
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(&args)?;
    jobboard_landing::observability::init_tracing(&config);

    let _span = tracing::debug_span!("preview").entered();
    tracing::debug!(config = ?config, "parsed configuration");

    let backend = match (args.get("reject"), args.get("offline")) {
        (Some(reason), _) => SimulatedBackend::rejecting(reason.clone()),
        (None, Some(value)) if value == "true" => SimulatedBackend::offline(),
        _ => SimulatedBackend::new(),
    };
    let mut preview = Preview::new(jobboard_landing::initialize(&config)?, backend);

    replay(&mut preview, &args)?;
    tracing::debug!(dirty = preview.dirty, page = ?preview.app.page, "replay complete");

    let rows = parse_number(&args, "rows")?.unwrap_or(DEFAULT_ROWS);
    let cols = parse_number(&args, "cols")?.unwrap_or(DEFAULT_COLS);
    let frame = jobboard_landing::ui::render(&preview.app, rows, cols);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\u{1b}[2J{frame}\u{1b}[{};1H", rows + 1)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "preview failed");
            eprintln!("jobboard-landing: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Path resolution for configuration, fixtures, and log files.
//!
//! User-supplied paths may start with `~`; logs default to the XDG state
//! directory (`$XDG_STATE_HOME/jobboard-landing`, else
//! `~/.local/state/jobboard-landing`).

use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "jobboard-landing";

/// Returns the directory for log files.
///
/// Falls back to the system temp directory when neither `XDG_STATE_HOME` nor
/// `HOME` is set.
#[must_use]
pub fn state_dir() -> PathBuf {
    state_dir_from(env::var_os("XDG_STATE_HOME"), env::var_os("HOME"))
}

fn state_dir_from(xdg_state: Option<std::ffi::OsString>, home: Option<std::ffi::OsString>) -> PathBuf {
    if let Some(dir) = xdg_state.filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir).join(APP_DIR);
    }
    if let Some(home) = home.filter(|home| !home.is_empty()) {
        return PathBuf::from(home).join(".local").join("state").join(APP_DIR);
    }
    env::temp_dir().join(APP_DIR)
}

/// Default log file location.
#[must_use]
pub fn default_log_file() -> PathBuf {
    state_dir().join("jobboard-landing.log")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or a tilde when `HOME` is unset, are returned as is.
///
/// # Examples
///
/// ```
/// use jobboard_landing::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/jobs.json"), std::path::PathBuf::from("/srv/jobs.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, env::var_os("HOME").as_deref().map(Path::new))
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

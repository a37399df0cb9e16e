//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global subscriber writing plain-text logs to a rotating file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.log_level`
/// 3. Default: `"info"`
///
/// # File Location
///
/// `config.log_file` if set, else
/// [`default_log_file`](crate::infrastructure::default_log_file).
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use jobboard_landing::observability::init_tracing;
/// use jobboard_landing::Config;
///
/// let dir = std::env::temp_dir().join("jobboard-landing-init-doc");
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     log_file: Some(dir.join("preview.log").display().to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.log_level.clone().unwrap_or_else(|| "info".to_string());

    let log_file = config.log_file.as_deref().map_or_else(
        crate::infrastructure::default_log_file,
        crate::infrastructure::expand_tilde,
    );

    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file));

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

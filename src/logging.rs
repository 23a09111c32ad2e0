//! Structured logging via `tracing`.
//!
//! stdout is the game screen, so logs go to `dino_runner.log` in the given
//! directory.  `RUST_LOG` takes precedence over the configured level.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "dino_runner.log";

/// Install the global subscriber.  Returns `false` (and logs nothing) when
/// the log file cannot be created.
pub fn init_logging(log_dir: &Path, level: &str) -> bool {
    let filter_str = if level.is_empty() { "info" } else { level };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let Ok(()) = std::fs::create_dir_all(log_dir) else {
        return false;
    };
    let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE)) else {
        return false;
    };

    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_ok()
}

/// Filter used when nothing is configured.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

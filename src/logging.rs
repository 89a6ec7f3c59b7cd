//! File-based logging
//!
//! The TUI owns the terminal, so diagnostics go to a log file under
//! ~/.modlist-tui/logs/ instead of stderr. The filter is taken from the
//! MODLIST_TUI_LOG environment variable, defaulting to `info`.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MODLIST_TUI_LOG";

/// Returns the log directory path (~/.modlist-tui/logs/)
fn log_directory() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".modlist-tui").join("logs"))
}

/// Set up the file-backed subscriber. Best effort: when the log directory
/// cannot be created the app runs without a diagnostic sink rather than
/// failing startup.
pub fn init() {
    let Some(dir) = log_directory() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let file_name = format!("modlist-tui-{}.log", chrono::Local::now().format("%Y%m%d"));
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(file_name))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}

//! Tracing setup for the ruler binary.
//!
//! The TUI owns the terminal, so log output goes to
//! `<cache dir>/ruler/ruler.log`. Logging is off unless `RULER_LOG` holds an
//! `EnvFilter` directive such as `ruler=debug`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "RULER_LOG";

/// Where log output is written.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("ruler").join("ruler.log"))
}

/// Parse filter directives.
pub fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .wrap_err_with(|| format!("Invalid {} directives: {}", LOG_ENV_VAR, directives))
}

/// Install the file subscriber when `RULER_LOG` is set.
///
/// Returns the log file path, or `None` when logging stays off.
pub fn init_logging() -> Result<Option<PathBuf>> {
    let Ok(directives) = std::env::var(LOG_ENV_VAR) else {
        return Ok(None);
    };
    let filter = build_filter(&directives)?;

    let path = log_file_path().ok_or_else(|| eyre!("Could not determine the cache directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter("ruler=debug").is_ok());
        assert!(build_filter("info,ruler::widgets=trace").is_ok());
    }

    #[test]
    fn test_log_file_name() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("ruler/ruler.log"));
        }
    }
}

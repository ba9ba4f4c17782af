//! `--write-config`: persist the effective configuration.

use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use super::args::RunOptions;
use crate::config::AppConfig;

/// Merge the overrides into the existing config file (or the defaults) and
/// write it back. Returns the path written.
pub fn handle_write_config(options: &RunOptions) -> Result<PathBuf> {
    let path = match &options.config_path {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };

    let mut config = if path.exists() {
        AppConfig::load_from(&path)?
    } else {
        AppConfig::default()
    };
    options
        .apply(&mut config)
        .wrap_err("Invalid command-line override")?;
    config.validate()?;
    config.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_new_file_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let options = RunOptions {
            config_path: Some(path.clone()),
            max: Some(50.0),
            value: Some(25.0),
            ..RunOptions::default()
        };

        let written = handle_write_config(&options).unwrap();
        assert_eq!(written, path);

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ruler.max_value(), 50.0);
        assert_eq!(config.initial_value, Some(25.0));
    }

    #[test]
    fn test_rejects_value_outside_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let options = RunOptions {
            config_path: Some(path.clone()),
            value: Some(900.0),
            ..RunOptions::default()
        };
        assert!(handle_write_config(&options).is_err());
        assert!(!path.exists());
    }
}

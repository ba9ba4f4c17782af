//! Configuration file errors.

use std::path::PathBuf;

use thiserror::Error;

use super::argument::ArgumentError;

/// Errors raised while loading or saving the host configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ArgumentError),

    #[error("Invalid config setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("Could not determine the user config directory")]
    NoConfigDirectory,
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "E_CFG_READ",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
            ConfigError::Write { .. } => "E_CFG_WRITE",
            ConfigError::Serialize(_) => "E_CFG_SERIALIZE",
            ConfigError::Invalid(_) => "E_CFG_INVALID",
            ConfigError::InvalidSetting { .. } => "E_CFG_SETTING",
            ConfigError::NoConfigDirectory => "E_CFG_NO_DIR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_wraps_argument_error() {
        let err: ConfigError = ArgumentError::InvalidInterval { value: 0.0 }.into();
        assert_eq!(err.error_code(), "E_CFG_INVALID");
        assert!(err.to_string().contains("interval"));
    }

    #[test]
    fn test_invalid_setting_names_field() {
        let err = ConfigError::InvalidSetting {
            field: "row_height",
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.error_code(), "E_CFG_SETTING");
        assert!(err.to_string().contains("row_height"));
    }

    #[test]
    fn test_parse_error_mentions_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("/tmp/ruler.json"),
            source,
        };
        assert_eq!(err.error_code(), "E_CFG_PARSE");
        assert!(err.to_string().contains("ruler.json"));
    }
}

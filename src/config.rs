//! Host configuration file.
//!
//! The ruler binary reads an optional JSON file holding the widget geometry,
//! style and gesture thresholds plus a few host settings. Every field may be
//! omitted:
//!
//! ```json
//! {
//!   "ruler": { "min_value": 0, "max_value": 200, "tick_spacing": 5.0 },
//!   "style": { "highlight_color": "red" },
//!   "row_height": 5.0,
//!   "initial_value": 42
//! }
//! ```
//!
//! The default location is `<config dir>/ruler/config.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::RulerConfig;
use crate::error::{ArgumentError, ConfigError};
use crate::input::GestureConfig;
use crate::widgets::RulerStyle;

const CONFIG_DIR_NAME: &str = "ruler";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default pixel height of one terminal row.
pub const DEFAULT_ROW_HEIGHT: f32 = 5.0;

/// Default animation frame interval.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Everything the host binary can be configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ruler: RulerConfig,
    pub style: RulerStyle,
    pub gesture: GestureConfig,
    /// Pixels per terminal row.
    pub row_height: f32,
    pub frame_interval_ms: u64,
    /// Value selected at startup; tick 0 when absent.
    pub initial_value: Option<f64>,
    /// Custom labels replacing the formatted values.
    pub labels: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ruler: RulerConfig::default(),
            style: RulerStyle::default(),
            gesture: GestureConfig::default(),
            row_height: DEFAULT_ROW_HEIGHT,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            initial_value: None,
            labels: Vec::new(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/ruler/config.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDirectory)?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config.
    ///
    /// An explicit path must exist and be valid. Without one, the default
    /// location is tried: a missing file gives the defaults and a broken one
    /// is logged and replaced by the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        match Self::load_from(&path) {
            Ok(config) => Ok(config),
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    code = e.error_code(),
                    error = %e,
                    "ignoring invalid config file"
                );
                Ok(Self::default())
            }
        }
    }

    /// Read, parse and validate the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ruler.validate()?;

        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(ConfigError::InvalidSetting {
                field: "row_height",
                reason: format!("must be a positive number, got {}", self.row_height),
            });
        }
        self.validate_gesture()?;
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidSetting {
                field: "frame_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(value) = self.initial_value {
            if !self.ruler.contains_value(value) {
                return Err(ArgumentError::SelectedValueOutOfRange {
                    value,
                    min: self.ruler.min_value(),
                    max: self.ruler.max_value(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn validate_gesture(&self) -> Result<(), ConfigError> {
        let gesture = &self.gesture;
        let non_negative = |field: &'static str, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidSetting {
                    field,
                    reason: format!("must be a non-negative number, got {}", value),
                })
            }
        };
        non_negative("gesture.touch_slop", gesture.touch_slop)?;
        non_negative("gesture.min_fling_velocity", gesture.min_fling_velocity)?;
        non_negative("gesture.max_fling_velocity", gesture.max_fling_velocity)?;
        if gesture.max_fling_velocity < gesture.min_fling_velocity {
            return Err(ConfigError::InvalidSetting {
                field: "gesture.max_fling_velocity",
                reason: format!(
                    "must not be below min_fling_velocity ({}), got {}",
                    gesture.min_fling_velocity, gesture.max_fling_velocity
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.row_height, 5.0);
        assert_eq!(config.frame_interval_ms, 16);
        assert_eq!(config.ruler.max_value(), 200.0);
        assert_eq!(config.gesture.touch_slop, 8.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_rejects_bad_row_height() {
        let config = AppConfig {
            row_height: 0.0,
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "E_CFG_SETTING");
    }

    #[test]
    fn test_rejects_bad_gesture_thresholds() {
        let cases = [
            r#"{"gesture": {"max_fling_velocity": -1.0}}"#,
            r#"{"gesture": {"min_fling_velocity": 9000.0}}"#,
            r#"{"gesture": {"touch_slop": -2.0}}"#,
        ];
        for json in cases {
            let config: AppConfig = serde_json::from_str(json).unwrap();
            let err = config.validate().unwrap_err();
            assert_eq!(err.error_code(), "E_CFG_SETTING", "{}", json);
            assert!(err.to_string().contains("gesture."), "{}", json);
        }

        let mut config = AppConfig::default();
        config.gesture.max_fling_velocity = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_initial_value_outside_range() {
        let config = AppConfig {
            initial_value: Some(500.0),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "E_CFG_INVALID");
    }
}

//! Unified error type for the ruler crate.

use thiserror::Error;

use super::argument::ArgumentError;
use super::config::ConfigError;

/// Any error the ruler library can return.
#[derive(Debug, Error)]
pub enum RulerError {
    /// Invalid argument at a widget setter.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// Configuration file problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal or filesystem I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RulerError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RulerError::Argument(e) => e.error_code(),
            RulerError::Config(e) => e.error_code(),
            RulerError::Io(_) => "E_IO",
        }
    }

    /// True when the error is an argument rejected at the call boundary.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RulerError::Argument(_) | RulerError::Config(ConfigError::Invalid(_))
        )
    }
}

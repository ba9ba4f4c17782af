//! Result type alias for ruler operations.

use super::ruler_error::RulerError;

/// Type alias for Results using RulerError.
pub type RulerResult<T> = Result<T, RulerError>;

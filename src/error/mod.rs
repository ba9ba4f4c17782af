//! Error handling for the ruler crate.
//!
//! - [`ArgumentError`]: values rejected at the widget's call boundary
//!   (decimal places outside `[0, 3]`, selected value outside `[min, max]`,
//!   degenerate bounds, interval or spacing)
//! - [`ConfigError`]: problems reading or writing the host config file
//! - [`RulerError`]: the unified error, with [`RulerResult`] as its alias
//!
//! Everything else in the widget is total: out-of-range indices are clamped
//! rather than reported.

mod argument;
mod config;
mod result;
mod ruler_error;

pub use argument::ArgumentError;
pub use config::ConfigError;
pub use result::RulerResult;
pub use ruler_error::RulerError;

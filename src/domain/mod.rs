//! Framework-independent ruler model.
//!
//! ## Domain Objects
//!
//! - [`RulerConfig`] - Numeric parameters and the geometry derived from them
//! - [`ScrollController`] - Scroll offset, drag damping, fling and settle
//! - [`Scroller`] - Deceleration model behind every animation
//! - [`SelectionState`] - Tick under the viewport centre
//! - [`format_value`] - Fixed-decimal, half-up label formatting

pub mod format;
pub mod geometry;
pub mod scroll;
pub mod scroller;
pub mod selection;

pub use format::{format_value, MAX_DECIMAL_PLACES};
pub use geometry::RulerConfig;
pub use scroll::{ScrollController, ScrollState, StepOutcome};
pub use scroller::Scroller;
pub use selection::{index_for_offset, offset_for_index, SelectionChange, SelectionState};

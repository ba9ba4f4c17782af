//! Pointer input handling for the ruler.
//!
//! Raw pointer events flow through this module before they reach the widget:
//!
//! ```text
//! MouseEvent -> MouseMapper -> GestureEvent -> GestureDetector -> Gesture
//!                                                   |
//!                                             VelocityTracker
//! ```
//!
//! # Modules
//!
//! - [`gesture`] - [`GestureDetector`] classifying taps, drags and flings
//! - [`velocity`] - [`VelocityTracker`] estimating release velocity
//! - [`mouse`] - [`MouseMapper`] translating terminal mouse events

pub mod gesture;
pub mod mouse;
pub mod velocity;

pub use gesture::{Gesture, GestureConfig, GestureDetector, GestureEvent};
pub use mouse::{MouseMapper, PointerInput};
pub use velocity::VelocityTracker;

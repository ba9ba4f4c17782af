//! Ruler - a scrollable, fling-capable ruler selector for the terminal.
//!
//! The widget lives in [`widgets::ruler`]; [`domain`] holds its geometry,
//! selection and scroll physics and [`input`] classifies pointer gestures.
//! The remaining modules make up the demo host binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;
pub mod widgets;

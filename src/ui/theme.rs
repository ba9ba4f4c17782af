//! Color theme of the host screen.

use ratatui::style::Color;

/// Panel borders.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Panel borders while a gesture owns the pointer.
pub const COLOR_BORDER_ACTIVE: Color = Color::Gray;

/// Titles and the value readout.
pub const COLOR_ACCENT: Color = Color::White;

/// Readout right after a tap.
pub const COLOR_FLASH: Color = Color::LightRed;

/// Secondary text (index, hints).
pub const COLOR_DIM: Color = Color::DarkGray;

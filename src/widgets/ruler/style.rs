//! Visual parameters of the ruler.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Default label text size, in pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 14.0;

/// Colors and text size of a ruler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerStyle {
    /// Selected tick, its labels and the centre indicator.
    pub highlight_color: Color,
    pub text_color: Color,
    pub line_color: Color,
    /// Label text size; also drives the preferred widget height.
    pub text_size: f32,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            highlight_color: Color::Red,
            text_color: Color::White,
            line_color: Color::White,
            text_size: DEFAULT_TEXT_SIZE,
        }
    }
}

impl RulerStyle {
    pub fn line(&self) -> Style {
        Style::default().fg(self.line_color)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_color)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_color)
            .add_modifier(Modifier::BOLD)
    }
}

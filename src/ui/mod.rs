//! Host screen rendering.
//!
//! ```text
//! ┌ Ruler ────────────┐┌ Value ─────┐
//! │ ▶ ───  ──────  50 ││ 50         │
//! │   ───  ──        ││ index 50   │
//! └───────────────────┘└────────────┘
//!  ↑/↓ step  PgUp/PgDn ×10  Home/End  q quit
//! ```

pub mod theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::widgets::RulerWidget;
use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_ACTIVE, COLOR_DIM, COLOR_FLASH};

/// Width of the value panel.
const READOUT_WIDTH: u16 = 18;

const HELP: &str = " ↑/↓ step  PgUp/PgDn ×10  Home/End  drag/click/wheel  q quit";

/// Draw the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [body, help] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)])
        .areas(frame.area());
    let [ruler_area, readout_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(READOUT_WIDTH)]).areas(body);

    render_ruler(frame, app, ruler_area);
    render_readout(frame, app, readout_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(HELP, Style::default().fg(COLOR_DIM)))),
        help,
    );
}

fn panel(title: &str, active: bool) -> Block<'_> {
    let border = if active { COLOR_BORDER_ACTIVE } else { COLOR_BORDER };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_ACCENT),
        ))
}

fn render_ruler(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = panel("Ruler", app.gesture_active);
    app.set_ruler_area(block.inner(area));
    let widget = RulerWidget::new(app.row_height).block(block);
    frame.render_stateful_widget(widget, area, &mut app.ruler);
}

fn render_readout(frame: &mut Frame, app: &App, area: Rect) {
    let readout = app.readout();
    let value_color = if app.click_flash > 0 {
        COLOR_FLASH
    } else {
        COLOR_ACCENT
    };
    let lines = vec![
        Line::from(Span::styled(
            readout.text,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("index {}", readout.index),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            format!(
                "{} .. {}",
                app.ruler.config().format(app.ruler.min_value()),
                app.ruler.config().format(app.ruler.max_value())
            ),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Value", false)), area);
}

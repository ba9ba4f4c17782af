//! Ruler rendering.
//!
//! The pure helpers here decide *what* is drawn (which indices, how long a
//! tick is, which label text) and [`RulerWidget`] decides *where*, mapping
//! pixel positions onto terminal rows.
//!
//! Column layout inside the widget area:
//!
//! ```text
//!  ▶ ───  ──────  10   10
//!  ^ ^    ^       ^    ^
//!  | |    |       |    secondary label (every 10th tick)
//!  | |    |       primary label (every 5th tick)
//!  | |    tick column (long / medium / short)
//!  | guide column (constant length)
//!  centre indicator
//! ```

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::RulerView;
use crate::domain::RulerConfig;

const INDICATOR: &str = "▶";
const THIN_LINE: &str = "─";
const THICK_LINE: &str = "━";

/// Line widths at or above this are drawn with the heavy glyph.
const THICK_LINE_WIDTH: f32 = 2.0;

const GUIDE_X: u16 = 2;
const GUIDE_LEN: u16 = 3;
const TICK_X: u16 = 6;
const LABEL_X: u16 = 13;
const LABEL_GAP: u16 = 2;

/// Size of the area the ruler is laid out in, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport for a terminal area. Odd row counts are rounded down to even
    /// so that the centre falls exactly on a row.
    pub fn for_cells(columns: u16, rows: u16, row_height: f32) -> Self {
        let rows = rows - rows % 2;
        Self {
            width: columns as f32,
            height: rows as f32 * row_height,
        }
    }

    pub fn half_extent(&self) -> f32 {
        self.height / 2.0
    }
}

/// Number of ticks between the viewport centre and its edge, rounded up.
pub fn viewport_tick_radius(half_extent: f32, tick_spacing: f32) -> i64 {
    let radius = (half_extent / tick_spacing).ceil();
    if radius.is_finite() && radius > 0.0 {
        radius as i64
    } else {
        0
    }
}

/// Half-open range of tick indices worth drawing. May extend below 0 and
/// past the last tick; those indices are painted hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: i64,
    pub end: i64,
}

impl VisibleRange {
    pub fn contains(&self, index: i64) -> bool {
        index >= self.start && index < self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn indices(&self) -> Range<i64> {
        self.start..self.end
    }
}

/// Indices to draw around `selected`.
///
/// The window is `selected ± 2 * radius`, clamped to
/// `[-2 * radius, tick_count + 2 * radius)`. When the selection sits on the
/// first or last tick the window grows by one more radius on that side so
/// the edge stays covered while overscrolled.
pub fn compute_visible_range(selected: usize, tick_count: usize, radius: i64) -> VisibleRange {
    let selected = selected as i64;
    let count = tick_count as i64;
    let mut start = (selected - 2 * radius).max(-2 * radius);
    let mut end = (selected + 2 * radius).min(count + 2 * radius);
    if selected == 0 {
        start -= radius;
    }
    if selected == count - 1 {
        end += radius;
    }
    VisibleRange { start, end }
}

/// Length class of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLength {
    /// Every 10th tick.
    Long,
    /// Every 5th tick that is not a 10th.
    Medium,
    Short,
}

impl TickLength {
    pub fn for_index(index: i64) -> Self {
        if index.rem_euclid(10) == 0 {
            TickLength::Long
        } else if index.rem_euclid(5) == 0 {
            TickLength::Medium
        } else {
            TickLength::Short
        }
    }

    /// Length in terminal cells.
    pub fn cells(self) -> u16 {
        match self {
            TickLength::Long => 6,
            TickLength::Medium => 4,
            TickLength::Short => 2,
        }
    }
}

/// Whether tick `index` is painted with the line color rather than hidden.
pub fn is_tick_visible(config: &RulerConfig, index: i64) -> bool {
    index >= 0 && index <= config.display_cap_index() as i64
}

/// Label of the primary column: every 5th tick, custom entry `index / 2`.
pub fn primary_label(config: &RulerConfig, labels: &[String], index: i64) -> Option<String> {
    label_for(config, labels, index, 5, 2)
}

/// Label of the secondary column: every 10th tick, custom entry `index / 10`.
pub fn secondary_label(config: &RulerConfig, labels: &[String], index: i64) -> Option<String> {
    label_for(config, labels, index, 10, 10)
}

fn label_for(
    config: &RulerConfig,
    labels: &[String],
    index: i64,
    every: i64,
    divisor: i64,
) -> Option<String> {
    if index < 0 || index >= config.tick_count() as i64 || index % every != 0 {
        return None;
    }
    if labels.is_empty() {
        return Some(config.format(config.value_at(index as usize)));
    }
    let entry = (index / divisor) as usize;
    Some(labels.get(entry).cloned().unwrap_or_default())
}

/// Widest label either column can show.
fn label_width(config: &RulerConfig, labels: &[String]) -> u16 {
    let width = if labels.is_empty() {
        let min = config.format(config.min_value());
        let max = config.format(config.value_at(config.last_index()));
        min.width().max(max.width())
    } else {
        labels.iter().map(|l| l.width()).max().unwrap_or(0)
    };
    width.min(u16::MAX as usize) as u16
}

/// Stateful ratatui widget drawing a [`RulerView`].
///
/// Rendering sizes the view to the area: the first render (and any resize)
/// re-centres the selection.
#[derive(Debug, Clone, Default)]
pub struct RulerWidget<'a> {
    block: Option<Block<'a>>,
    row_height: f32,
}

impl<'a> RulerWidget<'a> {
    /// `row_height` is the pixel height of one terminal row.
    pub fn new(row_height: f32) -> Self {
        Self {
            block: None,
            row_height,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for RulerWidget<'_> {
    type State = RulerView;

    fn render(self, area: Rect, buf: &mut Buffer, view: &mut RulerView) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.is_empty() || self.row_height <= 0.0 {
            return;
        }

        view.set_viewport(Viewport::for_cells(inner.width, inner.height, self.row_height));
        render_ticks(view, inner, buf, self.row_height);
    }
}

fn render_ticks(view: &RulerView, area: Rect, buf: &mut Buffer, row_height: f32) {
    let config = view.config();
    let style = view.style();
    let labels = view.text_labels();
    let offset = view.offset();
    let selected = view.selected_index() as i64;

    let glyph = if config.line_width() >= THICK_LINE_WIDTH {
        THICK_LINE
    } else {
        THIN_LINE
    };
    let secondary_x = LABEL_X + label_width(config, labels) + LABEL_GAP;

    for index in view.visible_range().indices() {
        let y = index as f32 * config.tick_spacing() - offset;
        let row = (y / row_height).round();
        if row < 0.0 || row >= area.height as f32 {
            continue;
        }
        let row = area.y + row as u16;
        let is_selected = index == selected;

        if is_tick_visible(config, index) {
            let line_style = if is_selected {
                style.highlight()
            } else {
                style.line()
            };
            draw_line(buf, area, GUIDE_X, row, GUIDE_LEN, glyph, line_style);
            let len = TickLength::for_index(index).cells();
            draw_line(buf, area, TICK_X, row, len, glyph, line_style);
        }

        let text_style = if is_selected {
            style.highlight()
        } else {
            style.text()
        };
        if let Some(label) = primary_label(config, labels, index) {
            draw_text(buf, area, LABEL_X, row, &label, text_style);
        }
        if let Some(label) = secondary_label(config, labels, index) {
            draw_text(buf, area, secondary_x, row, &label, text_style);
        }
    }

    let centre = (view.half_extent() / row_height).round();
    if centre >= 0.0 && centre < area.height as f32 {
        draw_text(buf, area, 0, area.y + centre as u16, INDICATOR, style.highlight());
    }
}

fn draw_line(buf: &mut Buffer, area: Rect, x: u16, row: u16, len: u16, glyph: &str, style: Style) {
    for dx in 0..len {
        let column = x.saturating_add(dx);
        if column >= area.width {
            break;
        }
        buf.set_string(area.x + column, row, glyph, style);
    }
}

fn draw_text(buf: &mut Buffer, area: Rect, x: u16, row: u16, text: &str, style: Style) {
    if x >= area.width {
        return;
    }
    let max_width = (area.width - x) as usize;
    buf.set_stringn(area.x + x, row, text, max_width, style);
}

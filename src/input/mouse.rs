//! Terminal mouse translation.
//!
//! Converts crossterm mouse events into pointer [`GestureEvent`]s in the
//! ruler's pixel space. A terminal row is `row_height` pixels tall and row
//! `r` of the area maps to pixel `r * row_height`, the same sampling the
//! ruler renderer uses when it places ticks on rows.

use std::time::Duration;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::gesture::GestureEvent;

/// Pointer input understood by the ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Gesture(GestureEvent),
    /// Wheel notches; positive scrolls towards larger values.
    Wheel { notches: i32 },
}

/// Stateful mouse-to-pointer mapper for one widget area.
#[derive(Debug, Clone)]
pub struct MouseMapper {
    area: Rect,
    row_height: f32,
    pressed: bool,
}

impl MouseMapper {
    pub fn new(area: Rect, row_height: f32) -> Self {
        Self {
            area,
            row_height,
            pressed: false,
        }
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Whether the left button went down inside the area and is still held.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Pixel y of terminal `row`, relative to the area top.
    pub fn row_to_y(&self, row: u16) -> f32 {
        (row as f32 - self.area.y as f32) * self.row_height
    }

    /// Translate one mouse event captured at `time`.
    ///
    /// Presses and wheel events outside the area are ignored; drags and
    /// releases are followed anywhere once a press started inside.
    pub fn map(&mut self, event: &MouseEvent, time: Duration) -> Option<PointerInput> {
        let inside = self.contains(event.column, event.row);
        let y = self.row_to_y(event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.pressed = true;
                Some(PointerInput::Gesture(GestureEvent::Down { y, time }))
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed => {
                Some(PointerInput::Gesture(GestureEvent::Move { y, time }))
            }
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                self.pressed = false;
                Some(PointerInput::Gesture(GestureEvent::Up { y, time }))
            }
            MouseEventKind::ScrollDown if inside && !self.pressed => {
                Some(PointerInput::Wheel { notches: 1 })
            }
            MouseEventKind::ScrollUp if inside && !self.pressed => {
                Some(PointerInput::Wheel { notches: -1 })
            }
            _ => None,
        }
    }

    /// Abort a press in progress, e.g. when the terminal loses focus.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        if self.pressed {
            self.pressed = false;
            Some(GestureEvent::Cancel)
        } else {
            None
        }
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn mapper() -> MouseMapper {
        MouseMapper::new(Rect::new(2, 1, 20, 10), 4.0)
    }

    #[test]
    fn test_row_to_y_is_relative_to_area() {
        let mapper = mapper();
        assert_eq!(mapper.row_height(), 4.0);
        assert_eq!(mapper.row_to_y(1), 0.0);
        assert_eq!(mapper.row_to_y(3), 8.0);
    }

    #[test]
    fn test_press_drag_release() {
        let mut mapper = mapper();
        let t = Duration::from_millis(5);
        let down = mapper.map(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 6), t);
        assert_eq!(
            down,
            Some(PointerInput::Gesture(GestureEvent::Down { y: 20.0, time: t }))
        );
        assert!(mapper.is_pressed());

        // Drags keep tracking outside the area.
        let drag = mapper.map(&mouse(MouseEventKind::Drag(MouseButton::Left), 40, 0), t);
        assert_eq!(
            drag,
            Some(PointerInput::Gesture(GestureEvent::Move { y: -4.0, time: t }))
        );

        let up = mapper.map(&mouse(MouseEventKind::Up(MouseButton::Left), 40, 0), t);
        assert!(matches!(
            up,
            Some(PointerInput::Gesture(GestureEvent::Up { .. }))
        ));
        assert!(!mapper.is_pressed());
    }

    #[test]
    fn test_press_outside_area_ignored() {
        let mut mapper = mapper();
        let t = Duration::ZERO;
        assert_eq!(
            mapper.map(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), t),
            None
        );
        assert_eq!(
            mapper.map(&mouse(MouseEventKind::Up(MouseButton::Left), 5, 5), t),
            None
        );
    }

    #[test]
    fn test_right_button_ignored() {
        let mut mapper = mapper();
        assert_eq!(
            mapper.map(
                &mouse(MouseEventKind::Down(MouseButton::Right), 5, 5),
                Duration::ZERO
            ),
            None
        );
    }

    #[test]
    fn test_wheel() {
        let mut mapper = mapper();
        let t = Duration::ZERO;
        assert_eq!(
            mapper.map(&mouse(MouseEventKind::ScrollDown, 5, 5), t),
            Some(PointerInput::Wheel { notches: 1 })
        );
        assert_eq!(
            mapper.map(&mouse(MouseEventKind::ScrollUp, 5, 5), t),
            Some(PointerInput::Wheel { notches: -1 })
        );
        assert_eq!(mapper.map(&mouse(MouseEventKind::ScrollUp, 50, 5), t), None);
    }

    #[test]
    fn test_cancel_only_when_pressed() {
        let mut mapper = mapper();
        assert_eq!(mapper.cancel(), None);
        mapper.map(
            &mouse(MouseEventKind::Down(MouseButton::Left), 5, 5),
            Duration::ZERO,
        );
        assert_eq!(mapper.cancel(), Some(GestureEvent::Cancel));
        assert!(!mapper.is_pressed());
    }
}

//! Terminal event handling for the App.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use tracing::debug;

use super::App;
use crate::input::{GestureEvent, PointerInput};

/// Ticks moved by PageUp / PageDown.
const PAGE_TICKS: i64 = 10;

impl App {
    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.handle_focus_lost(),
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let requests = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => self.ruler.step_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.ruler.step_by(1),
            KeyCode::PageUp => self.ruler.step_by(-PAGE_TICKS),
            KeyCode::PageDown => self.ruler.step_by(PAGE_TICKS),
            KeyCode::Home => self.ruler.animate_to_index(0),
            KeyCode::End => {
                let last = self.ruler.config().last_index();
                self.ruler.animate_to_index(last)
            }
            _ => return,
        };
        self.apply(requests);
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let Some(input) = self.mouse.map(&event, self.elapsed()) else {
            return;
        };
        let requests = match input {
            PointerInput::Gesture(gesture) => self.ruler.handle_gesture_event(gesture),
            PointerInput::Wheel { notches } => {
                let distance = notches as f32 * self.ruler.config().tick_spacing();
                debug!(notches, distance, "wheel");
                self.ruler.scroll_by(distance)
            }
        };
        self.apply(requests);
    }

    /// A drag in progress is cancelled when the terminal loses focus.
    pub fn handle_focus_lost(&mut self) {
        if self.mouse.cancel().is_some() {
            let requests = self.ruler.handle_gesture_event(GestureEvent::Cancel);
            self.apply(requests);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new(&AppConfig::default()).unwrap();
        app.ruler.set_selected_index(50);
        app
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn settle(app: &mut App) {
        for _ in 0..1_000 {
            if !app.ruler.is_animating() {
                break;
            }
            app.on_frame(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_arrow_keys_step() {
        let mut app = app();
        app.handle_event(press(KeyCode::Down));
        assert_eq!(app.ruler.selected_index(), 51);
        assert_eq!(app.readout().index, 51);
        app.handle_event(press(KeyCode::Up));
        app.handle_event(press(KeyCode::Up));
        assert_eq!(app.ruler.selected_index(), 49);
        settle(&mut app);
        assert_eq!(app.ruler.offset(), app.ruler.snap_offset());
    }

    #[test]
    fn test_page_and_home_end() {
        let mut app = app();
        app.handle_event(press(KeyCode::PageDown));
        assert_eq!(app.ruler.selected_index(), 60);
        app.handle_event(press(KeyCode::End));
        assert_eq!(app.ruler.selected_index(), 200);
        app.handle_event(press(KeyCode::Home));
        assert_eq!(app.ruler.selected_index(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_wheel_moves_one_tick() {
        let mut app = app();
        app.set_ruler_area(Rect::new(0, 0, 30, 20));
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.ruler.selected_index(), 51);
    }

    #[test]
    fn test_focus_lost_cancels_drag() {
        let mut app = app();
        app.set_ruler_area(Rect::new(0, 0, 30, 20));
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 10,
            modifiers: KeyModifiers::NONE,
        }));
        assert!(app.gesture_active);
        app.handle_event(Event::FocusLost);
        assert!(!app.mouse.is_pressed());
        assert!(!app.gesture_active);
    }
}

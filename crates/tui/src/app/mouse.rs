//! Mouse input handling.
//!
//! Pointer movement drives the hover-card machines through the per-frame
//! hit-test registry; clicks select quick-start steps; the scroll wheel
//! moves the step selection while the quick-start section is open.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::core::App;
use super::state::{HoverId, Section};

impl App {
    /// Apply a raw mouse event.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.set_hovered(self.hit_test(event.column, event.row));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(HoverId::Step(index)) = self.hit_test(event.column, event.row) {
                    self.step_list.select(index);
                }
            }
            MouseEventKind::ScrollUp if self.current_section == Section::QuickStart => {
                self.step_list.select_prev();
            }
            MouseEventKind::ScrollDown if self.current_section == Section::QuickStart => {
                self.step_list.select_next();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::ui::components::HoverPhase;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn test_app() -> App {
        let mut app = App::new(AppOptions {
            hover_duration: Duration::ZERO,
            step_duration: Duration::ZERO,
            ..Default::default()
        });
        app.current_section = Section::QuickStart;
        app.register_hover_target(Rect::new(0, 5, 20, 2), HoverId::Step(0));
        app.register_hover_target(Rect::new(0, 7, 20, 2), HoverId::Step(1));
        app
    }

    #[test]
    fn test_move_over_trigger_opens_card() {
        let mut app = test_app();
        app.handle_mouse(mouse(MouseEventKind::Moved, 3, 5));
        assert_eq!(app.hovered(), Some(HoverId::Step(0)));
        let state = app.hover_state(HoverId::Step(0)).unwrap();
        assert_eq!(state.phase(), HoverPhase::Entering);
    }

    #[test]
    fn test_move_off_trigger_starts_exit() {
        let mut app = test_app();
        app.handle_mouse(mouse(MouseEventKind::Moved, 3, 5));
        for _ in 0..4 {
            app.on_tick();
        }
        app.handle_mouse(mouse(MouseEventKind::Moved, 50, 20));
        assert_eq!(app.hovered(), None);
        let state = app.hover_state(HoverId::Step(0)).unwrap();
        assert_eq!(state.phase(), HoverPhase::Exiting);
    }

    #[test]
    fn test_click_selects_step() {
        let mut app = test_app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7));
        assert_eq!(app.step_list.selected(), 1);
    }

    #[test]
    fn test_click_outside_changes_nothing() {
        let mut app = test_app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 20));
        assert_eq!(app.step_list.selected(), 0);
    }

    #[test]
    fn test_scroll_moves_selection_in_quick_start() {
        let mut app = test_app();
        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(app.step_list.selected(), 1);
        app.handle_mouse(mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(app.step_list.selected(), 0);
    }

    #[test]
    fn test_scroll_inert_outside_quick_start() {
        let mut app = test_app();
        app.current_section = Section::Hero;
        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(app.step_list.selected(), 0);
    }
}

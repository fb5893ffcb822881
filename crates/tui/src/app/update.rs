//! Action application.
//!
//! Single synchronous reducer: every state change flows through
//! [`App::update`], so tests can drive the application with the same
//! actions the event loop produces.

use tracing::debug;

use super::core::App;
use crate::action::Action;

impl App {
    /// Apply an action to the application state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Input(key) => {
                if let Some(next) = self.handle_key(key) {
                    self.update(next);
                }
            }
            Action::Mouse(event) => self.handle_mouse(event),
            Action::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
            Action::Tick => self.on_tick(),
            Action::Quit => {
                debug!("quit requested");
                self.should_quit = true;
            }

            Action::NextSection => self.go_to_section(self.current_section.next()),
            Action::PreviousSection => self.go_to_section(self.current_section.previous()),
            Action::GoToSection(section) => self.go_to_section(section),

            Action::SelectStep(index) => self.step_list.select(index),
            Action::StepNext => self.step_list.select_next(),
            Action::StepPrev => self.step_list.select_prev(),

            Action::FocusNextTrigger => self.focus_next_trigger(),
            Action::FocusPrevTrigger => self.focus_prev_trigger(),
            Action::ClearFocus => self.clear_focus(),

            Action::CycleTheme => self.cycle_theme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppOptions, Section};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn test_app() -> App {
        App::new(AppOptions {
            hover_duration: Duration::ZERO,
            step_duration: Duration::ZERO,
            ..Default::default()
        })
    }

    #[test]
    fn test_quit_action_sets_flag() {
        let mut app = test_app();
        app.update(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_input_action_routes_through_keymap() {
        let mut app = test_app();
        app.update(Action::Input(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_section_navigation() {
        let mut app = test_app();
        app.update(Action::NextSection);
        assert_eq!(app.current_section, Section::Features);
        app.update(Action::PreviousSection);
        assert_eq!(app.current_section, Section::Hero);
        app.update(Action::GoToSection(Section::BestPractices));
        assert_eq!(app.current_section, Section::BestPractices);
    }

    #[test]
    fn test_step_actions_reach_step_list() {
        let mut app = test_app();
        app.update(Action::StepNext);
        assert_eq!(app.step_list.selected(), 1);
        app.update(Action::SelectStep(3));
        assert_eq!(app.step_list.selected(), 3);
        app.update(Action::StepPrev);
        assert_eq!(app.step_list.selected(), 2);
    }

    #[test]
    fn test_theme_cycle_action() {
        let mut app = test_app();
        let before = app.color_theme;
        app.update(Action::CycleTheme);
        assert_ne!(app.color_theme, before);
    }

    #[test]
    fn test_unbound_key_changes_nothing() {
        let mut app = test_app();
        app.update(Action::Input(KeyEvent::new(
            KeyCode::Char('z'),
            KeyModifiers::NONE,
        )));
        assert!(!app.should_quit);
        assert_eq!(app.current_section, Section::Hero);
    }
}

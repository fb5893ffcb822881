//! Keyboard input handling.
//!
//! Translates raw key events into [`Action`]s. Pure translation: nothing
//! here mutates state, which keeps the keymap testable in isolation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::core::App;
use super::state::{HoverId, Section};
use crate::action::Action;

impl App {
    /// Map a key event to an action, if the key is bound.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Tab => Some(Action::NextSection),
            KeyCode::BackTab => Some(Action::PreviousSection),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Some(Action::GoToSection(Section::ALL[index]))
            }

            KeyCode::Up | KeyCode::Char('k') if self.current_section == Section::QuickStart => {
                Some(Action::StepPrev)
            }
            KeyCode::Down | KeyCode::Char('j') if self.current_section == Section::QuickStart => {
                Some(Action::StepNext)
            }
            KeyCode::Home if self.current_section == Section::QuickStart => {
                Some(Action::SelectStep(0))
            }
            KeyCode::End if self.current_section == Section::QuickStart => {
                Some(Action::SelectStep(self.steps.len().saturating_sub(1)))
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused() {
                Some(HoverId::Step(index)) => Some(Action::SelectStep(index)),
                _ => None,
            },

            KeyCode::Right => Some(Action::FocusNextTrigger),
            KeyCode::Left => Some(Action::FocusPrevTrigger),
            KeyCode::Esc => Some(Action::ClearFocus),

            KeyCode::Char('t') => Some(Action::CycleTheme),
            _ => None,
        }
    }
}

//! Action types dispatched through the application.
//!
//! Responsibilities:
//! - Define the `Action` enum: every state transition the app can make.
//!
//! Does NOT handle:
//! - Applying actions to state (see `app::update`).
//! - Translating raw input into actions (see `app::input` / `app::mouse`).

use crossterm::event::{KeyEvent, MouseEvent};

use crate::app::Section;

/// All state transitions in the application.
///
/// Raw terminal events (`Input`, `Mouse`, `Resize`, `Tick`) arrive from the
/// event loop; the remaining variants are produced by the input handlers and
/// applied synchronously by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Raw key press from the terminal.
    Input(KeyEvent),
    /// Raw mouse event from the terminal.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// UI tick; advances animations.
    Tick,
    /// Exit the application.
    Quit,

    /// Switch to the next section tab.
    NextSection,
    /// Switch to the previous section tab.
    PreviousSection,
    /// Jump directly to a section.
    GoToSection(Section),

    /// Select a quick-start step by index.
    SelectStep(usize),
    /// Move the quick-start selection down one row.
    StepNext,
    /// Move the quick-start selection up one row.
    StepPrev,

    /// Move keyboard focus to the next hover-card trigger in the section.
    FocusNextTrigger,
    /// Move keyboard focus to the previous hover-card trigger.
    FocusPrevTrigger,
    /// Clear keyboard focus (closes any focused hover card).
    ClearFocus,

    /// Cycle the color theme.
    CycleTheme,
}

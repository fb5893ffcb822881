//! Test helpers for TUI testing.
//!
//! Provides a render harness over `TestBackend` plus constructors for the
//! keyboard and mouse events the tests simulate.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};
use std::time::Duration;

use grpc_tour::{Action, App, AppOptions, ui};

/// Test harness with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a harness with the given terminal dimensions and instant
    /// animations.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_options(width, height, instant_options())
    }

    pub fn with_options(width: u16, height: u16, options: AppOptions) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        let app = App::new(options);
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| ui::draw(f, &mut self.app))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Send one action through the reducer.
    pub fn update(&mut self, action: Action) {
        self.app.update(action);
    }

    /// Press a key.
    pub fn press(&mut self, event: KeyEvent) {
        self.app.update(Action::Input(event));
    }

    /// Advance enough ticks for any zero-duration animation to settle.
    pub fn settle(&mut self) {
        for _ in 0..4 {
            self.app.update(Action::Tick);
        }
    }
}

/// Options with zero-length animations: every transition settles on the
/// next tick.
pub fn instant_options() -> AppOptions {
    AppOptions {
        hover_duration: Duration::ZERO,
        step_duration: Duration::ZERO,
        ..Default::default()
    }
}

/// Options with very long animations: transitions stay mid-flight for the
/// whole test, making in-between states observable.
pub fn frozen_options() -> AppOptions {
    AppOptions {
        hover_duration: Duration::from_secs(600),
        step_duration: Duration::from_secs(600),
        ..Default::default()
    }
}

/// Convert a ratatui Buffer to a string.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Shift+Tab key event.
pub fn back_tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Left arrow key event.
pub fn left_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)
}

/// Create a Right arrow key event.
pub fn right_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)
}

/// Create an End key event.
pub fn end_key() -> KeyEvent {
    KeyEvent::new(KeyCode::End, KeyModifiers::NONE)
}

/// Create a mouse-move event at a terminal cell.
pub fn mouse_move(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Create a left-button click at a terminal cell.
pub fn mouse_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

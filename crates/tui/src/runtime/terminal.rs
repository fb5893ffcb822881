//! Terminal restoration on exit.
//!
//! Raw mode and the alternate screen must be undone no matter how the
//! process leaves, including panics mid-render. The guard records what was
//! enabled at setup and undoes it on drop; the explicit cleanup in
//! `main()` runs first on the normal path, this is the safety net.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Restores the terminal when dropped.
///
/// Create after terminal setup completes and keep alive for the whole
/// session. Drop must not panic, so restoration errors are ignored.
pub struct TerminalGuard {
    mouse_captured: bool,
}

impl TerminalGuard {
    /// `mouse_captured` records whether mouse capture was enabled during
    /// setup and therefore needs releasing.
    pub fn new(mouse_captured: bool) -> Self {
        Self { mouse_captured }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.mouse_captured {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}

//! Runtime infrastructure.
//!
//! Holds the pieces `main()` wires together around the app: terminal
//! lifecycle management today, nothing else. Rendering and input handling
//! live in `ui` and `app`.

pub mod terminal;

pub use terminal::TerminalGuard;

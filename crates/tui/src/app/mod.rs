//! Application state and input handling.
//!
//! Responsibilities:
//! - `core`: the `App` struct, hover-card plumbing, section navigation.
//! - `state`: section, trigger identity, and startup option types.
//! - `input` / `mouse`: translating raw terminal events.
//! - `update`: the action reducer.
//!
//! Does NOT handle:
//! - Drawing (see `ui`).
//! - Terminal lifecycle and the event loop (see `runtime` / `main`).

pub mod core;
pub mod input;
pub mod mouse;
pub mod state;
pub mod update;

pub use core::App;
pub use state::{AppOptions, FOOTER_HEIGHT, HEADER_HEIGHT, HoverId, Section};

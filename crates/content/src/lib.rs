//! Static content and shared configuration for the gRPC tour.
//!
//! This crate holds everything the TUI treats as externally supplied data:
//! the quick-start step collection, feature cards, best-practice tips,
//! footer resources, hero copy, the color theme palette, and shared
//! constants. The data is embedded literal text; there is no parsing, no
//! I/O, and no validation beyond the non-emptiness the TUI relies on
//! (covered by tests here).

pub mod catalog;
pub mod constants;
pub mod theme;
pub mod types;

pub use catalog::{best_practices, features, hero, quick_start_steps, resources};
pub use theme::{ColorTheme, Theme};
pub use types::{Feature, Hero, PracticeCategory, Resource, Step, Tip, TipKind};

//! gRPC Tour Library
//!
//! Core application logic, state management, and UI components for the
//! gRPC tour terminal interface.
//!
//! # Example
//!
//! ```rust
//! use grpc_tour::{App, Section, action::Action};
//!
//! let mut app = App::new(Default::default());
//! app.update(Action::GoToSection(Section::QuickStart));
//! assert_eq!(app.current_section, Section::QuickStart);
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, AppOptions, Section, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::components::hover_card::{HoverCardState, HoverPhase};
pub use ui::components::step_list::StepListState;

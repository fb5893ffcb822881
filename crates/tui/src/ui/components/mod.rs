//! Reusable UI components.

pub mod animation;
pub mod hover_card;
pub mod step_list;

pub use animation::AnimationController;
pub use hover_card::{HoverCardState, HoverPhase, render_hover_card};
pub use step_list::{StepListState, render_step_detail, render_step_rows};

//! Centralized constants for the gRPC tour workspace.
//!
//! Default values shared by the TUI crate to avoid magic number
//! duplication.

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
///
/// The hover-card reveal runs ~200 ms, so the tick must be well under that
/// for the animation to read as smooth.
pub const DEFAULT_UI_TICK_MS: u64 = 50;

// =============================================================================
// Animation Durations
// =============================================================================

/// Duration of the hover-card enter/exit animation in milliseconds.
pub const HOVER_REVEAL_MS: u64 = 200;

/// Duration of the step detail panel switch animation in milliseconds.
pub const STEP_SWITCH_MS: u64 = 300;

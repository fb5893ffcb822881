//! Animation timing for UI transitions.
//!
//! Provides the wall-clock progress tracking behind the hover-card reveal
//! and the step detail panel switch. Controllers are advanced by the shared
//! UI tick; they never block and require no completion callback.
//!
//! # Example
//!
//! ```rust,ignore
//! use grpc_tour::ui::components::AnimationController;
//! use std::time::Duration;
//!
//! let mut animation = AnimationController::new(Duration::from_millis(200));
//! let progress = animation.progress();
//! if animation.tick() {
//!     // Still running
//! }
//! ```

use std::time::{Duration, Instant};

/// Tracks the progress of a single fixed-duration animation.
///
/// Progress is derived from wall-clock time so a stalled event loop never
/// leaves an animation stuck mid-flight. A zero duration completes
/// immediately, which keeps tests deterministic.
#[derive(Debug, Clone)]
pub struct AnimationController {
    start_time: Instant,
    duration: Duration,
    completed: bool,
}

impl AnimationController {
    /// Create a new controller starting now.
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            duration,
            completed: duration.is_zero(),
        }
    }

    /// Create a controller that starts partway through its run.
    ///
    /// Used when an interrupted transition must resume from the current
    /// visual position rather than snapping back to the start.
    pub fn starting_at(duration: Duration, progress: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let elapsed = duration.mul_f32(progress);
        Self {
            start_time: Instant::now() - elapsed,
            duration,
            completed: duration.is_zero() || progress >= 1.0,
        }
    }

    /// Reset the animation to start over.
    pub fn reset(&mut self) {
        self.start_time = Instant::now();
        self.completed = self.duration.is_zero();
    }

    /// Check if the animation has completed.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Get current progress (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self.start_time.elapsed();
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    /// Get remaining duration.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.start_time.elapsed())
    }

    /// Process the animation for one frame.
    /// Returns true if the animation is still running.
    pub fn tick(&mut self) -> bool {
        if self.completed {
            return false;
        }
        if self.progress() >= 1.0 {
            self.completed = true;
            return false;
        }
        true
    }
}

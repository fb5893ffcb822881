//! Hover-card disclosure widget.
//!
//! Shows auxiliary explanatory text in a floating panel above a trigger
//! region while the trigger is hovered or keyboard-focused. The visibility
//! lifecycle is an explicit four-phase machine rather than a boolean so the
//! timed exit and cancel-on-re-entry behavior can be unit-tested without a
//! rendering subsystem:
//!
//! ```text
//! Hidden --enter--> Entering --complete--> Visible
//!   ^                  |  ^                   |
//!   |               leave  enter (resumes)  leave
//!   |                  v  |                   v
//!   +--complete---- Exiting <-----------------+
//! ```
//!
//! The panel participates in rendering and hit-testing exactly while the
//! phase is not `Hidden`; removal happens only once the exit animation
//! completes, never synchronously on the leave event.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::Duration;

use grpc_tour_content::{Theme, constants::HOVER_REVEAL_MS};

use super::animation::AnimationController;

/// Maximum panel width in terminal cells.
const PANEL_WIDTH: u16 = 44;

/// Visibility phase of a hover card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    /// Not rendered, not hit-testable.
    Hidden,
    /// Reveal animating 0 -> 1.
    Entering,
    /// Fully revealed.
    Visible,
    /// Reveal animating 1 -> 0; still rendered until complete.
    Exiting,
}

/// Per-instance state of one hover card.
///
/// Each trigger owns an independent, freshly initialized instance; nothing
/// is shared between cards and nothing is persisted.
#[derive(Debug, Clone)]
pub struct HoverCardState {
    phase: HoverPhase,
    animation: Option<AnimationController>,
    duration: Duration,
}

impl HoverCardState {
    /// Create a new card in the `Hidden` phase with the default reveal
    /// duration.
    pub fn new() -> Self {
        Self::with_duration(Duration::from_millis(HOVER_REVEAL_MS))
    }

    /// Create a card with a custom reveal duration. A zero duration makes
    /// every transition settle on the next tick.
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            phase: HoverPhase::Hidden,
            animation: None,
            duration,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// Whether the card takes part in rendering and hit-testing.
    ///
    /// True for every phase except `Hidden`: an exiting card is still on
    /// screen until its animation finishes.
    pub fn is_rendered(&self) -> bool {
        self.phase != HoverPhase::Hidden
    }

    /// Visual reveal in `0.0..=1.0`. Drives the panel's offset and
    /// foreground intensity.
    pub fn reveal(&self) -> f32 {
        match self.phase {
            HoverPhase::Hidden => 0.0,
            HoverPhase::Visible => 1.0,
            HoverPhase::Entering => self.animation.as_ref().map_or(1.0, |a| a.progress()),
            HoverPhase::Exiting => 1.0 - self.animation.as_ref().map_or(1.0, |a| a.progress()),
        }
    }

    /// Pointer entered the trigger region.
    ///
    /// Re-entry during exit cancels the exit and resumes the reveal from
    /// the current visual position.
    pub fn pointer_enter(&mut self) {
        match self.phase {
            HoverPhase::Hidden => {
                self.phase = HoverPhase::Entering;
                self.animation = Some(AnimationController::new(self.duration));
            }
            HoverPhase::Exiting => {
                let reveal = self.reveal();
                self.phase = HoverPhase::Entering;
                self.animation = Some(AnimationController::starting_at(self.duration, reveal));
            }
            HoverPhase::Entering | HoverPhase::Visible => {}
        }
    }

    /// Pointer left the trigger region.
    ///
    /// Leaving mid-enter reverses from the current visual position; the
    /// card stays rendered until the exit completes.
    pub fn pointer_leave(&mut self) {
        match self.phase {
            HoverPhase::Visible => {
                self.phase = HoverPhase::Exiting;
                self.animation = Some(AnimationController::new(self.duration));
            }
            HoverPhase::Entering => {
                let reveal = self.reveal();
                self.phase = HoverPhase::Exiting;
                self.animation =
                    Some(AnimationController::starting_at(self.duration, 1.0 - reveal));
            }
            HoverPhase::Hidden | HoverPhase::Exiting => {}
        }
    }

    /// Keyboard focus landed on the trigger. Same machine as hover.
    pub fn focus_in(&mut self) {
        self.pointer_enter();
    }

    /// Keyboard focus left the trigger.
    pub fn focus_out(&mut self) {
        self.pointer_leave();
    }

    /// Advance the animation one frame.
    pub fn tick(&mut self) {
        let done = match &mut self.animation {
            Some(animation) => !animation.tick(),
            None => false,
        };
        if done {
            self.animation = None;
            self.phase = match self.phase {
                HoverPhase::Entering => HoverPhase::Visible,
                HoverPhase::Exiting => HoverPhase::Hidden,
                settled => settled,
            };
        }
    }
}

impl Default for HoverCardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a hover card's floating panel above its trigger.
///
/// The panel is horizontally centered on the trigger and clamped to the
/// frame; if there is no room above, it flips below. While the reveal is
/// partial the panel is nudged one row toward the trigger and its
/// foreground dimmed, the terminal rendition of the offset/scale/opacity
/// enter animation.
pub fn render_hover_card(
    frame: &mut Frame,
    trigger: Rect,
    title: Option<&str>,
    body: &str,
    state: &HoverCardState,
    theme: &Theme,
) {
    if !state.is_rendered() {
        return;
    }
    let area = frame.area();
    if area.width < 10 || area.height < 6 {
        return;
    }

    let width = PANEL_WIDTH.min(area.width.saturating_sub(2));
    let inner_width = width.saturating_sub(2) as usize;
    let body_lines = wrapped_line_count(body, inner_width.max(1)) as u16;
    let height = body_lines + 2;

    let reveal = state.reveal();
    // Slide: one row toward the trigger while the reveal is partial.
    let slide = if reveal < 1.0 { 1 } else { 0 };

    let trigger_center = trigger.x + trigger.width / 2;
    let x = trigger_center
        .saturating_sub(width / 2)
        .min(area.width.saturating_sub(width));
    let y = if trigger.y >= height {
        trigger.y - height + slide
    } else {
        // No room above; open downward instead.
        (trigger.y + trigger.height)
            .saturating_sub(slide)
            .min(area.height.saturating_sub(height))
    };
    let panel = Rect::new(x, y, width, height.min(area.height));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.background));
    if let Some(title) = title {
        block = block.title(Line::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, panel);
    frame.render_widget(paragraph, panel);

    if reveal < 1.0 {
        dim_area(frame, panel, reveal);
    }
}

/// Count the lines `body` wraps to at `width` columns (greedy word wrap,
/// matching `Wrap { trim: true }` closely enough for sizing).
fn wrapped_line_count(body: &str, width: usize) -> usize {
    let mut lines = 0usize;
    for raw in body.lines() {
        let mut used = 0usize;
        let mut line_started = false;
        for word in raw.split_whitespace() {
            let len = word.chars().count();
            if !line_started {
                lines += 1;
                line_started = true;
                used = len;
            } else if used + 1 + len <= width {
                used += 1 + len;
            } else {
                lines += 1;
                used = len;
            }
        }
        if !line_started {
            lines += 1;
        }
    }
    lines.max(1)
}

/// Scale the foreground intensity of every cell in `area` by `reveal`.
fn dim_area(frame: &mut Frame, area: Rect, reveal: f32) {
    let alpha = (reveal.clamp(0.0, 1.0) * 255.0) as u16;
    let buf = frame.buffer_mut();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = cell.style().fg.unwrap_or(Color::White);
                cell.set_style(cell.style().fg(scale_color(fg, alpha)));
            }
        }
    }
}

/// Scale an RGB color toward black; indexed colors pass through unchanged.
fn scale_color(color: Color, alpha: u16) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            ((r as u16 * alpha) / 255) as u8,
            ((g as u16 * alpha) / 255) as u8,
            ((b as u16 * alpha) / 255) as u8,
        ),
        other => other,
    }
}

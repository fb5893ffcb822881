//! Single-select step list with a synchronized detail panel.
//!
//! Exactly one step is selected at all times. Selecting a step updates the
//! selection synchronously and starts a presentation-only transition; the
//! detail panel always shows the currently selected step's payload, never a
//! blend of old and new. Re-selecting the already selected step is a no-op
//! and restarts nothing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::time::Duration;

use grpc_tour_content::{Step, Theme, constants::STEP_SWITCH_MS};

use super::animation::AnimationController;
use crate::ui::theme::ThemeExt;

/// An in-flight switch of the detail panel from one step to another.
///
/// Purely presentational: `StepListState::selected` is already the new
/// index while this runs. A new selection replaces the whole transition.
#[derive(Debug, Clone)]
struct StepTransition {
    from: usize,
    animation: AnimationController,
}

/// Selection state for the step list.
#[derive(Debug, Clone)]
pub struct StepListState {
    selected: usize,
    len: usize,
    transition: Option<StepTransition>,
    duration: Duration,
}

impl StepListState {
    /// Create a state over `len` steps with the first step selected and the
    /// default switch duration.
    pub fn new(len: usize) -> Self {
        Self::with_duration(len, Duration::from_millis(STEP_SWITCH_MS))
    }

    /// Create a state with a custom switch duration. A zero duration makes
    /// every switch settle on the next tick.
    pub fn with_duration(len: usize, duration: Duration) -> Self {
        Self {
            selected: 0,
            len,
            transition: None,
            duration,
        }
    }

    /// Index of the selected step. Always in range while `len > 0`.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no steps.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a detail switch is still animating.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// The step the detail panel is animating away from, if any.
    pub fn transition_from(&self) -> Option<usize> {
        self.transition.as_ref().map(|t| t.from)
    }

    /// Select the step at `index`.
    ///
    /// The selection changes synchronously; only the detail reveal is
    /// animated. Selecting the current step or an out-of-range index does
    /// nothing, leaving any in-flight transition untouched.
    pub fn select(&mut self, index: usize) {
        if index >= self.len || index == self.selected {
            return;
        }
        self.transition = Some(StepTransition {
            from: self.selected,
            animation: AnimationController::new(self.duration),
        });
        self.selected = index;
    }

    /// Move the selection down one step, stopping at the last.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len {
            self.select(self.selected + 1);
        }
    }

    /// Move the selection up one step, stopping at the first.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.select(self.selected - 1);
        }
    }

    /// Jump to the first step.
    pub fn select_first(&mut self) {
        self.select(0);
    }

    /// Jump to the last step.
    pub fn select_last(&mut self) {
        if self.len > 0 {
            self.select(self.len - 1);
        }
    }

    /// Advance the switch animation one frame.
    pub fn tick(&mut self) {
        if let Some(transition) = &mut self.transition
            && !transition.animation.tick()
        {
            self.transition = None;
        }
    }

    /// Reveal of the selected step's detail in `0.0..=1.0`.
    ///
    /// 1.0 whenever no switch is in flight.
    pub fn detail_reveal(&self) -> f32 {
        self.transition
            .as_ref()
            .map_or(1.0, |t| t.animation.progress())
    }
}

/// Render the step selector rows.
///
/// The selected row gets the highlight background and a pointer marker;
/// rows are numbered from 1 for display. Returns the on-screen rectangle
/// of each step's title row so the caller can register them for
/// hit-testing.
pub fn render_step_rows(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    state: &StepListState,
    theme: &Theme,
) -> Vec<Rect> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Line::styled(" Steps ", theme.title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut rows = Vec::with_capacity(steps.len());
    let mut lines = Vec::with_capacity(steps.len() * 2);
    for (i, step) in steps.iter().enumerate() {
        let selected = i == state.selected();
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(format!("{}. {}", i + 1, step.title), title_style),
        ]));
        lines.push(Line::styled(
            format!("     {}", step.description),
            Style::default().fg(theme.text_dim),
        ));

        let row_y = inner.y + (i as u16) * 2;
        if row_y < inner.y + inner.height {
            rows.push(Rect::new(inner.x, row_y, inner.width, 1));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
    rows
}

/// Render the detail panel for the selected step.
///
/// Always shows `steps[state.selected()]`. While a switch is in flight the
/// incoming payload slides up from one row below and its foreground fades
/// in; at no point is the outgoing payload drawn.
pub fn render_step_detail(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    state: &StepListState,
    theme: &Theme,
) {
    let Some(step) = steps.get(state.selected()) else {
        return;
    };
    let reveal = state.detail_reveal();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Line::styled(format!(" {} ", step.title), theme.title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Slide: draw one row lower until the switch settles.
    let offset = if reveal < 1.0 && inner.height > 1 { 1 } else { 0 };
    let content = Rect::new(
        inner.x,
        inner.y + offset,
        inner.width,
        inner.height - offset,
    );

    let fg = if reveal < 1.0 {
        theme.dim_toward_background(theme.code_text, reveal)
    } else {
        theme.code_text
    };
    let paragraph = Paragraph::new(step.code)
        .style(Style::default().fg(fg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settle(state: &mut StepListState) {
        for _ in 0..4 {
            state.tick();
        }
    }

    #[test]
    fn test_first_step_selected_by_default() {
        let state = StepListState::new(4);
        assert_eq!(state.selected(), 0);
        assert!(!state.is_transitioning());
        assert_eq!(state.detail_reveal(), 1.0);
    }

    #[test]
    fn test_select_updates_synchronously() {
        let mut state = StepListState::with_duration(4, Duration::from_secs(10));
        state.select(2);
        // The selection must not wait for the animation.
        assert_eq!(state.selected(), 2);
        assert!(state.is_transitioning());
        assert_eq!(state.transition_from(), Some(0));
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut state = StepListState::with_duration(4, Duration::ZERO);
        state.select(1);
        settle(&mut state);
        state.select(1);
        assert!(!state.is_transitioning(), "Re-selection must not re-animate");
    }

    #[test]
    fn test_rapid_reselection_replaces_transition() {
        let mut state = StepListState::with_duration(4, Duration::from_secs(10));
        state.select(1);
        state.select(3);
        assert_eq!(state.selected(), 3);
        // The new transition animates from the previous selection only.
        assert_eq!(state.transition_from(), Some(1));
    }

    #[test]
    fn test_transition_settles() {
        let mut state = StepListState::with_duration(4, Duration::ZERO);
        state.select(2);
        settle(&mut state);
        assert!(!state.is_transitioning());
        assert_eq!(state.detail_reveal(), 1.0);
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut state = StepListState::new(4);
        state.select(9);
        assert_eq!(state.selected(), 0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_next_prev_clamp_at_bounds() {
        let mut state = StepListState::with_duration(3, Duration::ZERO);
        state.select_prev();
        assert_eq!(state.selected(), 0);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_first_last_jumps() {
        let mut state = StepListState::with_duration(5, Duration::ZERO);
        state.select_last();
        assert_eq!(state.selected(), 4);
        state.select_first();
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_empty_list_has_no_valid_ops() {
        let mut state = StepListState::new(0);
        state.select_next();
        state.select_last();
        assert_eq!(state.selected(), 0);
        assert!(state.is_empty());
    }

    proptest! {
        /// Exactly one step is selected after any operation sequence, and
        /// the index always stays in range.
        #[test]
        fn prop_selection_stays_in_range(
            len in 1usize..8,
            ops in proptest::collection::vec(0usize..12, 0..50),
        ) {
            let mut state = StepListState::with_duration(len, Duration::ZERO);
            for op in ops {
                match op {
                    0 => state.select_next(),
                    1 => state.select_prev(),
                    2 => state.select_first(),
                    3 => state.select_last(),
                    n => state.select(n - 4),
                }
                state.tick();
                prop_assert!(state.selected() < len);
            }
        }

        /// The final selection equals the last effective selection op,
        /// regardless of how the animation interleaves.
        #[test]
        fn prop_last_selection_wins(
            targets in proptest::collection::vec(0usize..4, 1..20),
        ) {
            let mut state = StepListState::with_duration(4, Duration::from_secs(10));
            for &t in &targets {
                state.select(t);
            }
            prop_assert_eq!(state.selected(), *targets.last().unwrap());
        }
    }
}

//! Central application state.
//!
//! `App` owns every piece of mutable UI state: the active section, the
//! quick-start selection, and one hover-card state machine per trigger the
//! user has interacted with. Rendering rebuilds the hit-test registry each
//! frame; animation state is keyed by [`HoverId`] so it survives re-layout.

use std::collections::HashMap;
use std::time::Duration;

use ratatui::layout::Rect;

use grpc_tour_content::{ColorTheme, Step, Theme, catalog};

use super::state::{AppOptions, HoverId, Section};
use crate::ui::components::{HoverCardState, StepListState};

/// Application state.
pub struct App {
    /// Set when the user asks to exit; the event loop checks it each pass.
    pub should_quit: bool,
    /// Section currently shown under the tab bar.
    pub current_section: Section,
    /// Active theme selection.
    pub color_theme: ColorTheme,
    /// Expanded palette for the current selection.
    pub theme: Theme,
    /// Whether mouse capture was requested at startup.
    pub mouse_enabled: bool,
    /// Monotonic tick counter driving decorative animation frames.
    pub tick_count: u64,

    /// Quick-start steps, embedded at compile time.
    pub steps: &'static [Step],
    /// Selection state for the quick-start step list.
    pub step_list: StepListState,

    hover_duration: Duration,
    hover_states: HashMap<HoverId, HoverCardState>,
    hover_targets: Vec<(Rect, HoverId)>,
    hovered: Option<HoverId>,
    focused: Option<HoverId>,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let steps = catalog::quick_start_steps();
        Self {
            should_quit: false,
            current_section: options.section,
            color_theme: options.theme,
            theme: options.theme.into(),
            mouse_enabled: options.mouse_enabled,
            tick_count: 0,
            steps,
            step_list: StepListState::with_duration(steps.len(), options.step_duration),
            hover_duration: options.hover_duration,
            hover_states: HashMap::new(),
            hover_targets: Vec::new(),
            hovered: None,
            focused: None,
        }
    }

    /// Cycle to the next color theme.
    pub fn cycle_theme(&mut self) {
        self.color_theme = self.color_theme.cycle_next();
        self.theme = self.color_theme.into();
    }

    /// Switch sections, dropping keyboard focus so no card refers to a
    /// trigger that is no longer on screen.
    pub fn go_to_section(&mut self, section: Section) {
        if section == self.current_section {
            return;
        }
        self.current_section = section;
        self.clear_focus();
        self.set_hovered(None);
    }

    // ----- hover plumbing -----

    /// Drop all hit-test rectangles. Called at the top of every render
    /// pass before sections re-register their triggers.
    pub fn clear_hover_targets(&mut self) {
        self.hover_targets.clear();
    }

    /// Register a trigger rectangle for this frame.
    pub fn register_hover_target(&mut self, area: Rect, id: HoverId) {
        self.hover_targets.push((area, id));
    }

    /// Find the trigger under a terminal cell, topmost registration first.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HoverId> {
        self.hover_targets
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(_, id)| *id)
    }

    /// Last registered rectangle for a trigger, if it is on screen.
    pub fn target_area(&self, id: HoverId) -> Option<Rect> {
        self.hover_targets
            .iter()
            .rev()
            .find(|(_, t)| *t == id)
            .map(|(area, _)| *area)
    }

    /// The trigger the pointer is currently over.
    pub fn hovered(&self) -> Option<HoverId> {
        self.hovered
    }

    /// The trigger holding keyboard focus.
    pub fn focused(&self) -> Option<HoverId> {
        self.focused
    }

    /// Update the pointer-hover target, driving enter/leave on the
    /// affected card state machines.
    pub fn set_hovered(&mut self, id: Option<HoverId>) {
        if self.hovered == id {
            return;
        }
        if let Some(old) = self.hovered.take()
            && Some(old) != self.focused
            && let Some(state) = self.hover_states.get_mut(&old)
        {
            state.pointer_leave();
        }
        if let Some(new) = id {
            self.ensure_hover_state(new).pointer_enter();
        }
        self.hovered = id;
    }

    /// Move keyboard focus to a trigger, driving focus in/out.
    pub fn set_focused(&mut self, id: Option<HoverId>) {
        if self.focused == id {
            return;
        }
        if let Some(old) = self.focused.take()
            && Some(old) != self.hovered
            && let Some(state) = self.hover_states.get_mut(&old)
        {
            state.focus_out();
        }
        if let Some(new) = id {
            self.ensure_hover_state(new).focus_in();
        }
        self.focused = id;
    }

    /// Clear keyboard focus, closing its card.
    pub fn clear_focus(&mut self) {
        self.set_focused(None);
    }

    /// Move focus one trigger forward within the current section, wrapping.
    pub fn focus_next_trigger(&mut self) {
        self.shift_focus(1);
    }

    /// Move focus one trigger backward, wrapping.
    pub fn focus_prev_trigger(&mut self) {
        self.shift_focus(-1);
    }

    fn shift_focus(&mut self, delta: isize) {
        let triggers = self.section_triggers();
        if triggers.is_empty() {
            return;
        }
        let len = triggers.len() as isize;
        let next = match self.focused.and_then(|f| triggers.iter().position(|t| *t == f)) {
            Some(pos) => (pos as isize + delta).rem_euclid(len) as usize,
            None if delta >= 0 => 0,
            None => triggers.len() - 1,
        };
        self.set_focused(Some(triggers[next]));
    }

    /// Triggers reachable by keyboard in the current section, in reading
    /// order.
    pub fn section_triggers(&self) -> Vec<HoverId> {
        match self.current_section {
            Section::Hero => vec![HoverId::Glossary],
            Section::Features => (0..catalog::features().len()).map(HoverId::Feature).collect(),
            Section::QuickStart => (0..self.steps.len()).map(HoverId::Step).collect(),
            Section::BestPractices => {
                let mut ids = Vec::new();
                for (category, group) in catalog::best_practices().iter().enumerate() {
                    for tip in 0..group.tips.len() {
                        ids.push(HoverId::Practice { category, tip });
                    }
                }
                ids
            }
        }
    }

    /// Card state for a trigger, if the user has ever activated it.
    pub fn hover_state(&self, id: HoverId) -> Option<&HoverCardState> {
        self.hover_states.get(&id)
    }

    fn ensure_hover_state(&mut self, id: HoverId) -> &mut HoverCardState {
        let duration = self.hover_duration;
        self.hover_states
            .entry(id)
            .or_insert_with(|| HoverCardState::with_duration(duration))
    }

    /// Cards that must be drawn this frame, exiting ones included.
    pub fn rendered_cards(&self) -> impl Iterator<Item = (HoverId, &HoverCardState)> {
        self.hover_states
            .iter()
            .filter(|(_, state)| state.is_rendered())
            .map(|(id, state)| (*id, state))
    }

    /// Advance every animation one frame and drop fully hidden card
    /// entries so the map does not grow with page exploration.
    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        for state in self.hover_states.values_mut() {
            state.tick();
        }
        self.hover_states.retain(|id, state| {
            state.is_rendered() || Some(*id) == self.hovered || Some(*id) == self.focused
        });
        self.step_list.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::HoverPhase;

    fn test_app() -> App {
        App::new(AppOptions {
            hover_duration: Duration::ZERO,
            step_duration: Duration::ZERO,
            ..Default::default()
        })
    }

    fn settle(app: &mut App) {
        for _ in 0..4 {
            app.on_tick();
        }
    }

    #[test]
    fn test_hover_enter_creates_card() {
        let mut app = test_app();
        app.set_hovered(Some(HoverId::Glossary));
        settle(&mut app);
        let state = app.hover_state(HoverId::Glossary).unwrap();
        assert_eq!(state.phase(), HoverPhase::Visible);
    }

    #[test]
    fn test_hover_leave_removes_card_after_exit() {
        let mut app = test_app();
        app.set_hovered(Some(HoverId::Glossary));
        settle(&mut app);
        app.set_hovered(None);
        settle(&mut app);
        assert!(app.hover_state(HoverId::Glossary).is_none());
    }

    #[test]
    fn test_hover_move_between_triggers() {
        let mut app = test_app();
        app.go_to_section(Section::Features);
        app.set_hovered(Some(HoverId::Feature(0)));
        settle(&mut app);
        app.set_hovered(Some(HoverId::Feature(1)));
        // Old card exits while the new one enters; both render this frame.
        assert_eq!(app.rendered_cards().count(), 2);
        settle(&mut app);
        assert_eq!(app.rendered_cards().count(), 1);
    }

    #[test]
    fn test_focus_cycles_through_section_triggers() {
        let mut app = test_app();
        app.go_to_section(Section::QuickStart);
        let count = app.section_triggers().len();
        assert!(count > 1);
        app.focus_next_trigger();
        assert_eq!(app.focused(), Some(HoverId::Step(0)));
        for _ in 0..count {
            app.focus_next_trigger();
        }
        // Full cycle wraps back to the first trigger.
        assert_eq!(app.focused(), Some(HoverId::Step(0)));
    }

    #[test]
    fn test_focus_prev_from_unfocused_lands_on_last() {
        let mut app = test_app();
        app.go_to_section(Section::QuickStart);
        app.focus_prev_trigger();
        let last = app.steps.len() - 1;
        assert_eq!(app.focused(), Some(HoverId::Step(last)));
    }

    #[test]
    fn test_section_switch_clears_focus_and_hover() {
        let mut app = test_app();
        app.set_hovered(Some(HoverId::Glossary));
        app.focus_next_trigger();
        app.go_to_section(Section::Features);
        assert!(app.focused().is_none());
        assert!(app.hovered().is_none());
    }

    #[test]
    fn test_hit_test_prefers_topmost_registration() {
        let mut app = test_app();
        app.register_hover_target(Rect::new(0, 0, 10, 10), HoverId::Feature(0));
        app.register_hover_target(Rect::new(2, 2, 4, 4), HoverId::Feature(1));
        assert_eq!(app.hit_test(3, 3), Some(HoverId::Feature(1)));
        assert_eq!(app.hit_test(0, 0), Some(HoverId::Feature(0)));
        assert_eq!(app.hit_test(50, 50), None);
    }

    #[test]
    fn test_cycle_theme_updates_palette() {
        let mut app = test_app();
        let before = app.theme;
        app.cycle_theme();
        assert_ne!(app.theme, before);
        assert_eq!(app.theme, Theme::from_color_theme(app.color_theme));
    }

    #[test]
    fn test_focus_and_hover_on_same_trigger_keep_card_open() {
        let mut app = test_app();
        app.go_to_section(Section::QuickStart);
        app.set_hovered(Some(HoverId::Step(0)));
        app.set_focused(Some(HoverId::Step(0)));
        settle(&mut app);
        // Dropping one activation source must not close the card while
        // the other remains.
        app.set_hovered(None);
        settle(&mut app);
        let state = app.hover_state(HoverId::Step(0)).unwrap();
        assert_eq!(state.phase(), HoverPhase::Visible);
    }
}

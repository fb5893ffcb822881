//! Rendering.
//!
//! `draw` composes the whole page each frame: header band, the active
//! section, footer band, then the hover-card overlay on top. Trigger
//! hit-test rectangles are rebuilt from scratch on every pass so resizes
//! and section switches never leave stale geometry behind.

pub mod components;
pub mod sections;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use grpc_tour_content::catalog;

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT, HoverId, Section};
use components::render_hover_card;

/// Render one full frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(5),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    app.clear_hover_targets();
    sections::header::render(frame, header_area, app);
    match app.current_section {
        Section::Hero => sections::hero::render(frame, body_area, app),
        Section::Features => sections::features::render(frame, body_area, app),
        Section::QuickStart => sections::quick_start::render(frame, body_area, app),
        Section::BestPractices => sections::best_practices::render(frame, body_area, app),
    }
    sections::footer::render(frame, footer_area, app);

    draw_hover_overlay(frame, app);
}

/// Draw every card that is currently in a rendered phase, exiting ones
/// included. A card whose trigger left the screen (section switch during
/// its exit) is skipped; its state still ticks down to hidden.
fn draw_hover_overlay(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    for (id, state) in app.rendered_cards() {
        let Some(trigger) = app.target_area(id) else {
            continue;
        };
        let Some((title, body)) = hover_copy(id) else {
            continue;
        };
        render_hover_card(frame, trigger, title, body, state, &theme);
    }
}

/// The title and body a trigger's hover card shows.
fn hover_copy(id: HoverId) -> Option<(Option<&'static str>, &'static str)> {
    match id {
        HoverId::Glossary => {
            let hero = catalog::hero();
            Some((Some(hero.glossary_term), hero.glossary_text))
        }
        HoverId::Feature(index) => catalog::features()
            .get(index)
            .map(|feature| (Some(feature.title), feature.details)),
        HoverId::Step(index) => catalog::quick_start_steps()
            .get(index)
            .map(|step| (Some(step.title), step.explanation)),
        HoverId::Practice { category, tip } => catalog::best_practices()
            .get(category)
            .and_then(|group| group.tips.get(tip))
            .map(|tip| (Some(tip.title), tip.details)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_copy_covers_every_trigger_kind() {
        assert!(hover_copy(HoverId::Glossary).is_some());
        assert!(hover_copy(HoverId::Feature(0)).is_some());
        assert!(hover_copy(HoverId::Step(0)).is_some());
        assert!(hover_copy(HoverId::Practice { category: 0, tip: 0 }).is_some());
    }

    #[test]
    fn test_hover_copy_rejects_out_of_range() {
        assert!(hover_copy(HoverId::Feature(99)).is_none());
        assert!(hover_copy(HoverId::Step(99)).is_none());
        assert!(hover_copy(HoverId::Practice { category: 99, tip: 0 }).is_none());
    }

    #[test]
    fn test_hover_copy_is_never_empty() {
        let features = catalog::features().len();
        for i in 0..features {
            let (_, body) = hover_copy(HoverId::Feature(i)).unwrap();
            assert!(!body.is_empty());
        }
    }
}

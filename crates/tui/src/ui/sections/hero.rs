//! Hero banner: headline, intro, glossary trigger, highlight cards.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use grpc_tour_content::catalog;

use crate::app::{App, HoverId};
use crate::ui::theme::ThemeExt;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let hero = catalog::hero();

    let [headline_area, intro_area, trigger_area, highlights_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(2),
        Constraint::Min(5),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            hero.headline,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        headline_area,
    );

    frame.render_widget(
        Paragraph::new(hero.intro)
            .style(theme.text_style())
            .wrap(Wrap { trim: true }),
        intro_area,
    );

    // The glossary trigger gets its own row so its hit-test rectangle is
    // exact regardless of how the intro wraps.
    let active = app.hovered() == Some(HoverId::Glossary) || app.focused() == Some(HoverId::Glossary);
    let label = format!("What is {}?", hero.glossary_term);
    let trigger = Line::from(vec![
        Span::styled("▸ ", Style::default().fg(theme.accent)),
        Span::styled(label.clone(), theme.trigger_style(active)),
    ]);
    frame.render_widget(Paragraph::new(trigger), trigger_area);
    let trigger_rect = Rect::new(
        trigger_area.x,
        trigger_area.y,
        (label.chars().count() as u16 + 2).min(trigger_area.width),
        1,
    );
    app.register_hover_target(trigger_rect, HoverId::Glossary);

    let columns = Layout::horizontal(vec![
        Constraint::Ratio(1, hero.highlights.len() as u32);
        hero.highlights.len()
    ])
    .split(highlights_area);
    for (highlight, column) in hero.highlights.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Line::styled(format!(" {} ", highlight.title), theme.title_style()));
        let inner = block.inner(*column);
        frame.render_widget(block, *column);
        frame.render_widget(
            Paragraph::new(highlight.description)
                .style(theme.dim_style())
                .wrap(Wrap { trim: true }),
            inner,
        );
    }
}

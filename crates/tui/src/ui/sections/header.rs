//! Title bar and section tabs.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::{App, Section};
use crate::ui::theme::ThemeExt;

/// Decorative sparkle cycled by the UI tick.
const SPARKLE_FRAMES: [&str; 4] = ["✦", "✧", "·", "✧"];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let [title_area, tabs_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(2)]).areas(area);

    // Slowed to a fraction of the tick rate so it shimmers instead of
    // flickering.
    let sparkle = SPARKLE_FRAMES[(app.tick_count / 4) as usize % SPARKLE_FRAMES.len()];
    let title = Line::from(vec![
        Span::styled(format!("{sparkle} "), Style::default().fg(theme.accent)),
        Span::styled(
            " gRPC Tour ",
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  a guided introduction to gRPC",
            Style::default().fg(theme.text_dim),
        ),
        Span::styled(
            format!("  [{}]", app.color_theme),
            Style::default().fg(theme.disabled),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::BOTTOM).border_style(theme.border_style())),
        title_area,
    );

    let labels: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| Line::from(format!(" {} {} ", i + 1, section.title())))
        .collect();
    let tabs = Tabs::new(labels)
        .select(app.current_section.index())
        .style(theme.dim_style())
        .highlight_style(theme.selection_style())
        .divider(Span::styled("|", theme.border_style()));
    frame.render_widget(tabs, tabs_area);
}

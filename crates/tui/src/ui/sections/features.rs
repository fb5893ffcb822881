//! Feature card grid.
//!
//! Six cards in a two-column grid. Each card title is a hover-card
//! trigger revealing the feature's longer details text.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use grpc_tour_content::catalog;

use crate::app::{App, HoverId};
use crate::ui::theme::ThemeExt;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let features = catalog::features();

    let rows_needed = features.len().div_ceil(2);
    let rows = Layout::vertical(vec![Constraint::Ratio(1, rows_needed as u32); rows_needed])
        .split(area);

    for (i, feature) in features.iter().enumerate() {
        let row = rows[i / 2];
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(row);
        let cell = if i % 2 == 0 { left } else { right };
        if cell.height < 3 {
            continue;
        }

        let id = HoverId::Feature(i);
        let active = app.hovered() == Some(id) || app.focused() == Some(id);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Line::styled(
                format!(" {} ", feature.title),
                theme.trigger_style(active),
            ));
        let inner = block.inner(cell);
        frame.render_widget(block, cell);
        frame.render_widget(
            Paragraph::new(feature.description)
                .style(theme.text_style())
                .wrap(Wrap { trim: true }),
            inner,
        );

        // The whole title row acts as the trigger.
        app.register_hover_target(Rect::new(cell.x, cell.y, cell.width, 1), id);
    }
}

//! Best-practice categories and tips.
//!
//! Categories render as a grid of bordered groups; each tip line carries a
//! recommendation or caution marker and acts as a hover-card trigger for
//! the tip's details.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use grpc_tour_content::{TipKind, catalog};

use crate::app::{App, HoverId};
use crate::ui::theme::ThemeExt;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let categories = catalog::best_practices();

    let columns = 3usize;
    let rows_needed = categories.len().div_ceil(columns);
    let rows = Layout::vertical(vec![Constraint::Ratio(1, rows_needed as u32); rows_needed])
        .split(area);

    for (category_index, category) in categories.iter().enumerate() {
        let row = rows[category_index / columns];
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row);
        let cell = cells[category_index % columns];
        if cell.height < 3 {
            continue;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Line::styled(format!(" {} ", category.name), theme.title_style()));
        let inner = block.inner(cell);
        frame.render_widget(block, cell);

        let mut lines = Vec::with_capacity(category.tips.len());
        for (tip_index, tip) in category.tips.iter().enumerate() {
            let id = HoverId::Practice {
                category: category_index,
                tip: tip_index,
            };
            let active = app.hovered() == Some(id) || app.focused() == Some(id);
            let marker_color = match tip.kind {
                TipKind::Recommended => theme.success,
                TipKind::Caution => theme.warning,
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", tip.kind.marker()), Style::default().fg(marker_color)),
                Span::styled(tip.title, theme.trigger_style(active)),
            ]));

            let line_y = inner.y + tip_index as u16;
            if line_y < inner.y + inner.height {
                app.register_hover_target(Rect::new(inner.x, line_y, inner.width, 1), id);
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

//! Footer band: further-reading resources and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use grpc_tour_content::catalog;

use crate::app::App;
use crate::ui::theme::ThemeExt;

const KEY_HINTS: &str =
    "Tab/1-4 sections · ↑/↓ steps · ←/→ triggers · Esc close · t theme · q quit";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut resource_spans = Vec::new();
    for (i, resource) in catalog::resources().iter().enumerate() {
        if i > 0 {
            resource_spans.push(Span::styled("  ·  ", theme.dim_style()));
        }
        resource_spans.push(Span::styled(resource.title, Style::default().fg(theme.info)));
        resource_spans.push(Span::styled(
            format!(" <{}>", resource.url),
            Style::default().fg(theme.disabled),
        ));
    }

    let lines = vec![
        Line::from(resource_spans),
        Line::styled(KEY_HINTS, theme.dim_style()),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border_style()),
        ),
        area,
    );
}

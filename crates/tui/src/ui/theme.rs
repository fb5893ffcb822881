//! Style helpers layered over the content crate's theme palette.
//!
//! The palette itself lives in `grpc_tour_content::theme`; this module adds
//! the ratatui-facing conveniences the render code uses everywhere.

use grpc_tour_content::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Extension methods for converting palette colors into widget styles.
pub trait ThemeExt {
    /// Style for section and panel borders.
    fn border_style(&self) -> Style;
    /// Style for block titles.
    fn title_style(&self) -> Style;
    /// Style for body text.
    fn text_style(&self) -> Style;
    /// Style for secondary text.
    fn dim_style(&self) -> Style;
    /// Style for the selected row of a list.
    fn selection_style(&self) -> Style;
    /// Style for hover-card trigger text, with an underline so triggers
    /// read as interactive.
    fn trigger_style(&self, active: bool) -> Style;
    /// Blend `color` toward the theme background by `amount` in
    /// `0.0..=1.0`, where 1.0 leaves the color unchanged.
    fn dim_toward_background(&self, color: Color, amount: f32) -> Color;
}

impl ThemeExt for Theme {
    fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn trigger_style(&self, active: bool) -> Style {
        let style = Style::default()
            .fg(self.info)
            .add_modifier(Modifier::UNDERLINED);
        if active {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn dim_toward_background(&self, color: Color, amount: f32) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        match (color, self.background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg_, bb)) => Color::Rgb(
                lerp(br, r, amount),
                lerp(bg_, g, amount),
                lerp(bb, b, amount),
            ),
            _ => color,
        }
    }
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

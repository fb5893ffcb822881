//! Color themes for the tour UI.
//!
//! A `ColorTheme` is the user-facing selection (CLI `--theme`); `Theme` is
//! the expanded runtime palette the renderer consumes.

use ratatui::style::Color;

/// User-selectable theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Parse a CLI/user-supplied name. Case-insensitive; dashes allowed.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "high-contrast" | "highcontrast" | "high_contrast" => Some(Self::HighContrast),
            _ => None,
        }
    }

    /// Next theme in the cycle (used by the `t` key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Default,
        }
    }
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - Expanded from a `ColorTheme` on startup; never stored.
/// - Colors are semantically meaningful (success/warning/info).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub disabled: Color,

    // Code detail panel
    pub code_text: Color,
    pub code_comment: Color,
}

impl Theme {
    /// Expand a `ColorTheme` selection into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                info: Color::Blue,
                disabled: Color::DarkGray,
                code_text: Color::Green,
                code_comment: Color::DarkGray,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border: Color::Blue,
                accent: Color::Magenta,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
                success: Color::Green,
                warning: Color::Rgb(180, 120, 0),
                info: Color::Blue,
                disabled: Color::Gray,
                code_text: Color::Rgb(0, 100, 0),
                code_comment: Color::Gray,
            },
            ColorTheme::Dark => Self {
                background: Color::Rgb(20, 22, 30),
                text: Color::Rgb(220, 220, 220),
                text_dim: Color::Rgb(130, 130, 140),
                border: Color::Rgb(80, 160, 200),
                accent: Color::Rgb(120, 200, 160),
                highlight_fg: Color::Rgb(20, 22, 30),
                highlight_bg: Color::Rgb(120, 200, 160),
                success: Color::Rgb(120, 200, 120),
                warning: Color::Rgb(230, 180, 80),
                info: Color::Rgb(110, 170, 230),
                disabled: Color::Rgb(90, 90, 100),
                code_text: Color::Rgb(140, 220, 170),
                code_comment: Color::Rgb(110, 110, 120),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::White,
                success: Color::Green,
                warning: Color::Yellow,
                info: Color::Cyan,
                disabled: Color::Gray,
                code_text: Color::White,
                code_comment: Color::Gray,
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorTheme::Default.into()
    }
}

//! Core application state types.

use std::time::Duration;

use grpc_tour_content::{
    ColorTheme,
    constants::{HOVER_REVEAL_MS, STEP_SWITCH_MS},
};

/// Height of the header band (title row plus section tabs).
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the footer band (resources plus key hints).
pub const FOOTER_HEIGHT: u16 = 4;

/// Top-level page sections, shown one at a time under the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Features,
    QuickStart,
    BestPractices,
}

impl Section {
    /// All sections in tab order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Features,
        Section::QuickStart,
        Section::BestPractices,
    ];

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Features => "Features",
            Self::QuickStart => "Quick Start",
            Self::BestPractices => "Best Practices",
        }
    }

    /// Parse a CLI/user-supplied name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "hero" | "home" => Some(Self::Hero),
            "features" => Some(Self::Features),
            "quickstart" | "quick-start" | "quick_start" => Some(Self::QuickStart),
            "practices" | "best-practices" | "bestpractices" => Some(Self::BestPractices),
            _ => None,
        }
    }

    /// Position in the tab order.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Next tab, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Identity of one hover-card trigger on the page.
///
/// Stable across frames: hit-test rectangles are rebuilt every render, but
/// the id they map to never changes, so animation state keyed by id
/// survives re-layout and resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverId {
    /// The inline glossary term in the hero intro.
    Glossary,
    /// A feature card title, by card index.
    Feature(usize),
    /// A quick-start step title, by step index.
    Step(usize),
    /// A best-practice tip, by category and tip index.
    Practice { category: usize, tip: usize },
}

/// Startup options for [`App`](super::App).
///
/// The animation durations exist for tests: zero makes transitions settle
/// on the next tick, a long duration holds them mid-flight.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub theme: ColorTheme,
    pub section: Section,
    pub mouse_enabled: bool,
    pub hover_duration: Duration,
    pub step_duration: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            section: Section::default(),
            mouse_enabled: true,
            hover_duration: Duration::from_millis(HOVER_REVEAL_MS),
            step_duration: Duration::from_millis(STEP_SWITCH_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::BestPractices.next(), Section::Hero);
        assert_eq!(Section::Hero.previous(), Section::BestPractices);
    }

    #[test]
    fn test_section_next_previous_inverse() {
        for section in Section::ALL {
            assert_eq!(section.next().previous(), section);
        }
    }

    #[test]
    fn test_section_from_name() {
        assert_eq!(Section::from_name("quickstart"), Some(Section::QuickStart));
        assert_eq!(Section::from_name("Quick-Start"), Some(Section::QuickStart));
        assert_eq!(Section::from_name("home"), Some(Section::Hero));
        assert_eq!(Section::from_name("pricing"), None);
    }

    #[test]
    fn test_section_titles_unique() {
        let mut titles: Vec<_> = Section::ALL.iter().map(|s| s.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Section::ALL.len());
    }
}

//! Content record types.
//!
//! Plain data carriers for the tour's embedded literal content. Fields are
//! `&'static str` because every value is a compile-time literal; positional
//! index is the only identity any of these records carry.

/// One step of the quick-start guide.
///
/// Order within the step collection is significant: it is both the display
/// order and the implicit identifier used by the step list's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Display title shown in the selector row.
    pub title: &'static str,
    /// Short description shown under the title.
    pub description: &'static str,
    /// Longer explanation revealed by the title's hover card.
    pub explanation: &'static str,
    /// Opaque payload rendered in the detail panel (source-code text).
    pub code: &'static str,
}

/// One feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Revealed by the title's hover card.
    pub details: &'static str,
}

/// Whether a tip is a recommendation or a caution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipKind {
    Recommended,
    Caution,
}

impl TipKind {
    /// Marker shown in front of the tip title.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Recommended => "✓",
            Self::Caution => "!",
        }
    }
}

/// One best-practice tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    /// Revealed by the title's hover card.
    pub details: &'static str,
    pub kind: TipKind,
}

/// A themed group of best-practice tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeCategory {
    pub name: &'static str,
    pub tips: &'static [Tip],
}

/// A further-reading link shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// Hero banner copy, including the glossary entry behind the "gRPC"
/// trigger and the three highlight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub headline: &'static str,
    pub intro: &'static str,
    /// The inline glossary trigger term.
    pub glossary_term: &'static str,
    /// Explanation revealed by the glossary hover card.
    pub glossary_text: &'static str,
    pub highlights: &'static [Feature],
}

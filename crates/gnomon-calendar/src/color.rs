//! Keyword-based display color assignment for synced events.

use crate::event::EventColor;

/// One classification rule: any keyword appearing in the lowercased title
/// selects the color.
pub struct ColorRule {
    pub keywords: &'static [&'static str],
    pub color: EventColor,
}

/// Rules evaluated in order; the first match wins.
pub const COLOR_RULES: [ColorRule; 3] = [
    ColorRule {
        keywords: &["meeting"],
        color: EventColor::Green,
    },
    ColorRule {
        keywords: &["trip", "travel"],
        color: EventColor::Red,
    },
    ColorRule {
        keywords: &["lunch", "dinner"],
        color: EventColor::Blue,
    },
];

/// Color used when no rule matches, and for all post-derived events.
pub const DEFAULT_COLOR: EventColor = EventColor::Purple;

/// Classifies a title by case-insensitive substring match against
/// [`COLOR_RULES`].
#[must_use]
pub fn color_for_title(title: &str) -> EventColor {
    let lowered = title.to_lowercase();
    COLOR_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(DEFAULT_COLOR, |rule| rule.color)
}

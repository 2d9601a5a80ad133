//! Diff-to-icon mapping for the price change column.
use price_common::DiffState;
use strum_macros::Display;

/// Glyph shown in the price change column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    /// Price went up.
    ArrowUp,
    /// Price went down.
    ArrowDown,
    /// No move, or no information.
    Minus,
}

impl Icon {
    /// Single-character glyph for text output.
    pub fn glyph(&self) -> char {
        match self {
            Icon::ArrowUp => '↑',
            Icon::ArrowDown => '↓',
            Icon::Minus => '-',
        }
    }
}

/// Color of the change icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum IconColor {
    /// Up moves.
    Green,
    /// Down moves.
    Red,
    /// Flat or unknown.
    Grey,
}

/// Icon plus color for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffIcon {
    /// Glyph.
    pub icon: Icon,
    /// Color.
    pub color: IconColor,
}

/// Map a diff (or its absence) to the icon shown next to the price.
///
/// A missing diff renders exactly like `same`.
pub fn icon_for(diff: Option<DiffState>) -> DiffIcon {
    let (icon, color) = match diff {
        Some(DiffState::Up) => (Icon::ArrowUp, IconColor::Green),
        Some(DiffState::Down) => (Icon::ArrowDown, IconColor::Red),
        Some(DiffState::Same) | None => (Icon::Minus, IconColor::Grey),
    };
    DiffIcon { icon, color }
}

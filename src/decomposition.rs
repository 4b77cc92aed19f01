//! Composition types, component positions and the component-position extractor

use crate::catalog::CharacterRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Right-component value meaning "no right component"
pub const NO_COMPONENT: &str = "*";

/// Structural pattern combining a character's two component slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositionType {
    /// Graphical primitive, only the left component is meaningful
    Primitive,
    /// Left-right composition
    Horizontal,
    /// Top-bottom composition
    Vertical,
    /// Second component enclosed by the first (门, 囗, 匚...)
    Inclusion,
    /// Top-bottom composition whose top part is a repetition
    VerticalRepetition,
    /// Three side by side, the third repeating the first
    HorizontalOfThree,
    RepetitionOfThree,
    RepetitionOfFour,
    /// Top-bottom composition separated by 冖
    VerticalSeparated,
    /// Graphical superposition or addition
    Superposition,
}

impl CompositionType {
    pub const ALL: [CompositionType; 10] = [
        Self::Primitive,
        Self::Horizontal,
        Self::Vertical,
        Self::Inclusion,
        Self::VerticalRepetition,
        Self::HorizontalOfThree,
        Self::RepetitionOfThree,
        Self::RepetitionOfFour,
        Self::VerticalSeparated,
        Self::Superposition,
    ];

    /// Symbol used for this composition type in the decomposition database
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Primitive => "一",
            Self::Horizontal => "吅",
            Self::Vertical => "吕",
            Self::Inclusion => "回",
            Self::VerticalRepetition => "咒",
            Self::HorizontalOfThree => "弼",
            Self::RepetitionOfThree => "品",
            Self::RepetitionOfFour => "叕",
            Self::VerticalSeparated => "冖",
            Self::Superposition => "+",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Primitive => "Primitive",
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::Inclusion => "Inclusion",
            Self::VerticalRepetition => "VerticalRepetition",
            Self::HorizontalOfThree => "HorizontalOfThree",
            Self::RepetitionOfThree => "RepetitionOfThree",
            Self::RepetitionOfFour => "RepetitionOfFour",
            Self::VerticalSeparated => "VerticalSeparated",
            Self::Superposition => "Superposition",
        }
    }

    /// Parse a database symbol (`吅`) or variant name (`horizontal`)
    ///
    /// Returns `None` for anything else; such characters contribute no
    /// components.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.symbol() == value || t.name().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for CompositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural slot a component occupies within a character
///
/// Declaration order is the tie-break order used when ordering clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Primitive,
    Left,
    Right,
    Top,
    Bottom,
    Outer,
    Inner,
    Middle,
    TopRepeated,
    BottomRepeated,
    SuperPrimary,
    SuperSecondary,
}

impl Position {
    /// Human-readable label used in reports
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Outer => "outer",
            Self::Inner => "inner",
            Self::Middle => "middle",
            Self::TopRepeated => "top repeated",
            Self::BottomRepeated => "bottom repeated",
            Self::SuperPrimary => "primary",
            Self::SuperSecondary => "secondary",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Components of one character and the positions each occupies
pub type Placements<'a> = BTreeMap<&'a str, BTreeSet<Position>>;

/// Positions of the left and right component for a composition type
///
/// An empty right slice means the type has no right component.
fn slot_positions(composition: CompositionType) -> (&'static [Position], &'static [Position]) {
    use Position as P;

    match composition {
        CompositionType::Primitive => (&[P::Primitive], &[]),
        CompositionType::Horizontal => (&[P::Left], &[P::Right]),
        CompositionType::Vertical => (&[P::Top], &[P::Bottom]),
        CompositionType::Inclusion => (&[P::Outer], &[P::Inner]),
        CompositionType::VerticalRepetition => (&[P::TopRepeated], &[P::Bottom]),
        CompositionType::HorizontalOfThree => (&[P::Left, P::Right], &[P::Middle]),
        CompositionType::RepetitionOfThree => (&[P::Top], &[]),
        CompositionType::RepetitionOfFour => (&[P::TopRepeated], &[]),
        CompositionType::VerticalSeparated => (&[P::Top], &[P::Bottom]),
        CompositionType::Superposition => (&[P::SuperPrimary], &[P::SuperSecondary]),
    }
}

/// Derive the (component, position) pairs a character contributes
///
/// A right component of `*` is ignored. When both slots name the same
/// component their positions are merged rather than the right slot
/// replacing the left, so 林 (木 + 木) counts under both left and right.
pub fn extract(record: &CharacterRecord) -> Placements<'_> {
    let mut placements = Placements::new();

    let Some(composition) = record.composition_type else {
        return placements;
    };

    let (left, right) = slot_positions(composition);

    if !left.is_empty() {
        placements
            .entry(record.left_component.as_str())
            .or_default()
            .extend(left.iter().copied());
    }

    if !right.is_empty() && record.right_component != NO_COMPONENT {
        placements
            .entry(record.right_component.as_str())
            .or_default()
            .extend(right.iter().copied());
    }

    placements
}

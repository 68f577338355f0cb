//! Named opening shapes formed by the first three stones
//!
//! The label is informational only; it never affects legality. Shapes are
//! tested in a fixed order and the first match wins.

use std::fmt;

use crate::board::{Move, Pos};

/// The four recognized three-stone openings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningPattern {
    /// L shape, both legs two apart: 1 and 2 share a line, 2 and 3 cross it
    FlowerMoon,
    /// 1 and 2 two apart on a line, 3 diagonally next to 2
    ReedMoon,
    /// Straight line, each neighbour two apart
    RainMoon,
    /// 1 and 2 diagonal neighbours, 3 two apart from 1 on a line
    PuMoon,
}

impl OpeningPattern {
    /// Priority order used by [`OpeningPattern::classify`]
    pub const ALL: [OpeningPattern; 4] = [
        OpeningPattern::FlowerMoon,
        OpeningPattern::ReedMoon,
        OpeningPattern::RainMoon,
        OpeningPattern::PuMoon,
    ];

    /// Short name reported with a match
    pub fn name(self) -> &'static str {
        match self {
            OpeningPattern::FlowerMoon => "HuaYue",
            OpeningPattern::ReedMoon => "PuYue",
            OpeningPattern::RainMoon => "YuYue",
            OpeningPattern::PuMoon => "PuuYue",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            OpeningPattern::FlowerMoon => "Flower Moon",
            OpeningPattern::ReedMoon => "Reed Moon",
            OpeningPattern::RainMoon => "Rain Moon",
            OpeningPattern::PuMoon => "Pu Moon",
        }
    }

    /// Does `(first, second, third)`, in play order, form this shape?
    pub fn matches(self, first: Pos, second: Pos, third: Pos) -> bool {
        match self {
            OpeningPattern::FlowerMoon => is_flower_moon(first, second, third),
            OpeningPattern::ReedMoon => is_reed_moon(first, second, third),
            OpeningPattern::RainMoon => is_rain_moon(first, second, third),
            OpeningPattern::PuMoon => is_pu_moon(first, second, third),
        }
    }

    /// First shape in priority order matching the three stones
    pub fn classify(first: Pos, second: Pos, third: Pos) -> Option<OpeningPattern> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.matches(first, second, third))
    }
}

impl fmt::Display for OpeningPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.english_name(), self.name())
    }
}

/// Result of classifying a move history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningClassification {
    /// Fewer than three moves played
    Undetermined,
    /// Three moves played, no named shape
    Unrecognized,
    Matched(OpeningPattern),
}

impl OpeningClassification {
    #[inline]
    pub fn is_matched(self) -> bool {
        matches!(self, OpeningClassification::Matched(_))
    }

    #[inline]
    pub fn pattern(self) -> Option<OpeningPattern> {
        match self {
            OpeningClassification::Matched(pattern) => Some(pattern),
            _ => None,
        }
    }

    pub fn pattern_name(self) -> Option<&'static str> {
        self.pattern().map(OpeningPattern::name)
    }
}

/// Classify the opening from the first three moves of `history`
pub fn classify_opening(history: &[Move]) -> OpeningClassification {
    match history {
        [first, second, third, ..] => match OpeningPattern::classify(first.pos, second.pos, third.pos) {
            Some(pattern) => OpeningClassification::Matched(pattern),
            None => OpeningClassification::Unrecognized,
        },
        _ => OpeningClassification::Undetermined,
    }
}

#[inline]
fn gap(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

#[inline]
fn diagonal_neighbours(a: Pos, b: Pos) -> bool {
    gap(a.row, b.row) == 1 && gap(a.col, b.col) == 1
}

fn is_flower_moon(first: Pos, second: Pos, third: Pos) -> bool {
    if first.row == second.row && second.col == third.col {
        return gap(first.col, second.col) == 2 && gap(second.row, third.row) == 2;
    }
    if first.col == second.col && second.row == third.row {
        return gap(first.row, second.row) == 2 && gap(second.col, third.col) == 2;
    }
    false
}

fn is_reed_moon(first: Pos, second: Pos, third: Pos) -> bool {
    // A shared row decides the shape; the column case is only tried otherwise
    if first.row == second.row {
        return gap(first.col, second.col) == 2 && diagonal_neighbours(second, third);
    }
    if first.col == second.col {
        return gap(first.row, second.row) == 2 && diagonal_neighbours(second, third);
    }
    false
}

fn is_rain_moon(first: Pos, second: Pos, third: Pos) -> bool {
    let on_row = first.row == second.row
        && second.row == third.row
        && gap(first.col, second.col) == 2
        && gap(second.col, third.col) == 2;
    let on_col = first.col == second.col
        && second.col == third.col
        && gap(first.row, second.row) == 2
        && gap(second.row, third.row) == 2;
    on_row || on_col
}

fn is_pu_moon(first: Pos, second: Pos, third: Pos) -> bool {
    diagonal_neighbours(first, second)
        && ((first.row == third.row && gap(first.col, third.col) == 2)
            || (first.col == third.col && gap(first.row, third.row) == 2))
}

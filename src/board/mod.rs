//! Board representation for Renju

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, BoardError, Probe};

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;
/// Smallest board that can still hold a five
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board the coordinate labels (A-S) cover
pub const MAX_BOARD_SIZE: usize = 19;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    /// First to move, subject to the forbidden-move rules
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row/col reached after `steps` along `axis` (negative steps walk backward).
    /// May be off-board; callers check with [`Board::contains`].
    #[inline]
    pub fn offset(self, axis: Axis, steps: i32) -> (i32, i32) {
        let (dr, dc) = axis.delta();
        (self.row as i32 + dr * steps, self.col as i32 + dc * steps)
    }

    /// Human-readable coordinate, column letter then 1-based row ("H8")
    pub fn notation(self) -> String {
        format!("{}{}", (b'A' + self.col) as char, self.row as u32 + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// One of the four line families through a cell.
///
/// Each axis is an opposing pair of unit vectors; [`Axis::delta`] is the
/// positive member as `(d_row, d_col)`, the negative member is its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Positive unit step as `(d_row, d_col)`
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (-1, 1),
        }
    }
}

/// A committed move: where, by whom, and its 1-based ordinal in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
    pub number: usize,
}

impl Move {
    pub fn new(pos: Pos, stone: Stone, number: usize) -> Self {
        Self { pos, stone, number }
    }
}

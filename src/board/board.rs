//! Board structure and the scoped probe used by rule evaluation

use std::ops::Deref;

use thiserror::Error;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Board construction errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {0} is outside 5..=19")]
    InvalidSize(usize),
}

/// Square game board, one occupancy bitboard per color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Standard 15x15 Renju board
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE)
    }

    /// Board with a custom side length
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            black: Bitboard::new(size * size),
            white: Bitboard::new(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Check whether signed coordinates fall on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Position for signed coordinates, `None` when off-board
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        self.contains(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Stone at signed coordinates, `None` when off-board
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<Stone> {
        self.pos_at(row, col).map(|pos| self.get(pos))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Overwrite a cell; each cell holds exactly one state afterwards
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.set(pos, stone);
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.set(pos, Stone::Empty);
    }

    /// Temporarily put `stone` at `pos`.
    ///
    /// The returned guard reads as the modified board and puts the previous
    /// cell value back when dropped, whichever way the caller leaves scope.
    pub fn probe(&mut self, pos: Pos, stone: Stone) -> Probe<'_> {
        let previous = self.get(pos);
        self.set(pos, stone);
        Probe {
            board: self,
            pos,
            previous,
        }
    }

    /// Iterate over every position, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let n = self.size as u8;
        (0..n).flat_map(move |row| (0..n).map(move |col| Pos::new(row, col)))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Remove all stones
    pub fn clear(&mut self) {
        self.black.reset();
        self.white.reset();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A hypothetical stone on a borrowed board; see [`Board::probe`]
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Stone,
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, self.previous);
    }
}

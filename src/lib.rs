//! Renju rule engine
//!
//! Five-in-a-row on a 15x15 board where Black, the first to move, is barred
//! from three move shapes:
//! - Double-three: two open threes made by one stone
//! - Double-four: two fours made by one stone
//! - Overline: six or more in an unbroken line
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Forbidden-move evaluator, opening classifier, win detection
//! - [`ui`]: Game state and the egui front end
//!
//! # Quick Start
//!
//! ```
//! use renju::{Board, Pos, Stone};
//! use renju::rules::{forbidden_kind, ForbiddenKind};
//!
//! let mut board = Board::new();
//! for col in 2..7 {
//!     board.place_stone(Pos::new(7, col), Stone::Black);
//! }
//!
//! // Black at H8 would make six in a row
//! assert_eq!(forbidden_kind(&mut board, Pos::new(7, 7)), Some(ForbiddenKind::Overline));
//! // The probe stone is gone again
//! assert!(board.is_empty(Pos::new(7, 7)));
//! ```
//!
//! The evaluator borrows the board mutably only to place a hypothetical
//! stone; it restores the cell before returning on every path.

pub mod board;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Axis, Board, BoardError, Move, Pos, Stone, BOARD_SIZE};
pub use rules::{classify_opening, is_forbidden, ForbiddenKind, OpeningClassification, OpeningPattern};

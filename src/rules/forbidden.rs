//! Forbidden moves for the restricted color (Black)
//!
//! Black may not play a move that makes:
//! - two or more open threes at once (double-three)
//! - two or more fours at once (double-four)
//! - six or more stones in an unbroken line (overline)
//!
//! White is unrestricted. The evaluator never checks whose turn it is; the
//! game loop only calls it for Black's candidate moves.
//!
//! Each check puts a hypothetical Black stone on the candidate cell through
//! [`Board::probe`], so the board is identical afterwards on every path.

use std::fmt;

use crate::board::{Axis, Board, Pos, Stone};

use super::line::{run_length, span, sweep};
use super::patterns::{find_shape, FOURS, OPEN_THREES};

/// The color bound by the forbidden-move rules
pub const RESTRICTED: Stone = Stone::Black;

/// Forward reach of the open-three sweep
const THREE_REACH: i32 = 3;
/// Cells collected walking back for the open-three check
const THREE_LEN: i32 = 7;
/// Half-width of the four check's line
const FOUR_RADIUS: i32 = 4;
/// How far the overline walk looks each way
const OVERLINE_REACH: i32 = 5;

/// Which sub-rule makes a move forbidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForbiddenKind {
    DoubleThree,
    DoubleFour,
    Overline,
}

impl fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForbiddenKind::DoubleThree => "double-three",
            ForbiddenKind::DoubleFour => "double-four",
            ForbiddenKind::Overline => "overline",
        };
        f.write_str(name)
    }
}

/// Does the line through `pos` on `axis` hold an open three?
/// Expects the candidate stone to be on the board already.
pub fn is_open_three(board: &Board, pos: Pos, axis: Axis) -> bool {
    let line = sweep(board, pos, axis, THREE_REACH, THREE_LEN);
    find_shape(&line, &OPEN_THREES).is_some()
}

/// Does the line through `pos` on `axis` hold a four?
/// Expects the candidate stone to be on the board already.
pub fn is_four(board: &Board, pos: Pos, axis: Axis) -> bool {
    let line = span(board, pos, axis, FOUR_RADIUS);
    find_shape(&line, &FOURS).is_some()
}

/// Length of the unbroken `stone` run through `pos` on `axis`, counting `pos`
fn run_through(board: &Board, pos: Pos, axis: Axis, stone: Stone) -> usize {
    1 + run_length(board, pos, axis, true, stone, OVERLINE_REACH)
        + run_length(board, pos, axis, false, stone, OVERLINE_REACH)
}

/// Count axes satisfying `check` with Black on `pos`, stopping at two
fn count_axes(board: &mut Board, pos: Pos, check: fn(&Board, Pos, Axis) -> bool) -> u8 {
    let probe = board.probe(pos, RESTRICTED);
    let mut count = 0;

    for axis in Axis::ALL {
        if check(&probe, pos, axis) {
            count += 1;
            // Early exit: forbidden only needs 2
            if count >= 2 {
                break;
            }
        }
    }

    count
}

/// Count open threes Black would make at `pos` (0, 1 or 2; stops at 2)
pub fn count_open_threes(board: &mut Board, pos: Pos) -> u8 {
    count_axes(board, pos, is_open_three)
}

/// Count fours Black would make at `pos` (0, 1 or 2; stops at 2)
pub fn count_fours(board: &mut Board, pos: Pos) -> u8 {
    count_axes(board, pos, is_four)
}

/// Black at `pos` makes open threes on two or more axes
pub fn is_double_three(board: &mut Board, pos: Pos) -> bool {
    count_open_threes(board, pos) >= 2
}

/// Black at `pos` makes fours on two or more axes
pub fn is_double_four(board: &mut Board, pos: Pos) -> bool {
    count_fours(board, pos) >= 2
}

/// Black at `pos` makes six or more in a row on some axis
pub fn is_overline(board: &mut Board, pos: Pos) -> bool {
    let probe = board.probe(pos, RESTRICTED);
    Axis::ALL
        .iter()
        .any(|&axis| run_through(&probe, pos, axis, RESTRICTED) > 5)
}

/// The first sub-rule (double-three, double-four, overline) that forbids
/// Black at `pos`, or `None` if the move is legal.
///
/// # Panics
///
/// If `pos` is off the board or already occupied.
pub fn forbidden_kind(board: &mut Board, pos: Pos) -> Option<ForbiddenKind> {
    assert!(
        board.contains(pos.row as i32, pos.col as i32),
        "forbidden-move check off the board at {:?}",
        pos
    );
    assert!(
        board.is_empty(pos),
        "forbidden-move check on occupied cell {:?}",
        pos
    );

    let kind = if is_double_three(board, pos) {
        Some(ForbiddenKind::DoubleThree)
    } else if is_double_four(board, pos) {
        Some(ForbiddenKind::DoubleFour)
    } else if is_overline(board, pos) {
        Some(ForbiddenKind::Overline)
    } else {
        None
    };

    if let Some(kind) = kind {
        log::trace!("{} forbidden for Black: {}", pos.notation(), kind);
    }
    kind
}

/// Would Black playing at `pos` be illegal?
///
/// The board is borrowed mutably for the hypothetical stone and is unchanged
/// when this returns.
///
/// # Panics
///
/// If `pos` is off the board or already occupied.
pub fn is_forbidden(board: &mut Board, pos: Pos) -> bool {
    forbidden_kind(board, pos).is_some()
}

/// Check if a move is valid for `stone`
///
/// A move is valid if:
/// 1. The position is on the board and empty
/// 2. For Black, it is not forbidden
pub fn is_valid_move(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    if !board.contains(pos.row as i32, pos.col as i32) || !board.is_empty(pos) {
        return false;
    }

    stone != RESTRICTED || !is_forbidden(board, pos)
}

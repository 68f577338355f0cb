//! Win condition checking for Renju
//!
//! White wins with five or more in a row. Black wins only with exactly five;
//! six or more is an overline, which the forbidden-move check already rejects.

use crate::board::{Axis, Board, Pos, Stone};

/// Whether a run of `len` stones of `stone` wins
#[inline]
fn is_winning_run(stone: Stone, len: usize) -> bool {
    match stone {
        Stone::Black => len == 5,
        Stone::White => len >= 5,
        Stone::Empty => false,
    }
}

/// The full unbroken run of `stone` through `pos` on `axis`, in line order
fn run_positions(board: &Board, pos: Pos, axis: Axis, stone: Stone) -> Vec<Pos> {
    let mut line = vec![pos];

    // Extend in negative direction first
    for i in 1.. {
        let (r, c) = pos.offset(axis, -i);
        match board.pos_at(r, c) {
            Some(prev) if board.get(prev) == stone => line.insert(0, prev),
            _ => break,
        }
    }

    // Extend in positive direction
    for i in 1.. {
        let (r, c) = pos.offset(axis, i);
        match board.pos_at(r, c) {
            Some(next) if board.get(next) == stone => line.push(next),
            _ => break,
        }
    }

    line
}

/// Winning line through the stone just played at `pos`, if any.
///
/// Returns the first five stones of the run for highlighting.
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<[Pos; 5]> {
    let stone = board.get(pos);
    if stone == Stone::Empty {
        return None;
    }

    Axis::ALL.iter().find_map(|&axis| {
        let line = run_positions(board, pos, axis, stone);
        if is_winning_run(stone, line.len()) {
            Some([line[0], line[1], line[2], line[3], line[4]])
        } else {
            None
        }
    })
}

/// Fast check: does the stone at `pos` complete a winning row?
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos) -> bool {
    find_winning_line(board, pos).is_some()
}

/// Scan the whole board for a winner
pub fn check_winner(board: &Board) -> Option<Stone> {
    board
        .positions()
        .find(|&pos| is_winning_move(board, pos))
        .map(|pos| board.get(pos))
}

//! Line extraction along an axis
//!
//! Both extractors clip at the board edge: a line near a border is simply
//! shorter, it never wraps.

use crate::board::{Axis, Board, Pos, Stone};

/// Forward-then-backward sweep through `pos`.
///
/// Walks up to `reach` steps along the positive direction of `axis`, stopping
/// at the edge, then collects up to `len` cells walking back from that far
/// end. The far end is at most `reach` steps away, so with `len > reach` the
/// returned line always passes through `pos`.
pub fn sweep(board: &Board, pos: Pos, axis: Axis, reach: i32, len: i32) -> Vec<Stone> {
    let far = (0..=reach)
        .map_while(|i| {
            let (r, c) = pos.offset(axis, i);
            board.contains(r, c).then_some(i)
        })
        .last()
        .unwrap_or(0);

    (0..len)
        .map_while(|i| {
            let (r, c) = pos.offset(axis, far - i);
            board.cell(r, c)
        })
        .collect()
}

/// Cells from `-radius` to `+radius` steps around `pos`, in that order,
/// skipping the off-board ones.
pub fn span(board: &Board, pos: Pos, axis: Axis, radius: i32) -> Vec<Stone> {
    (-radius..=radius)
        .filter_map(|i| {
            let (r, c) = pos.offset(axis, i);
            board.cell(r, c)
        })
        .collect()
}

/// Count `stone` cells contiguous with `pos` walking one way, up to `limit` steps
pub fn run_length(board: &Board, pos: Pos, axis: Axis, forward: bool, stone: Stone, limit: i32) -> usize {
    let sign = if forward { 1 } else { -1 };
    (1..=limit)
        .take_while(|&i| {
            let (r, c) = pos.offset(axis, sign * i);
            board.cell(r, c) == Some(stone)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone::{Black as B, Empty as E, White as W};

    #[test]
    fn test_sweep_open_board_centre() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 10), Stone::Black);
        board.place_stone(Pos::new(7, 4), Stone::White);

        // Far end is 3 steps forward (col 10), then 7 cells back to col 4
        let line = sweep(&board, Pos::new(7, 7), Axis::Horizontal, 3, 7);
        assert_eq!(line, vec![B, E, E, E, E, E, W]);
    }

    #[test]
    fn test_sweep_clipped_forward() {
        let board = Board::new();
        // Col 13 can only walk one step forward before the edge
        let line = sweep(&board, Pos::new(7, 13), Axis::Horizontal, 3, 7);
        assert_eq!(line.len(), 7);

        // At the last column the far end is the cell itself
        let line = sweep(&board, Pos::new(7, 14), Axis::Horizontal, 3, 7);
        assert_eq!(line.len(), 7);
    }

    #[test]
    fn test_sweep_clipped_backward() {
        let board = Board::new();
        // Far end col 4, walking back reaches col 0 after 5 cells
        let line = sweep(&board, Pos::new(7, 1), Axis::Horizontal, 3, 7);
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_sweep_corner() {
        let board = Board::new();
        let line = sweep(&board, Pos::new(0, 0), Axis::AntiDiagonal, 3, 7);
        // Anti-diagonal goes up-right: row -1 is off-board immediately
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn test_span_centre_and_edge() {
        let mut board = Board::new();
        board.place_stone(Pos::new(3, 7), Stone::Black);
        let line = span(&board, Pos::new(7, 7), Axis::Vertical, 4);
        assert_eq!(line.len(), 9);
        assert_eq!(line[0], B);

        let line = span(&board, Pos::new(0, 0), Axis::Diagonal, 4);
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_run_length() {
        let mut board = Board::new();
        for col in 3..7 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }
        board.place_stone(Pos::new(7, 8), Stone::Black);

        let pos = Pos::new(7, 7);
        assert_eq!(run_length(&board, pos, Axis::Horizontal, false, Stone::Black, 5), 4);
        assert_eq!(run_length(&board, pos, Axis::Horizontal, true, Stone::Black, 5), 1);
        assert_eq!(run_length(&board, pos, Axis::Vertical, true, Stone::Black, 5), 0);
    }

    #[test]
    fn test_run_length_stops_at_limit_and_edge() {
        let mut board = Board::new();
        for col in 0..7 {
            board.place_stone(Pos::new(0, col), Stone::Black);
        }
        let pos = Pos::new(0, 7);
        assert_eq!(run_length(&board, pos, Axis::Horizontal, false, Stone::Black, 5), 5);
        assert_eq!(run_length(&board, Pos::new(0, 0), Axis::Horizontal, false, Stone::Black, 5), 0);
    }
}

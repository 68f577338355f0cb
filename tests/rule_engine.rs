//! Whole-board checks of the forbidden-move evaluator and opening classifier

use renju::rules::{forbidden_kind, is_forbidden, ForbiddenKind};
use renju::{classify_opening, Board, Move, OpeningClassification, OpeningPattern, Pos, Stone};

fn board_with(size: usize, black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
    let mut board = Board::with_size(size).unwrap();
    for &(r, c) in black {
        board.place_stone(Pos::new(r, c), Stone::Black);
    }
    for &(r, c) in white {
        board.place_stone(Pos::new(r, c), Stone::White);
    }
    board
}

/// The eight rotations and reflections of the square, about H8
fn transform(r: u8, c: u8, k: u8) -> (u8, u8) {
    let (mut dr, mut dc) = (r as i32 - 7, c as i32 - 7);
    if k & 1 != 0 {
        std::mem::swap(&mut dr, &mut dc);
    }
    if k & 2 != 0 {
        dr = -dr;
    }
    if k & 4 != 0 {
        dc = -dc;
    }
    ((7 + dr) as u8, (7 + dc) as u8)
}

fn empty_cells(board: &Board) -> Vec<Pos> {
    board.positions().filter(|&p| board.is_empty(p)).collect()
}

const MIDGAME_BLACK: &[(u8, u8)] = &[
    (7, 4), (7, 5), (7, 6), (4, 4), (5, 5), (6, 6), (10, 2), (10, 3), (10, 4), (10, 6),
    (2, 10), (3, 10), (4, 10), (12, 12), (13, 12),
];
const MIDGAME_WHITE: &[(u8, u8)] = &[
    (7, 9), (8, 8), (9, 9), (3, 3), (11, 11), (2, 2), (5, 10), (0, 14),
];

#[test]
fn test_board_unchanged_after_every_evaluation() {
    let fixtures = [
        board_with(15, MIDGAME_BLACK, MIDGAME_WHITE),
        board_with(15, &[(0, 0), (0, 1), (1, 0), (14, 14), (13, 14), (0, 14)], &[(1, 1)]),
        board_with(5, &[(0, 0), (2, 2), (4, 4)], &[(1, 1), (3, 3)]),
        board_with(19, &[(9, 9), (9, 10), (10, 9)], &[(18, 18)]),
    ];

    for mut board in fixtures {
        let before = board.clone();
        for pos in empty_cells(&before) {
            forbidden_kind(&mut board, pos);
            assert_eq!(board, before, "board changed after evaluating {}", pos.notation());
        }
    }
}

#[test]
fn test_midgame_forbidden_points() {
    let mut board = board_with(15, MIDGAME_BLACK, MIDGAME_WHITE);
    let flagged: Vec<(Pos, ForbiddenKind)> = empty_cells(&board.clone())
        .into_iter()
        .filter_map(|pos| forbidden_kind(&mut board, pos).map(|kind| (pos, kind)))
        .collect();

    // The double-four at H8 is defused by White on I9
    assert_eq!(flagged, vec![(Pos::new(9, 4), ForbiddenKind::DoubleThree)]);
}

#[test]
fn test_double_four_symmetric() {
    let black = [(7, 4), (7, 5), (7, 6), (4, 4), (5, 5), (6, 6)];
    for k in 0..8 {
        let stones: Vec<(u8, u8)> = black.iter().map(|&(r, c)| transform(r, c, k)).collect();
        let mut board = board_with(15, &stones, &[]);
        let (r, c) = transform(7, 7, k);
        assert_eq!(
            forbidden_kind(&mut board, Pos::new(r, c)),
            Some(ForbiddenKind::DoubleFour),
            "symmetry {}",
            k
        );
    }
}

#[test]
fn test_overline_symmetric() {
    let black = [(7, 3), (7, 4), (7, 5), (7, 6), (7, 8)];
    for k in 0..8 {
        let stones: Vec<(u8, u8)> = black.iter().map(|&(r, c)| transform(r, c, k)).collect();
        let mut board = board_with(15, &stones, &[]);
        let (r, c) = transform(7, 7, k);
        assert_eq!(
            forbidden_kind(&mut board, Pos::new(r, c)),
            Some(ForbiddenKind::Overline),
            "symmetry {}",
            k
        );
    }
}

#[test]
fn test_single_open_four_allowed() {
    let mut board = board_with(15, &[(7, 4), (7, 5), (7, 6)], &[]);
    assert!(!is_forbidden(&mut board, Pos::new(7, 7)));
}

#[test]
fn test_corners_never_flagged_on_sparse_boards() {
    for size in [5, 15, 19] {
        let n = size as u8;
        let black = [(0, 0), (0, 1), (1, 0), (n - 1, n - 1), (n - 2, n - 1), (0, n - 1)];
        let mut board = board_with(size, &black, &[]);
        for pos in empty_cells(&board.clone()) {
            assert!(!is_forbidden(&mut board, pos), "{} on {}x{}", pos.notation(), size, size);
        }
    }
}

#[test]
fn test_overline_along_edges() {
    let mut board = board_with(15, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 6)], &[]);
    assert_eq!(forbidden_kind(&mut board, Pos::new(0, 5)), Some(ForbiddenKind::Overline));

    let mut board = board_with(15, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], &[]);
    assert_eq!(forbidden_kind(&mut board, Pos::new(5, 5)), Some(ForbiddenKind::Overline));
    assert_eq!(forbidden_kind(&mut board, Pos::new(14, 14)), None);
}

#[test]
fn test_smallest_board_every_cell() {
    // A 5x5 line is only ever five long, so nothing is an overline
    let mut board = board_with(5, &[(2, 0), (2, 1), (2, 3), (2, 4)], &[]);
    assert_eq!(forbidden_kind(&mut board, Pos::new(2, 2)), None);
}

fn history(points: &[(u8, u8)]) -> Vec<Move> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(r, c))| {
            let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
            Move::new(Pos::new(r, c), stone, i + 1)
        })
        .collect()
}

#[test]
fn test_opening_classification_is_deterministic() {
    for a in 5..10u8 {
        for b in 5..10u8 {
            let moves = history(&[(7, 7), (a, b), (b, a)]);
            let first = classify_opening(&moves);
            assert_eq!(first, classify_opening(&moves));

            let expected = OpeningPattern::ALL
                .into_iter()
                .find(|p| p.matches(moves[0].pos, moves[1].pos, moves[2].pos));
            assert_eq!(first.pattern(), expected);
        }
    }
}

#[test]
fn test_opening_ignores_later_moves() {
    let three = history(&[(7, 7), (7, 9), (9, 9)]);
    let more = history(&[(7, 7), (7, 9), (9, 9), (0, 0), (14, 14)]);
    assert_eq!(classify_opening(&three), classify_opening(&more));
    assert_eq!(classify_opening(&three), OpeningClassification::Matched(OpeningPattern::FlowerMoon));
}

#[test]
fn test_opening_needs_three_moves() {
    assert_eq!(classify_opening(&[]), OpeningClassification::Undetermined);
    assert_eq!(classify_opening(&history(&[(7, 7), (7, 8)])), OpeningClassification::Undetermined);
    assert_eq!(
        classify_opening(&history(&[(0, 0), (14, 14), (7, 0)])),
        OpeningClassification::Unrecognized
    );
}

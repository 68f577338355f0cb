use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_notation() {
    assert_eq!(Pos::new(7, 7).notation(), "H8");
    assert_eq!(Pos::new(0, 0).notation(), "A1");
    assert_eq!(Pos::new(14, 14).notation(), "O15");
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.offset(Axis::Horizontal, 2), (7, 9));
    assert_eq!(pos.offset(Axis::Vertical, -3), (4, 7));
    assert_eq!(pos.offset(Axis::Diagonal, 1), (8, 8));
    assert_eq!(pos.offset(Axis::AntiDiagonal, 1), (6, 8));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_defaults() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(BOARD_SIZE, 15);
    assert!(board.is_board_empty());
    assert_eq!(board.positions().count(), 225);
}

#[test]
fn test_board_with_size_bounds() {
    assert!(Board::with_size(MIN_BOARD_SIZE).is_ok());
    assert!(Board::with_size(MAX_BOARD_SIZE).is_ok());
    assert_eq!(Board::with_size(4), Err(BoardError::InvalidSize(4)));
    assert_eq!(Board::with_size(20), Err(BoardError::InvalidSize(20)));
}

#[test]
fn test_board_contains() {
    let board = Board::new();
    assert!(board.contains(0, 0));
    assert!(board.contains(14, 14));
    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, -1));
    assert!(!board.contains(15, 0));
    assert!(!board.contains(0, 15));
    assert_eq!(board.cell(15, 3), None);
    assert_eq!(board.cell(3, 3), Some(Stone::Empty));
}

#[test]
fn test_set_overwrites_cell() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);

    board.set(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_probe_restores_on_drop() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 6), Stone::White);
    let before = board.clone();

    {
        let probe = board.probe(Pos::new(7, 7), Stone::Black);
        assert_eq!(probe.get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(probe.stone_count(), 2);
    }

    assert_eq!(board, before);
}

#[test]
fn test_probe_restores_previous_value() {
    let mut board = Board::new();
    let pos = Pos::new(0, 0);
    board.place_stone(pos, Stone::White);

    {
        let probe = board.probe(pos, Stone::Black);
        assert_eq!(probe.get(pos), Stone::Black);
    }

    assert_eq!(board.get(pos), Stone::White);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    board.place_stone(Pos::new(1, 1), Stone::Black);
    board.place_stone(Pos::new(2, 2), Stone::White);
    board.clear();
    assert!(board.is_board_empty());
}

//! Board tests

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: i16 = BOARD_WIDTH as i16;
const H: i16 = BOARD_HEIGHT as i16;

fn fill_row(board: &mut Board, y: i16, kind: PieceKind) {
    for x in 0..board.width() as i16 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH as u16);
    assert_eq!(board.height(), BOARD_HEIGHT as u16);

    for y in 0..H {
        for x in 0..W {
            assert_eq!(board.get(x, y), Some(None), "({x}, {y})");
        }
    }
}

#[test]
fn test_board_custom_size() {
    let board = Board::new(6, 8);
    assert_eq!((board.width(), board.height()), (6, 8));
    assert_eq!(board.cells().len(), 48);
    assert_eq!(board.rows().count(), 8);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(W, 0), None);
    assert_eq!(board.get(0, H), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, H, Some(PieceKind::T)));
}

#[test]
fn test_valid_placement_walls_floor_and_overlap() {
    let mut board = Board::default();
    board.set(5, 10, Some(PieceKind::T));

    assert!(board.is_valid_placement(&[(0, 0), (W - 1, H - 1)]));
    assert!(!board.is_valid_placement(&[(-1, 5)]));
    assert!(!board.is_valid_placement(&[(W, 5)]));
    assert!(!board.is_valid_placement(&[(3, H)]));
    assert!(!board.is_valid_placement(&[(4, 10), (5, 10)]));
}

#[test]
fn test_lock_writes_kind() {
    let mut board = Board::default();
    board.lock(&[(3, 5), (4, 5), (3, 6), (4, 6)], PieceKind::O);

    assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::default();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    fill_row(&mut board, 6, PieceKind::I);
    board.set(W - 1, 6, None);
    assert!(!board.is_row_full(6));

    assert!(!board.is_row_full(H as usize));
}

#[test]
fn test_incomplete_row_is_not_cleared() {
    let mut board = Board::default();
    fill_row(&mut board, H - 1, PieceKind::I);
    board.set(4, H - 1, None);
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_shifts_rows_above_down() {
    let mut board = Board::default();
    fill_row(&mut board, 18, PieceKind::I);
    fill_row(&mut board, 19, PieceKind::O);
    board.set(0, 17, Some(PieceKind::T));

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.height(), BOARD_HEIGHT as u16);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 5, PieceKind::T);
    fill_row(&mut board, 10, PieceKind::I);
    fill_row(&mut board, 15, PieceKind::O);

    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    assert_eq!(board.clear_full_lines(), 3);

    // Each marker drops by the number of cleared rows below it.
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
}

#[test]
fn test_clear_four_rows_at_once() {
    let mut board = Board::default();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }
    board.set(2, 15, Some(PieceKind::Z));

    assert_eq!(board.clear_full_lines(), 4);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::Z)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_board_clear() {
    let mut board = Board::default();
    fill_row(&mut board, 5, PieceKind::T);

    board.clear();
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_from_rows_matches_manual_setup() {
    let board = Board::from_rows(&["....", ".#..", "####"]);
    let mut manual = Board::new(4, 3);
    manual.set(1, 1, Some(PieceKind::I));
    fill_row(&mut manual, 2, PieceKind::I);
    assert_eq!(board, manual);
}

//! Perft: exhaustive move-generation counts against known references
//!
//! Perft walks every legal move sequence to a fixed depth and counts the
//! leaves. One wrong castling rule, en-passant edge case, or missed pin
//! shifts the totals, so matching the published numbers pins the whole
//! generator down at once.

use chess_core::Board;

#[test]
fn perft_from_the_starting_position() {
    let mut board = Board::new();
    assert_eq!(board.perft(0), 1);
    assert_eq!(board.perft(1), 20);
    assert_eq!(board.perft(2), 400);
    assert_eq!(board.perft(3), 8_902);
}

#[test]
fn perft_depth_four() {
    let mut board = Board::new();
    assert_eq!(board.perft(4), 197_281);
}

#[test]
#[ignore = "minutes in a debug build; run with --release --ignored"]
fn perft_depth_five() {
    let mut board = Board::new();
    assert_eq!(board.perft(5), 4_865_609);
}

#[test]
fn perft_leaves_the_board_untouched() {
    let mut board = Board::new();
    let reference = board.clone();
    board.perft(3);
    assert_eq!(board, reference);
}

// "Kiwipete", the classic castling/en-passant/promotion stress position.
#[test]
fn perft_kiwipete() {
    let mut board = Board::new();
    board
        .load_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
        .unwrap();

    assert_eq!(board.perft(1), 48);
    assert_eq!(board.perft(2), 2_039);
    assert_eq!(board.perft(3), 97_862);
}

// En-passant discoveries and pins, position 3 from the perft literature.
#[test]
fn perft_pins_and_enpassant() {
    let mut board = Board::new();
    board.load_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();

    assert_eq!(board.perft(1), 14);
    assert_eq!(board.perft(2), 191);
    assert_eq!(board.perft(3), 2_812);
    assert_eq!(board.perft(4), 43_238);
}

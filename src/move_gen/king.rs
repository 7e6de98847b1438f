//! King move generation
//!
//! One step in any of the eight directions, plus castling. Castling is
//! generated here under the full rule set except for the landing square:
//! - the matching right is still held
//! - the king stands on its home square
//! - every square between king and rook is empty
//! - neither the king's square nor the square it crosses is attacked
//!
//! Whether the landing square itself is attacked is left to the legality
//! filter, which already rejects any move that ends with the king in
//! check.

use crate::board::{on_board, tile_at, tile_column, tile_row, Board};
use crate::constants::{BLACK_KING_START, KING_OFFSETS, WHITE_KING_START};
use crate::move_gen::attack;
use crate::types::{Move, MoveList, PieceColor, Tile};

pub(crate) fn generate(board: &Board, tile: Tile, moves: &mut MoveList) {
    let color = board.color(tile);
    let row = tile_row(tile);
    let column = tile_column(tile);

    for &(dr, dc) in &KING_OFFSETS {
        let r = row + dr;
        let c = column + dc;
        if !on_board(r, c) {
            continue;
        }

        let target = tile_at(r, c);
        if board.color(target) != color {
            moves.push(Move::new(tile, target));
        }
    }

    generate_castling(board, tile, color, moves);
}

fn generate_castling(board: &Board, tile: Tile, color: PieceColor, moves: &mut MoveList) {
    let home = if color == PieceColor::White {
        WHITE_KING_START
    } else {
        BLACK_KING_START
    };
    if tile != home {
        return;
    }

    let rights = board.castling_rights(color);
    if rights.is_empty() {
        return;
    }

    let enemy = color.opposite();
    if attack::is_tile_threatened(board, home, enemy) {
        return;
    }

    if rights.has_short()
        && board.is_empty(home + 1)
        && board.is_empty(home + 2)
        && !attack::is_tile_threatened(board, home + 1, enemy)
    {
        moves.push(Move::new(home, home + 2));
    }

    if rights.has_long()
        && board.is_empty(home - 1)
        && board.is_empty(home - 2)
        && board.is_empty(home - 3)
        && !attack::is_tile_threatened(board, home - 1, enemy)
    {
        moves.push(Move::new(home, home - 2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves_for(fen: &str, tile: Tile) -> MoveList {
        let mut board = Board::new();
        board.load_fen(fen).unwrap();
        let mut moves = MoveList::new();
        generate(&board, tile, &mut moves);
        moves
    }

    #[test]
    fn lone_king_has_eight_moves() {
        let moves = moves_for("4k3/8/8/8/3K4/8/8/8 w - - 0 1", 27);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn both_castling_moves_on_an_empty_back_rank() {
        let moves = moves_for("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 4);
        assert!(moves.contains(Move::new(4, 6)));
        assert!(moves.contains(Move::new(4, 2)));
    }

    #[test]
    fn castling_needs_the_right() {
        let moves = moves_for("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", 4);
        assert!(!moves.contains(Move::new(4, 6)));
        assert!(moves.contains(Move::new(4, 2)));
    }

    #[test]
    fn castling_blocked_by_pieces_between() {
        let moves = moves_for("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1", 4);
        assert!(!moves.contains(Move::new(4, 6)));
        assert!(!moves.contains(Move::new(4, 2)));
    }

    #[test]
    fn no_castling_out_of_check() {
        // Black rook on e8 pins the whole idea down.
        let moves = moves_for("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", 4);
        assert!(moves.contains(Move::new(4, 6)));

        let checked = moves_for("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1", 4);
        assert!(!checked.contains(Move::new(4, 6)));
        assert!(!checked.contains(Move::new(4, 2)));
    }

    #[test]
    fn no_castling_through_an_attacked_square() {
        // Black rook on f8 covers f1, the square the king crosses.
        let moves = moves_for("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", 4);
        assert!(!moves.contains(Move::new(4, 6)));
        assert!(moves.contains(Move::new(4, 2)));
    }

    #[test]
    fn black_castles_from_tile_sixty() {
        let moves = moves_for("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", 60);
        assert!(moves.contains(Move::new(60, 62)));
        assert!(moves.contains(Move::new(60, 58)));
    }
}

//! Threat detection
//!
//! Answers one question: is a given tile attacked by a given color? The
//! scan works outward from the tile instead of enumerating the attacker's
//! moves, which bounds it at the eight knight offsets plus eight rays
//! regardless of how much material is on the board.
//!
//! Check detection and the castling transit rule are both built on this.

use crate::board::{on_board, tile_at, tile_column, tile_row, Board};
use crate::constants::{DIAGONAL_DIRS, KNIGHT_OFFSETS, ORTHOGONAL_DIRS};
use crate::types::{PieceColor, PieceType, Tile};

/// True if any piece of `by` attacks `tile`.
///
/// The tile itself may be empty or occupied by either side; only the
/// attacker's reach matters. En-passant capture rights are not considered
/// an attack on the target tile.
pub fn is_tile_threatened(board: &Board, tile: Tile, by: PieceColor) -> bool {
    let row = tile_row(tile);
    let column = tile_column(tile);

    for &(dr, dc) in &KNIGHT_OFFSETS {
        let r = row + dr;
        let c = column + dc;
        if on_board(r, c) && board.is_piece(tile_at(r, c), by, PieceType::Knight) {
            return true;
        }
    }

    for &(dr, dc) in &ORTHOGONAL_DIRS {
        let mut r = row + dr;
        let mut c = column + dc;
        let mut distance = 1;

        while on_board(r, c) {
            let piece = board.get_tile(tile_at(r, c));
            if !piece.is_none() {
                if piece.color() == by {
                    match piece.kind() {
                        PieceType::Queen | PieceType::Rook => return true,
                        PieceType::King if distance == 1 => return true,
                        _ => {}
                    }
                }
                break;
            }
            r += dr;
            c += dc;
            distance += 1;
        }
    }

    for &(dr, dc) in &DIAGONAL_DIRS {
        let mut r = row + dr;
        let mut c = column + dc;
        let mut distance = 1;

        while on_board(r, c) {
            let piece = board.get_tile(tile_at(r, c));
            if !piece.is_none() {
                if piece.color() == by {
                    match piece.kind() {
                        PieceType::Queen | PieceType::Bishop => return true,
                        PieceType::King if distance == 1 => return true,
                        // Pawns attack toward their forward direction, so a
                        // White attacker must sit one step below the tile
                        // and a Black attacker one step above it.
                        PieceType::Pawn
                            if distance == 1
                                && ((by == PieceColor::White && dr == -1)
                                    || (by == PieceColor::Black && dr == 1)) =>
                        {
                            return true
                        }
                        _ => {}
                    }
                }
                break;
            }
            r += dr;
            c += dc;
            distance += 1;
        }
    }

    false
}

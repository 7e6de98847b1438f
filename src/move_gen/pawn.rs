//! Pawn move generation
//!
//! Pawns are the only piece whose moves depend on color: White advances
//! toward row 7 and Black toward row 0. Generation covers:
//! - single pushes onto an empty square
//! - double pushes from the starting rank through two empty squares
//! - diagonal captures of enemy pieces
//! - diagonal moves onto the current en-passant target
//! - promotion, which fans a move onto the last rank out into four moves,
//!   one per promotion piece

use crate::board::{tile_at, tile_column, tile_row, Board};
use crate::constants::PROMOTION_TYPES;
use crate::types::{Move, MoveList, PieceColor, Tile};

pub(crate) fn generate(board: &Board, tile: Tile, moves: &mut MoveList) {
    let color = board.color(tile);
    let row = tile_row(tile);
    let column = tile_column(tile);

    let (forward, start_row) = match color {
        PieceColor::White => (1i8, 1i8),
        _ => (-1i8, 6i8),
    };

    // Pushes. A pawn on its last rank cannot exist, so the square ahead is
    // always on the board.
    let ahead = tile_at(row + forward, column);
    if board.is_empty(ahead) {
        push(moves, tile, ahead, color);

        if row == start_row {
            let two_ahead = tile_at(row + 2 * forward, column);
            if board.is_empty(two_ahead) {
                moves.push(Move::new(tile, two_ahead));
            }
        }
    }

    // Captures, including en passant onto an empty target tile.
    for dc in [-1i8, 1] {
        let c = column + dc;
        if !(0..8).contains(&c) {
            continue;
        }

        let target = tile_at(row + forward, c);
        let victim = board.get_tile(target);

        let takes_enemy = !victim.is_none() && victim.color() != color;
        let takes_enpassant = target == board.enpassant_tile() && victim.is_none();

        if takes_enemy || takes_enpassant {
            push(moves, tile, target, color);
        }
    }
}

/// Append one move, or the four promotion moves when `target` is on the
/// mover's last rank.
fn push(moves: &mut MoveList, tile: Tile, target: Tile, color: PieceColor) {
    let last_row = if color == PieceColor::White { 7 } else { 0 };
    if tile_row(target) == last_row {
        for &promotion in &PROMOTION_TYPES {
            moves.push(Move::promoting(tile, target, promotion));
        }
    } else {
        moves.push(Move::new(tile, target));
    }
}

//! Full position evaluation
//!
//! Scores a position from the perspective of the side to move: positive
//! means the mover stands better. The search negates the score at every
//! ply, so this orientation is all it ever needs.

use super::material::piece_value;
use super::pst;
use crate::board::Board;
use crate::constants::CHECKMATE_SCORE;
use crate::types::Tile;

/// Static evaluation of `board` for the side to move.
///
/// Checkmate against the mover scores [`CHECKMATE_SCORE`] and stalemate
/// scores 0. Otherwise every piece contributes its material value plus its
/// piece-square bonus, positively for the mover's pieces and negatively
/// for the opponent's.
pub fn evaluate(board: &Board) -> i32 {
    if board.is_in_checkmate() {
        return CHECKMATE_SCORE;
    }
    if board.is_in_draw() {
        return 0;
    }

    let mut score = 0;
    for tile in 0..64 as Tile {
        let piece = board.get_tile(tile);
        if piece.is_none() {
            continue;
        }

        let side = if piece.color() == board.turn() { 1 } else { -1 };
        score += side * (piece_value(piece.kind()) + pst::tile_bonus(piece, tile));
    }
    score
}

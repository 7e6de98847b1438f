//! Sliding piece move generation
//!
//! Queens, rooks, and bishops walk rays until they leave the board or hit
//! a piece. The ray steps in (row, column) space, so a diagonal can never
//! wrap from the h-file onto the a-file of the next rank.

use crate::board::{on_board, tile_at, tile_column, tile_row, Board};
use crate::types::{Move, MoveList, Tile};

/// Walk each direction in `dirs` from `tile`, appending empty squares and
/// the first enemy-occupied square of every ray.
pub(crate) fn generate(board: &Board, tile: Tile, dirs: &[(i8, i8)], moves: &mut MoveList) {
    let color = board.color(tile);
    let row = tile_row(tile);
    let column = tile_column(tile);

    for &(dr, dc) in dirs {
        let mut r = row + dr;
        let mut c = column + dc;

        while on_board(r, c) {
            let target = tile_at(r, c);
            let occupant = board.get_tile(target);

            if occupant.is_none() {
                moves.push(Move::new(tile, target));
            } else {
                if occupant.color() != color {
                    moves.push(Move::new(tile, target));
                }
                break;
            }

            r += dr;
            c += dc;
        }
    }
}

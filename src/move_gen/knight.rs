//! Knight move generation
//!
//! Knights jump directly to the eight (2, 1) offsets; nothing in between
//! matters. Working in (row, column) space keeps jumps from wrapping
//! around the board edge.

use crate::board::{on_board, tile_at, tile_column, tile_row, Board};
use crate::constants::KNIGHT_OFFSETS;
use crate::types::{Move, MoveList, Tile};

pub(crate) fn generate(board: &Board, tile: Tile, moves: &mut MoveList) {
    let color = board.color(tile);
    let row = tile_row(tile);
    let column = tile_column(tile);

    for &(dr, dc) in &KNIGHT_OFFSETS {
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
}

//! Pseudo-legal move generation
//!
//! Each piece kind has its own generator appending into a caller-provided
//! [`MoveList`](crate::types::MoveList). Generators follow piece-movement
//! rules only; whether a move leaves the mover's own king attacked is the
//! board's legality filter's concern.
//!
//! ## Module organization
//!
//! - `pawn` - pushes, double pushes, captures, en passant, promotion
//! - `knight` - the eight L-shaped jumps
//! - `king` - adjacency plus castling
//! - `sliding` - shared ray walking for queens, rooks, and bishops
//! - `attack` - the "is this tile threatened" scan

pub mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;

use crate::board::Board;
use crate::constants::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::types::{MoveList, PieceType, Tile};

/// Append the pseudo-legal moves of the piece on `tile` into `moves`.
pub(crate) fn generate_moves(board: &Board, tile: Tile, moves: &mut MoveList) {
    match board.piece_type(tile) {
        PieceType::King => king::generate(board, tile, moves),
        PieceType::Queen => {
            sliding::generate(board, tile, &ORTHOGONAL_DIRS, moves);
            sliding::generate(board, tile, &DIAGONAL_DIRS, moves);
        }
        PieceType::Rook => sliding::generate(board, tile, &ORTHOGONAL_DIRS, moves),
        PieceType::Bishop => sliding::generate(board, tile, &DIAGONAL_DIRS, moves),
        PieceType::Knight => knight::generate(board, tile, moves),
        PieceType::Pawn => pawn::generate(board, tile, moves),
        PieceType::None => {}
    }
}

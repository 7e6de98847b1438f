//! Move ordering for alpha-beta pruning
//!
//! Trying strong moves first makes cutoffs come early. The order is:
//! captures before quiet moves; among captures the most valuable victim
//! first, breaking ties with the least valuable attacker; among quiet
//! moves the lighter mover first. The sort is stable, so generation order
//! decides the rest.

use std::cmp::Ordering;

use crate::board::Board;
use crate::evaluation::material::piece_value;
use crate::types::{Move, MoveList};

pub(crate) fn order_moves(board: &Board, moves: &mut MoveList) {
    moves.as_mut_slice().sort_by(|a, b| compare(board, a, b));
}

fn compare(board: &Board, a: &Move, b: &Move) -> Ordering {
    let a_victim = capture_value(board, a);
    let b_victim = capture_value(board, b);
    let a_mover = piece_value(board.piece_type(a.tile));
    let b_mover = piece_value(board.piece_type(b.tile));

    match (a_victim, b_victim) {
        (Some(av), Some(bv)) => bv.cmp(&av).then(a_mover.cmp(&b_mover)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_mover.cmp(&b_mover),
    }
}

fn capture_value(board: &Board, mv: &Move) -> Option<i32> {
    if board.is_empty(mv.target) {
        None
    } else {
        Some(piece_value(board.piece_type(mv.target)))
    }
}

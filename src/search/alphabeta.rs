//! Negamax with alpha-beta pruning
//!
//! The recursive search returns only a score; the move it prefers is
//! tracked by [`search_root`] alone, so deeper plies can never overwrite
//! the root's choice.

use super::ordering::order_moves;
use super::quiescence::quiesce;
use crate::board::Board;
use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::types::{Move, MoveList};

/// Search the subtree below `board` to `depth` plies.
///
/// Terminal positions (depth exhausted, checkmate, or stalemate) drop into
/// quiescence, which resolves captures before handing back a static score.
pub(crate) fn search(board: &mut Board, depth: i32, mut alpha: i32, beta: i32) -> i32 {
    if depth == 0 || board.is_in_checkmate() || board.is_in_draw() {
        return quiesce(board, alpha, beta);
    }

    let mut moves = MoveList::new();
    board.generate_all_legal_moves(&mut moves, false);
    // Mate and stalemate were handled above, so something is playable.
    debug_assert!(!moves.is_empty());
    order_moves(board, &mut moves);

    let mut max = SCORE_MIN;
    for i in 0..moves.len() {
        board.make_move(moves.get(i));
        let score = -search(board, depth - 1, -beta, -alpha);
        board.undo();

        if score > max {
            max = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }
    max
}

/// Full-width search of the root position.
///
/// Returns the best score and the move achieving it, or `None` when the
/// game is already over.
pub(crate) fn search_root(board: &mut Board, depth: i32) -> (i32, Option<Move>) {
    if board.is_in_checkmate() || board.is_in_draw() {
        return (quiesce(board, SCORE_MIN, SCORE_MAX), None);
    }

    let mut moves = MoveList::new();
    board.generate_all_legal_moves(&mut moves, false);
    order_moves(board, &mut moves);

    let mut alpha = SCORE_MIN;
    let beta = SCORE_MAX;
    let mut max = SCORE_MIN;
    let mut best_move = None;

    for i in 0..moves.len() {
        let mv = moves.get(i);
        board.make_move(mv);
        let score = -search(board, depth - 1, -beta, -alpha);
        board.undo();

        if score > max {
            max = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    (max, best_move)
}

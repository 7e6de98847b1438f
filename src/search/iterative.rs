//! Iterative deepening
//!
//! Runs full root searches at depth 1, 2, 3, ... until either a mate
//! score appears or the soft deadline passes. The deadline is only checked
//! between iterations, so the final depth is always searched to
//! completion and its move replaces the previous one wholesale.

use std::time::{Duration, Instant};

use super::alphabeta::search_root;
use crate::board::Board;
use crate::constants::MATE_BOUND;
use crate::types::Move;

/// Search `board` under a soft time limit and return the best move found.
///
/// Returns [`Move::NONE`] only when the position has no legal moves at
/// all, which a caller respecting the game-over flags never asks about.
pub fn find_best_move(board: &mut Board, deadline: Duration) -> Move {
    let start = Instant::now();
    let mut best_move = Move::NONE;
    let mut depth = 1;

    loop {
        let (score, mv) = search_root(board, depth);
        let Some(mv) = mv else {
            log::warn!("search asked for a move in a finished game");
            break;
        };
        best_move = mv;

        let elapsed = start.elapsed();
        log::debug!(
            "depth {depth}: best {best_move} score {score} in {}ms",
            elapsed.as_millis()
        );

        if score >= MATE_BOUND || elapsed > deadline {
            break;
        }
        depth += 1;
    }

    best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoveList;

    #[test]
    fn finds_the_mating_move_quickly() {
        let mut board = Board::new();
        board.load_fen("8/8/8/8/8/5K1k/8/5Q2 w - - 0 1").unwrap();

        let start = Instant::now();
        let best = find_best_move(&mut board, Duration::from_millis(500));
        assert_eq!(best, Move::new(5, 7));
        // Mate detection short-circuits the deepening loop.
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn returns_a_legal_move_from_the_start_position() {
        let mut board = Board::new();
        let best = find_best_move(&mut board, Duration::from_millis(100));

        let mut legal = MoveList::new();
        board.generate_all_legal_moves(&mut legal, false);
        assert!(legal.contains(best));
    }

    #[test]
    fn finished_game_yields_no_move() {
        let mut board = Board::new();
        board.make_move(Move::new(13, 29));
        board.make_move(Move::new(52, 36));
        board.make_move(Move::new(14, 30));
        board.make_move(Move::new(59, 31));

        let best = find_best_move(&mut board, Duration::from_millis(100));
        assert!(best.is_none());
    }
}

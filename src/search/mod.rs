//! Alpha-beta search with iterative deepening
//!
//! ## Module organization
//!
//! - `ordering` - capture-first move ordering for earlier cutoffs
//! - `quiescence` - capture-only extension past the nominal depth
//! - `alphabeta` - negamax with alpha-beta, root and subtree entries
//! - `iterative` - deepening loop under the soft deadline

mod alphabeta;
mod iterative;
mod ordering;
mod quiescence;

pub use iterative::find_best_move;

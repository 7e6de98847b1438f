//! Background search worker
//!
//! The engine searches on its own thread so a caller driving a frame loop
//! never blocks. The hand-off is deliberately narrow:
//!
//! 1. [`Ai::think`] clones the caller's board and sends it to the worker,
//!    clearing `found_move` and raising `thinking`.
//! 2. The worker searches its private copy and publishes the result:
//!    it stores the best move, raises `found_move`, then drops `thinking`.
//! 3. The caller polls [`Ai::has_found_move`] and collects the move with
//!    [`Ai::get_best_move`], which clears `found_move` again.
//!
//! The board travels by value through a channel, so the two sides never
//! share position data; the only shared state is the two flags and the
//! result slot. The channel send happens-before the receive, and every
//! flag is published with release ordering and read with acquire
//! ordering, so the worker always sees a complete snapshot and the caller
//! always sees a complete move.
//!
//! A new `think` must wait until [`Ai::is_thinking`] is false; there is no
//! mid-search cancellation. Dropping the [`Ai`] closes the channel, which
//! the worker treats as its stop signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::board::Board;
use crate::constants::SEARCH_DEADLINE_MS;
use crate::search;
use crate::types::Move;

struct Shared {
    thinking: AtomicBool,
    found_move: AtomicBool,
    best_move: Mutex<Move>,
}

/// Handle to the search worker thread.
pub struct Ai {
    shared: Arc<Shared>,
    sender: Option<Sender<Board>>,
    worker: Option<JoinHandle<()>>,
}

impl Ai {
    /// Spawn the worker thread. It idles until the first [`Ai::think`].
    pub fn new() -> Ai {
        let shared = Arc::new(Shared {
            thinking: AtomicBool::new(false),
            found_move: AtomicBool::new(false),
            best_move: Mutex::new(Move::NONE),
        });

        let (sender, receiver) = mpsc::channel::<Board>();
        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || run_worker(receiver, worker_shared));

        Ai {
            shared,
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Hand a position to the worker and start searching it.
    ///
    /// Must not be called while [`Ai::is_thinking`] is true; the worker
    /// holds one position at a time.
    pub fn think(&self, board: &Board) {
        debug_assert!(!self.is_thinking());

        self.shared.found_move.store(false, Ordering::Release);
        self.shared.thinking.store(true, Ordering::Release);

        let Some(sender) = &self.sender else {
            return;
        };
        if sender.send(board.clone()).is_err() {
            log::error!("search worker is gone, dropping think request");
            self.shared.thinking.store(false, Ordering::Release);
        }
    }

    /// True while the worker is searching.
    pub fn is_thinking(&self) -> bool {
        self.shared.thinking.load(Ordering::Acquire)
    }

    /// True once a search has finished and its move awaits collection.
    pub fn has_found_move(&self) -> bool {
        self.shared.found_move.load(Ordering::Acquire)
    }

    /// Collect the finished search's move and clear `found_move`.
    ///
    /// Only meaningful after [`Ai::has_found_move`] turned true.
    pub fn get_best_move(&self) -> Move {
        debug_assert!(self.has_found_move());
        self.shared.found_move.store(false, Ordering::Release);
        *self
            .shared
            .best_move
            .lock()
            .expect("search worker panicked")
    }
}

impl Default for Ai {
    fn default() -> Self {
        Ai::new()
    }
}

impl Drop for Ai {
    fn drop(&mut self) {
        // Closing the channel is the stop signal.
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker(receiver: Receiver<Board>, shared: Arc<Shared>) {
    log::debug!("search worker started");

    while let Ok(mut board) = receiver.recv() {
        let deadline = Duration::from_millis(SEARCH_DEADLINE_MS);
        let best = search::find_best_move(&mut board, deadline);

        if let Ok(mut slot) = shared.best_move.lock() {
            *slot = best;
        }
        shared.found_move.store(true, Ordering::Release);
        shared.thinking.store(false, Ordering::Release);
    }

    log::debug!("search worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn wait_for_move(ai: &Ai) -> Move {
        let start = Instant::now();
        while !ai.has_found_move() {
            assert!(
                start.elapsed() < Duration::from_secs(30),
                "worker never produced a move"
            );
            thread::sleep(Duration::from_millis(10));
        }
        let best = ai.get_best_move();
        // The worker drops `thinking` right after publishing; wait it out
        // so the handle is immediately reusable.
        while ai.is_thinking() {
            thread::sleep(Duration::from_millis(1));
        }
        best
    }

    #[test]
    fn worker_finds_the_mate_in_one() {
        let mut board = Board::new();
        board.load_fen("8/8/8/8/8/5K1k/8/5Q2 w - - 0 1").unwrap();

        let ai = Ai::new();
        assert!(!ai.is_thinking());
        assert!(!ai.has_found_move());

        ai.think(&board);
        let best = wait_for_move(&ai);

        assert_eq!(best, Move::new(5, 7));
        assert!(!ai.has_found_move());
        assert!(!ai.is_thinking());
    }

    #[test]
    fn worker_can_be_reused_for_consecutive_searches() {
        let board = Board::new();
        let ai = Ai::new();

        ai.think(&board);
        let first = wait_for_move(&ai);
        assert!(!first.is_none());

        let mut replied = board.clone();
        replied.make_move(first);
        ai.think(&replied);
        let second = wait_for_move(&ai);
        assert!(!second.is_none());
        assert_ne!(first, second);
    }

    #[test]
    fn dropping_the_ai_stops_the_worker() {
        let ai = Ai::new();
        drop(ai); // Must not hang.
    }
}

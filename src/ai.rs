//! Move selection for computer players.
//!
//! The AI has no strategy: it samples cells uniformly at random and keeps
//! resampling until it lands on a free one.

use crate::board::{Board, Coord};

/// Pick a random free cell, or `None` when the board is full.
pub fn pick_move(board: &Board, rng: &mut fastrand::Rng) -> Option<Coord> {
    if board.is_full() {
        return None;
    }
    let size = board.size();
    loop {
        let coord = (rng.usize(..size), rng.usize(..size));
        // `coord` is always on the board, so only an occupied cell resamples.
        if let Ok(true) = board.is_free(coord) {
            return Some(coord);
        }
    }
}

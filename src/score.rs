//! Streak scoring.
//!
//! A scoring pass sweeps the whole board in row-major order and follows runs
//! of cells owned by one player along four direction kinds. Each direction
//! kind links a cell to a predecessor that the sweep has already visited, so a
//! run "slides" forward one cell at a time:
//!
//! | kind       | predecessor of `(row, col)` |
//! |------------|-----------------------------|
//! | vertical   | `(row, col - 1)`            |
//! | horizontal | `(row - 1, col)`            |
//! | diag-down  | `(row - 1, col + 1)`        |
//! | diag-up    | `(row - 1, col - 1)`        |
//!
//! A run that meets a cell not owned by the player is terminated and scored
//! on the spot. Runs still open when the sweep ends are scored only when
//! longer than [`OPEN_RUN_CUTOFF`].
//!
//! # Example
//!
//! ```
//! use filetto::board::Board;
//! use filetto::player::PlayerId;
//! use filetto::score::compute_score;
//!
//! let me = PlayerId::new(0);
//! let mut board = Board::new(5).unwrap();
//! for col in 0..3 {
//!     board.place(me, (1, col)).unwrap();
//! }
//! assert_eq!(compute_score(&board, me), 2);
//! ```

use std::collections::HashMap;

use crate::board::Board;
use crate::constants::{
    MIN_SCORING_LENGTH, OPEN_RUN_CUTOFF, SCORE_FIVE_PLUS, SCORE_FOUR, SCORE_THREE,
};
use crate::player::PlayerId;

/// Signed cell key. Predecessors may sit outside the board, so both
/// components can be negative or past the last index.
pub type CellKey = (isize, isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Vertical,
    Horizontal,
    DiagDown,
    DiagUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagDown,
        Direction::DiagUp,
    ];

    fn index(self) -> usize {
        match self {
            Direction::Vertical => 0,
            Direction::Horizontal => 1,
            Direction::DiagDown => 2,
            Direction::DiagUp => 3,
        }
    }

    /// The cell visited earlier in the sweep that a run through `cell` continues from.
    pub fn predecessor(self, (row, col): CellKey) -> CellKey {
        match self {
            Direction::Vertical => (row, col - 1),
            Direction::Horizontal => (row - 1, col),
            Direction::DiagDown => (row - 1, col + 1),
            Direction::DiagUp => (row - 1, col - 1),
        }
    }
}

/// Points awarded for a run of `length` cells.
pub fn score_for_length(length: usize) -> u32 {
    match length {
        n if n < MIN_SCORING_LENGTH => 0,
        3 => SCORE_THREE,
        4 => SCORE_FOUR,
        _ => SCORE_FIVE_PLUS,
    }
}

/// Open runs of one scoring pass, one map per direction kind from the run's
/// last cell to its length.
#[derive(Debug, Default)]
pub struct SeriesTracker {
    runs: [HashMap<CellKey, usize>; 4],
}

impl SeriesTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next cell of the sweep for one direction kind.
    ///
    /// Returns the length of the run this cell terminated, if any.
    pub fn advance(&mut self, direction: Direction, cell: CellKey, owned: bool) -> Option<usize> {
        let runs = &mut self.runs[direction.index()];
        match (runs.remove(&direction.predecessor(cell)), owned) {
            (Some(length), true) => {
                runs.insert(cell, length + 1);
                None
            }
            (Some(length), false) => Some(length),
            (None, true) => {
                runs.insert(cell, 1);
                None
            }
            (None, false) => None,
        }
    }

    /// Length of the open run ending at `cell` for `direction`, if any.
    pub fn open_run(&self, direction: Direction, cell: CellKey) -> Option<usize> {
        self.runs[direction.index()].get(&cell).copied()
    }

    /// Consume the tracker, yielding the lengths of every run still open.
    pub fn into_open_runs(self) -> impl Iterator<Item = usize> {
        self.runs.into_iter().flat_map(HashMap::into_values)
    }
}

/// Total score of `player` on `board`, recomputed from scratch.
pub fn compute_score(board: &Board, player: PlayerId) -> u32 {
    let mut tracker = SeriesTracker::new();
    let mut total = 0;

    for ((row, col), owner) in board.cells() {
        let owned = owner == Some(player);
        let cell = (row as isize, col as isize);
        for direction in Direction::ALL {
            if let Some(length) = tracker.advance(direction, cell, owned) {
                total += score_for_length(length);
            }
        }
    }

    total += tracker
        .into_open_runs()
        .filter(|&length| length > OPEN_RUN_CUTOFF)
        .map(score_for_length)
        .sum::<u32>();

    tracing::debug!(player = %player, score = total, "scoring pass");
    total
}

//! Filetto: a generalized connect-five on an NxN board.
//!
//! Any number of players from 2 to 10, human or AI, take turns marking free
//! cells. After each mark the mover's score is recomputed from every run of
//! their cells in four directions; the first to reach 50 points wins.
//!
//! ## Modules
//!
//! - [`board`] - The occupation grid
//! - [`score`] - Run tracking and the length to score table
//! - [`player`] - Player identities and records
//! - [`game`] - Turn orchestration and win/draw detection
//! - [`ai`] - Random move selection
//! - [`input`] - Coordinate parsing and console prompts
//! - [`render`] - ANSI board and scoreboard painting
//! - [`session`] - Interactive console driver
//! - [`config`] - Game setup options
//! - [`constants`] - Score table, limits and console glyphs
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use filetto::game::{Game, Outcome};
//! use filetto::player::{Player, PlayerId, PlayerKind};
//!
//! let players = vec![
//!     Player::new(PlayerId::new(0), "Ada", 31, PlayerKind::Human),
//!     Player::new(PlayerId::new(1), "Bob", 32, PlayerKind::Human),
//! ];
//! let mut game = Game::with_size(7, players).unwrap();
//! for col in 0..4 {
//!     game.play((0, col)).unwrap();
//!     game.play((6, col)).unwrap();
//! }
//! let report = game.play((0, 4)).unwrap();
//! assert_eq!(report.outcome, Some(Outcome::Winner(PlayerId::new(0))));
//! ```

pub mod ai;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod player;
pub mod render;
pub mod score;
pub mod session;

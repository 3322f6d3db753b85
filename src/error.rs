//! Error types for the board, the game orchestrator and configuration.

use crate::constants::MAX_BOARD_SIZE;
use crate::player::PlayerId;

/// Errors raised by [`Board`](crate::board::Board) accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be between 1 and {max} (got {0})", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),

    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// Errors raised while orchestrating a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("cell ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[error("the game has already finished")]
    Finished,

    #[error("there must be at least {min} players (got {got})")]
    TooFewPlayers { min: usize, got: usize },

    #[error("cannot handle more than {max} players at once (got {got})")]
    TooManyPlayers { max: usize, got: usize },

    #[error("player id {0} is used more than once")]
    DuplicatePlayer(PlayerId),

    #[error("no free cell left on the board")]
    NoFreeCell,
}

/// Errors raised when validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end an interactive console session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

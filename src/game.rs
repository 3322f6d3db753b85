//! Turn orchestration.
//!
//! Players move round-robin in the order they were registered. After every
//! mark the mover's score is recomputed; reaching [`WIN_SCORE`] wins the game
//! on the spot and filling the board without a winner is a draw.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::ai;
use crate::board::{Board, Coord};
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS, WIN_SCORE};
use crate::error::GameError;
use crate::player::{Player, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    Draw,
}

/// What a single move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub player: PlayerId,
    pub coord: Coord,
    /// The mover's score after the move.
    pub score: u32,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current: usize,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a game on `board` with `players` taking turns in order.
    pub fn new(board: Board, players: Vec<Player>) -> Result<Self, GameError> {
        if players.len() < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers {
                min: MIN_PLAYERS,
                got: players.len(),
            });
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                max: MAX_PLAYERS,
                got: players.len(),
            });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = players.iter().map(Player::id).find(|id| !seen.insert(*id)) {
            return Err(GameError::DuplicatePlayer(dup));
        }
        let outcome = board.is_full().then_some(Outcome::Draw);
        Ok(Game {
            board,
            players,
            current: 0,
            outcome,
        })
    }

    /// Start a game on a fresh `size`x`size` board.
    pub fn with_size(size: usize, players: Vec<Player>) -> Result<Self, GameError> {
        Self::new(Board::new(size)?, players)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Place a mark for the current player at `coord`.
    ///
    /// Off-board and occupied cells are rejected without touching the game.
    pub fn play(&mut self, coord: Coord) -> Result<MoveReport, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::Finished);
        }
        if !self.board.is_free(coord)? {
            return Err(GameError::Occupied {
                row: coord.0,
                col: coord.1,
            });
        }

        let player = &mut self.players[self.current];
        self.board.place(player.id(), coord)?;
        let score = player.compute_score(&self.board);
        let id = player.id();
        debug!(player = %id, row = coord.0, col = coord.1, score, "mark placed");

        if score >= WIN_SCORE {
            self.outcome = Some(Outcome::Winner(id));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current = (self.current + 1) % self.players.len();
        }
        if let Some(outcome) = self.outcome {
            info!(?outcome, "game over");
        }

        Ok(MoveReport {
            player: id,
            coord,
            score,
            outcome: self.outcome,
        })
    }

    /// Let the AI pick a free cell for the current player and play it.
    pub fn play_ai(&mut self, rng: &mut fastrand::Rng) -> Result<MoveReport, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::Finished);
        }
        let coord = ai::pick_move(&self.board, rng).ok_or(GameError::NoFreeCell)?;
        self.play(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::player::PlayerKind;

    fn players(n: u32) -> Vec<Player> {
        (0..n)
            .map(|i| Player::new(PlayerId::new(i), format!("P{i}"), 31, PlayerKind::Human))
            .collect()
    }

    #[test]
    fn test_player_count_limits() {
        assert_eq!(
            Game::with_size(5, players(1)).unwrap_err(),
            GameError::TooFewPlayers { min: 2, got: 1 }
        );
        assert_eq!(
            Game::with_size(5, players(11)).unwrap_err(),
            GameError::TooManyPlayers { max: 10, got: 11 }
        );
        assert!(Game::with_size(5, players(10)).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut list = players(2);
        list.push(Player::new(PlayerId::new(1), "Clone", 32, PlayerKind::Ai));
        assert_eq!(
            Game::with_size(5, list).unwrap_err(),
            GameError::DuplicatePlayer(PlayerId::new(1))
        );
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(
            Game::with_size(0, players(2)).unwrap_err(),
            GameError::Board(BoardError::InvalidSize(0))
        );
    }

    #[test]
    fn test_turns_rotate() {
        let mut game = Game::with_size(5, players(3)).unwrap();
        assert_eq!(game.current_player().id(), PlayerId::new(0));
        game.play((0, 0)).unwrap();
        assert_eq!(game.current_player().id(), PlayerId::new(1));
        game.play((0, 1)).unwrap();
        game.play((0, 2)).unwrap();
        assert_eq!(game.current_player().id(), PlayerId::new(0));
        assert_eq!(game.board().cell_owner((0, 1)).unwrap(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_rejected_moves_keep_turn() {
        let mut game = Game::with_size(3, players(2)).unwrap();
        game.play((1, 1)).unwrap();
        assert_eq!(
            game.play((1, 1)).unwrap_err(),
            GameError::Occupied { row: 1, col: 1 }
        );
        assert!(matches!(
            game.play((3, 0)).unwrap_err(),
            GameError::Board(BoardError::OutOfBounds { .. })
        ));
        assert_eq!(game.current_player().id(), PlayerId::new(1));
    }

    #[test]
    fn test_five_in_a_row_wins() {
        let mut game = Game::with_size(6, players(2)).unwrap();
        for col in 0..4 {
            let report = game.play((0, col)).unwrap();
            assert_eq!(report.outcome, None);
            game.play((5, col)).unwrap();
        }
        assert_eq!(game.player(PlayerId::new(0)).unwrap().score(), 10);
        let report = game.play((0, 4)).unwrap();
        assert_eq!(report.score, 50);
        assert_eq!(report.outcome, Some(Outcome::Winner(PlayerId::new(0))));
        assert_eq!(game.outcome(), Some(Outcome::Winner(PlayerId::new(0))));
        assert_eq!(game.play((3, 3)).unwrap_err(), GameError::Finished);
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut game = Game::with_size(2, players(2)).unwrap();
        for coord in [(0, 0), (0, 1), (1, 0)] {
            assert_eq!(game.play(coord).unwrap().outcome, None);
        }
        let report = game.play((1, 1)).unwrap();
        assert_eq!(report.outcome, Some(Outcome::Draw));
        assert!(game.is_over());
    }

    #[test]
    fn test_ai_game_terminates() {
        let list = (0..3)
            .map(|i| Player::new(PlayerId::new(i), format!("Bot {i}"), 31, PlayerKind::Ai))
            .collect();
        let mut game = Game::with_size(6, list).unwrap();
        let mut rng = fastrand::Rng::with_seed(5);
        let mut moves = 0;
        while !game.is_over() {
            game.play_ai(&mut rng).unwrap();
            moves += 1;
        }
        assert!(moves <= 36);
        assert_eq!(game.play_ai(&mut rng).unwrap_err(), GameError::Finished);
    }
}

//! Interactive console session.
//!
//! Drives a whole game over any `BufRead`/`Write` pair: player setup, board
//! size, then turns until someone wins or the board fills up. Humans type
//! `row,col` coordinates; AI players move on their own.
//!
//! ```
//! use std::io::Cursor;
//! use filetto::config::GameConfig;
//! use filetto::game::Outcome;
//! use filetto::session::Session;
//!
//! let config = GameConfig::ai_only(4, 2, Some(3));
//! let mut output = Vec::new();
//! let mut session = Session::new(Cursor::new(""), &mut output, config);
//! let outcome = session.run().unwrap();
//! assert!(matches!(outcome, Outcome::Winner(_) | Outcome::Draw));
//! ```

use std::io::{BufRead, Write};

use tracing::warn;

use crate::board::Board;
use crate::config::GameConfig;
use crate::constants::{MAX_BOARD_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{GameError, SessionError};
use crate::game::{Game, MoveReport, Outcome};
use crate::input::{parse_coord, prompt_line, prompt_number, read_line};
use crate::player::{Player, PlayerId, PlayerKind, color_for_index};
use crate::render::{BoardView, Scoreboard};

const INVALID_COORDS: &str = "Please provide some valid coordinates!";

pub struct Session<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    rng: fastrand::Rng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Session {
            input,
            output,
            config,
            rng,
        }
    }

    /// Play one full game and return how it ended.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        self.config.validate()?;
        writeln!(self.output, "Welcome to filetto!")?;
        let players = self.setup_players()?;
        let board = self.setup_board()?;
        let mut game = Game::new(board, players)?;
        write!(self.output, "{}", BoardView::new(game.board(), game.players()))?;

        loop {
            let report = if game.current_player().is_human() {
                self.human_turn(&mut game)?
            } else {
                game.play_ai(&mut self.rng)?
            };
            write!(
                self.output,
                "{}{}",
                BoardView::redraw(game.board(), game.players()),
                Scoreboard(game.players())
            )?;
            if let Some(outcome) = report.outcome {
                match outcome {
                    Outcome::Winner(id) => {
                        let name = game.player(id).map(Player::name).unwrap_or_default();
                        writeln!(self.output, "{name} won!!!")?;
                    }
                    Outcome::Draw => writeln!(self.output, "Game over!")?,
                }
                self.output.flush()?;
                return Ok(outcome);
            }
        }
    }

    /// Collect human and AI players, asking again until the roster size is acceptable.
    pub fn setup_players(&mut self) -> Result<Vec<Player>, SessionError> {
        let mut first = true;
        loop {
            let humans = match self.config.humans.clone() {
                Some(names) => names,
                None => self.ask_human_names(first)?,
            };
            let ai = match self.config.ai_players {
                Some(n) => n,
                None => self.prompt_bounded(
                    "How many AI players? ",
                    "Please provide a valid number!",
                    true,
                    MAX_PLAYERS,
                )?,
            };

            let total = humans.len() + ai;
            let fixed = self.config.humans.is_some() && self.config.ai_players.is_some();
            if fixed && total < MIN_PLAYERS {
                return Err(GameError::TooFewPlayers {
                    min: MIN_PLAYERS,
                    got: total,
                }
                .into());
            }
            if fixed && total > MAX_PLAYERS {
                return Err(GameError::TooManyPlayers {
                    max: MAX_PLAYERS,
                    got: total,
                }
                .into());
            }
            if total < MIN_PLAYERS {
                writeln!(self.output, "There must be at least {MIN_PLAYERS} players!")?;
            } else if total > MAX_PLAYERS {
                writeln!(
                    self.output,
                    "I cannot handle more than {MAX_PLAYERS} players at once!"
                )?;
            } else {
                return Ok(build_roster(humans, ai));
            }
            first = false;
        }
    }

    fn ask_human_names(&mut self, first: bool) -> Result<Vec<String>, SessionError> {
        if !first {
            warn!("player setup restarted");
        }
        let count = self.prompt_bounded(
            "How many human players? ",
            "Please provide a valid number!",
            true,
            MAX_PLAYERS,
        )?;
        let mut names = Vec::with_capacity(count);
        for i in 1..=count {
            let message = format!("Name of player {i}: ");
            names.push(prompt_line(&mut self.input, &mut self.output, &message)?);
        }
        Ok(names)
    }

    /// Build the board from the configured size or ask for one.
    pub fn setup_board(&mut self) -> Result<Board, SessionError> {
        let size = match self.config.board_size {
            Some(size) => size,
            None => self.prompt_bounded(
                "Board size: ",
                "Please provide a valid size!",
                false,
                MAX_BOARD_SIZE,
            )?,
        };
        Ok(Board::new(size).map_err(GameError::from)?)
    }

    /// [`prompt_number`] that also asks again for answers above `max`.
    fn prompt_bounded(
        &mut self,
        message: &str,
        error_message: &str,
        allow_zero: bool,
        max: usize,
    ) -> Result<usize, SessionError> {
        loop {
            let n = prompt_number(
                &mut self.input,
                &mut self.output,
                message,
                error_message,
                allow_zero,
            )?;
            if n <= max {
                return Ok(n);
            }
            warn!(n, max, "number above limit");
            writeln!(self.output, "{error_message}")?;
        }
    }

    fn human_turn(&mut self, game: &mut Game) -> Result<MoveReport, SessionError> {
        writeln!(
            self.output,
            "{}, where do you want to place a tick?",
            game.current_player().name()
        )?;
        loop {
            self.output.flush()?;
            let line = read_line(&mut self.input)?;
            let Some(coord) = parse_coord(&line) else {
                warn!(input = %line, "unparsable coordinates");
                writeln!(self.output, "{INVALID_COORDS}")?;
                continue;
            };
            match game.play(coord) {
                Ok(report) => return Ok(report),
                Err(err @ (GameError::Occupied { .. } | GameError::Board(_))) => {
                    warn!(%err, "rejected move");
                    writeln!(self.output, "{INVALID_COORDS}")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Humans first, then AIs, with ids and colors handed out in turn order.
fn build_roster(humans: Vec<String>, ai: usize) -> Vec<Player> {
    let humans = humans.into_iter().map(|name| (name, PlayerKind::Human));
    let bots = (1..=ai).map(|i| (format!("AI {i}"), PlayerKind::Ai));
    humans
        .chain(bots)
        .enumerate()
        .map(|(i, (name, kind))| {
            Player::new(PlayerId::new(i as u32), name, color_for_index(i), kind)
        })
        .collect()
}

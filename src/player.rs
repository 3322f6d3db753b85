//! Player identities and records.

use std::fmt;

use crate::board::Board;
use crate::constants::{MARKER, PLAYER_COLORS, RESET};
use crate::score;

/// Unique identity of a player within one game.
///
/// Board ownership is compared by id, so two players sharing a name never
/// get credited for each other's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl PlayerId {
    pub const fn new(id: u32) -> Self {
        PlayerId(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: u8,
    kind: PlayerKind,
    score: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, color: u8, kind: PlayerKind) -> Self {
        Player {
            id,
            name: name.into(),
            color,
            kind,
            score: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// ANSI foreground color code.
    pub fn color(&self) -> u8 {
        self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    /// Score from the most recent [`Player::compute_score`] call.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Colored cell glyph identifying this player on the console.
    pub fn marker(&self) -> String {
        format!("\x1b[{}m{MARKER}{RESET}", self.color)
    }

    /// Recompute this player's score from scratch and remember it.
    pub fn compute_score(&mut self, board: &Board) -> u32 {
        self.score = score::compute_score(board, self.id);
        self.score
    }
}

/// Palette color for the player at `index`, cycling through the palette.
pub fn color_for_index(index: usize) -> u8 {
    PLAYER_COLORS[index % PLAYER_COLORS.len()]
}

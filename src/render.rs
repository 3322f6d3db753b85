//! ANSI console rendering of the board and the scoreboard.

use std::fmt;

use crate::board::Board;
use crate::constants::{CURSOR_HOME, MARKER, RESET};
use crate::player::{Player, PlayerId};

fn find(players: &[Player], id: PlayerId) -> Option<&Player> {
    players.iter().find(|p| p.id() == id)
}

/// The board painted with every owned cell in its owner's color.
pub struct BoardView<'a> {
    board: &'a Board,
    players: &'a [Player],
    home: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, players: &'a [Player]) -> Self {
        BoardView {
            board,
            players,
            home: false,
        }
    }

    /// Start with the cursor-home sequence, painting over the previous frame.
    pub fn redraw(board: &'a Board, players: &'a [Player]) -> Self {
        BoardView {
            home: true,
            ..Self::new(board, players)
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.home {
            f.write_str(CURSOR_HOME)?;
        }
        let size = self.board.size();
        f.write_str("   +")?;
        for col in 0..size {
            write!(f, " {col:02} |")?;
        }
        writeln!(f)?;

        let mut cells = self.board.cells();
        for row in 0..size {
            write!(f, "{row:02} |")?;
            for (_, owner) in cells.by_ref().take(size) {
                match owner.and_then(|id| find(self.players, id)) {
                    Some(player) => write!(f, "\x1b[{}m{MARKER}{RESET}|", player.color())?,
                    // Owners missing from `players` still show up, uncolored.
                    None if owner.is_some() => write!(f, "{MARKER}|")?,
                    None => f.write_str("    |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One `<marker> <name>: <score>` line per player.
pub struct Scoreboard<'a>(pub &'a [Player]);

impl fmt::Display for Scoreboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\nScoreboard:\n")?;
        for player in self.0 {
            writeln!(f, "{} {}: {}", player.marker(), player.name(), player.score())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerKind;

    #[test]
    fn test_draw_empty_board() {
        let board = Board::new(2).unwrap();
        assert_eq!(
            BoardView::new(&board, &[]).to_string(),
            "   + 00 | 01 |\n00 |    |    |\n01 |    |    |\n"
        );
    }

    #[test]
    fn test_draw_colors_owned_cells() {
        let ada = Player::new(PlayerId::new(0), "Ada", 32, PlayerKind::Human);
        let mut board = Board::new(2).unwrap();
        board.place(ada.id(), (1, 0)).unwrap();
        let players = [ada];
        let text = BoardView::new(&board, &players).to_string();
        assert!(text.ends_with("01 |\x1b[32m ██ \x1b[0m|    |\n"));
    }

    #[test]
    fn test_draw_wide_labels() {
        let board = Board::new(11).unwrap();
        let text = BoardView::new(&board, &[]).to_string();
        assert!(text.starts_with("   + 00 |"));
        assert!(text.contains(" 10 |\n"));
        assert!(text.contains("\n10 |"));
    }

    #[test]
    fn test_redraw_homes_cursor() {
        let board = Board::new(1).unwrap();
        assert!(BoardView::redraw(&board, &[])
            .to_string()
            .starts_with("\x1b[0;0H   +"));
        assert!(BoardView::new(&board, &[]).to_string().starts_with("   +"));
    }

    #[test]
    fn test_scoreboard() {
        let players = vec![
            Player::new(PlayerId::new(0), "Ada", 31, PlayerKind::Human),
            Player::new(PlayerId::new(1), "Bot 1", 32, PlayerKind::Ai),
        ];
        let text = Scoreboard(&players).to_string();
        assert_eq!(
            text,
            "\nScoreboard:\n\x1b[31m ██ \x1b[0m Ada: 0\n\x1b[32m ██ \x1b[0m Bot 1: 0\n"
        );
    }
}

//! Constants for scoring, game limits, and console presentation.
//!
//! Every tunable number of the game lives here so the score engine, the
//! orchestrator and the renderer agree on the same values.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Largest supported board size. Row and column labels are two digits wide.
pub const MAX_BOARD_SIZE: usize = 99;

// =============================================================================
// Scoring
// =============================================================================

/// Points for a run of exactly three cells.
pub const SCORE_THREE: u32 = 2;

/// Points for a run of exactly four cells.
pub const SCORE_FOUR: u32 = 10;

/// Points for any run longer than four cells.
pub const SCORE_FIVE_PLUS: u32 = 50;

/// Shortest run the score table rewards.
pub const MIN_SCORING_LENGTH: usize = 3;

/// Open runs left at the end of a sweep only count when strictly longer than this.
pub const OPEN_RUN_CUTOFF: usize = 2;

/// Score at which a player wins the game.
pub const WIN_SCORE: u32 = 50;

// =============================================================================
// Players
// =============================================================================

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can handle at once.
pub const MAX_PLAYERS: usize = 10;

/// ANSI foreground color codes handed out to players in order.
pub const PLAYER_COLORS: [u8; 5] = [31, 32, 36, 34, 37];

// =============================================================================
// Console
// =============================================================================

/// Glyph painted in an owned cell.
pub const MARKER: &str = " ██ ";

/// Moves the cursor to the top-left corner before a redraw.
pub const CURSOR_HOME: &str = "\x1b[0;0H";

/// Resets all ANSI attributes.
pub const RESET: &str = "\x1b[0m";

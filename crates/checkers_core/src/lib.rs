pub mod board;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod piece;
pub mod search;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::evaluate;
pub use game::*;
pub use perft::perft;
pub use piece::*;
pub use search::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every computer opponent
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Board after the chosen move (None if the side has no legal move)
    pub board: Option<Board>,
    /// Evaluation of the chosen line, positive = White advantage
    pub score: f32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Limits for a single search. Checkers games here use a fixed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Search depth in plies
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Trait that all checkers engines must implement.
///
/// An engine receives the live board by reference and hands back the board it
/// wants to play into. The caller installs it with [`Game::install_board`].
pub trait Engine: Send {
    /// Pick a move for `side` on `board`.
    fn search(&mut self, board: &Board, side: Color, limits: SearchLimits) -> SearchResult;

    /// Display name, used in match reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

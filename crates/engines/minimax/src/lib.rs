//! Minimax Checkers Engine
//!
//! Fixed-depth minimax over whole-board successors with material evaluation.
//! This is the computer opponent used by the terminal front end.

use checkers_core::{
    best_move_alpha_beta_with_stats, best_move_with_stats, Board, Color, Engine, SearchLimits,
    SearchResult, SearchStats,
};
use tracing::info;


/// Checkers engine using plain minimax or alpha-beta.
///
/// Both modes select the same board; alpha-beta only visits fewer nodes.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    /// Prune with alpha-beta
    alpha_beta: bool,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            alpha_beta: true,
            nodes: 0,
        }
    }

    /// Plain minimax, without pruning.
    pub fn plain() -> Self {
        Self {
            alpha_beta: false,
            nodes: 0,
        }
    }

    pub fn with_alpha_beta(alpha_beta: bool) -> Self {
        Self {
            alpha_beta,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, side: Color, limits: SearchLimits) -> SearchResult {
        let mut stats = SearchStats::default();
        let outcome = if self.alpha_beta {
            best_move_alpha_beta_with_stats(board, limits.depth, side, &mut stats)
        } else {
            best_move_with_stats(board, limits.depth, side, &mut stats)
        };
        self.nodes = stats.nodes;

        let (score, board) = match outcome {
            Some((score, board)) => (score, Some(board)),
            None => (board.evaluate(), None),
        };
        info!(engine = self.name(), %side, score, nodes = self.nodes, "search finished");

        SearchResult {
            board,
            score,
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        if self.alpha_beta {
            "Minimax (alpha-beta)"
        } else {
            "Minimax"
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

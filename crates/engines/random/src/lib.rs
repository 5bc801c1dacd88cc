//! Random Move Checkers Engine
//!
//! A simple engine that plays a uniformly random legal move.
//! Useful for:
//! - Baseline comparisons (the minimax engine should easily beat this)
//! - Stress testing move generation in long self-play runs

use checkers_core::{Board, Color, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A checkers engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Deterministic engine for reproducible matches and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, side: Color, _limits: SearchLimits) -> SearchResult {
        let children = board.successors(side);
        self.nodes = children.len() as u64;

        let chosen = children.choose(&mut self.rng).cloned();

        SearchResult {
            score: chosen.as_ref().map_or_else(|| board.evaluate(), Board::evaluate),
            board: chosen,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

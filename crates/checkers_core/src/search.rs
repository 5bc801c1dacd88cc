//! Fixed-depth minimax over whole-board successors.
//!
//! White maximizes [`Board::evaluate`], Red minimizes it. Every branch works
//! on its own copy of the board, so the live game is never touched.

use tracing::debug;

use crate::{board::Board, types::Color};

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
}

fn maximizes(side: Color) -> bool {
    side == Color::White
}

fn improves(side: Color, score: f32, best: f32) -> bool {
    if maximizes(side) { score > best } else { score < best }
}

fn worst_for(side: Color) -> f32 {
    if maximizes(side) {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    }
}

/// Best resulting board for `side` with its minimax score.
///
/// Ties keep the first board in generation order. Returns None when `side`
/// has no legal move.
pub fn best_move(board: &Board, depth: u8, side: Color) -> Option<(f32, Board)> {
    best_move_with_stats(board, depth, side, &mut SearchStats::default())
}

pub fn best_move_with_stats(
    board: &Board,
    depth: u8,
    side: Color,
    stats: &mut SearchStats,
) -> Option<(f32, Board)> {
    let mut best: Option<(f32, Board)> = None;
    for child in board.successors(side) {
        stats.nodes += 1;
        let score = minimax(&child, depth.saturating_sub(1), side.other(), stats);
        let better = match &best {
            None => true,
            Some((best_score, _)) => improves(side, score, *best_score),
        };
        if better {
            best = Some((score, child));
        }
    }
    if let Some((score, _)) = &best {
        debug!(%side, depth, score, nodes = stats.nodes, "minimax picked move");
    }
    best
}

fn minimax(board: &Board, depth: u8, side: Color, stats: &mut SearchStats) -> f32 {
    if depth == 0 || board.winner().is_some() {
        return board.evaluate();
    }
    let children = board.successors(side);
    if children.is_empty() {
        return board.evaluate();
    }

    let mut best = worst_for(side);
    for child in children {
        stats.nodes += 1;
        let score = minimax(&child, depth - 1, side.other(), stats);
        if improves(side, score, best) {
            best = score;
        }
    }
    best
}

/// Alpha-beta version of [`best_move`]. Picks the same board with the same score.
pub fn best_move_alpha_beta(board: &Board, depth: u8, side: Color) -> Option<(f32, Board)> {
    best_move_alpha_beta_with_stats(board, depth, side, &mut SearchStats::default())
}

pub fn best_move_alpha_beta_with_stats(
    board: &Board,
    depth: u8,
    side: Color,
    stats: &mut SearchStats,
) -> Option<(f32, Board)> {
    let mut alpha = f32::NEG_INFINITY;
    let mut beta = f32::INFINITY;
    let mut best: Option<(f32, Board)> = None;

    for child in board.successors(side) {
        stats.nodes += 1;
        let score = alpha_beta(&child, depth.saturating_sub(1), alpha, beta, side.other(), stats);
        let better = match &best {
            None => true,
            Some((best_score, _)) => improves(side, score, *best_score),
        };
        if better {
            best = Some((score, child));
            // Only a strict improvement may beat the kept board, so the window
            // closes at the current best score.
            if maximizes(side) {
                alpha = score;
            } else {
                beta = score;
            }
        }
    }
    if let Some((score, _)) = &best {
        debug!(%side, depth, score, nodes = stats.nodes, "alpha-beta picked move");
    }
    best
}

fn alpha_beta(
    board: &Board,
    depth: u8,
    mut alpha: f32,
    mut beta: f32,
    side: Color,
    stats: &mut SearchStats,
) -> f32 {
    if depth == 0 || board.winner().is_some() {
        return board.evaluate();
    }
    let children = board.successors(side);
    if children.is_empty() {
        return board.evaluate();
    }

    let mut best = worst_for(side);
    for child in children {
        stats.nodes += 1;
        let score = alpha_beta(&child, depth - 1, alpha, beta, side.other(), stats);
        if improves(side, score, best) {
            best = score;
        }
        if maximizes(side) {
            alpha = alpha.max(best);
        } else {
            beta = beta.min(best);
        }
        if alpha >= beta {
            break; // cutoff
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

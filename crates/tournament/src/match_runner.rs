//! Match runner for playing games between engines

use checkers_core::{Color, Engine, Game, Outcome, SearchLimits};
use tracing::{debug, info};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Play `num_games` games; the tally is from engine1's side.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Red moves first; alternate who gets it
            let engine1_red = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_red {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };
            result.record(game_result);

            if self.config.verbose {
                let seat = if engine1_red { "red" } else { "white" };
                let mark = match game_result {
                    GameResult::Win => "won",
                    GameResult::Loss => "lost",
                    GameResult::Draw => "drew",
                };
                println!(
                    "[{}/{}] engine 1 as {seat} {mark}  (+{} -{} ={})",
                    game_num + 1,
                    self.config.num_games,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        info!(
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );
        result
    }

    /// One game from the start position, scored for Red.
    pub fn play_game(&self, red: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        let mut game = Game::new();
        red.new_game();
        white.new_game();
        let limits = SearchLimits::depth(self.config.depth);

        for ply in 0..self.config.max_moves {
            if let Outcome::Won(color) = game.outcome() {
                debug!(ply, winner = %color, "game over");
                return match color {
                    Color::Red => GameResult::Win,
                    Color::White => GameResult::Loss,
                };
            }

            let side = game.turn();
            let result = match side {
                Color::Red => red.search(game.board(), side, limits),
                Color::White => white.search(game.board(), side, limits),
            };

            match result.board {
                Some(next) => game.install_board(next),
                // Engine found nothing although the game is running: count as a loss
                None => {
                    return match side {
                        Color::Red => GameResult::Loss,
                        Color::White => GameResult::Win,
                    };
                }
            }
        }

        GameResult::Draw
    }
}

/// One match with default settings apart from game count and depth.
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

//! Checkers in the terminal: a human against the computer.
//!
//! The human types `row col` to select a piece and then its target cell,
//! exactly like clicking twice on a board.

mod config;
mod render;

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use checkers_core::{Color, Engine, Game, Outcome, SearchLimits};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::{Args, Config, EngineKind};

fn print_usage() {
    println!("ML-checkers");
    println!();
    println!("Usage:");
    println!("  checkers [--config FILE] [--depth N]");
    println!();
    println!("Settings are read from {} when present.", config::DEFAULT_CONFIG_PATH);
    println!("During play enter `row col` (0-7) to select and move, `quit` to leave.");
}

fn create_engine(config: &Config) -> Box<dyn Engine> {
    match config.engine {
        EngineKind::Minimax => Box::new(MinimaxEngine::with_alpha_beta(config.alpha_beta)),
        EngineKind::Random => Box::new(RandomEngine::new()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = Args::parse(&args)?;
    if args.help {
        print_usage();
        return Ok(());
    }
    let config = args.resolve().context("loading settings")?;
    info!(?config, "starting game");

    let stdin = io::stdin();
    let winner = play(&config, &mut stdin.lock(), &mut io::stdout())?;
    match winner {
        Some(color) => println!("{color} wins!"),
        None => println!("Game abandoned."),
    }
    Ok(())
}

/// Run one game. Returns the winner, or None if the human quit.
fn play(config: &Config, input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<Color>> {
    let computer: Color = config.computer.into();
    let limits = SearchLimits::depth(config.depth);
    let mut engine = create_engine(config);
    let mut game = Game::new();
    let mut line = String::new();

    loop {
        if let Outcome::Won(color) = game.outcome() {
            write!(out, "{}", render::board_view(&game))?;
            return Ok(Some(color));
        }

        if game.turn() == computer {
            let result = engine.search(game.board(), computer, limits);
            let Some(next) = result.board else {
                // outcome() already covers a side without moves
                warn!("engine returned no move");
                return Ok(Some(computer.other()));
            };
            debug!(score = result.score, nodes = result.nodes, "computer moved");
            game.install_board(next);
            continue;
        }

        write!(out, "{}", render::board_view(&game))?;
        write!(out, "{} to move> ", game.turn())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match render::parse_cell(text) {
            Some((row, col)) => {
                if !game.select_cell(row, col) {
                    writeln!(out, "Nothing to do at {row},{col}.")?;
                }
            }
            None => writeln!(out, "Enter a cell as `row col`, both 0-7.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_human_can_quit() {
        let config = Config::default();
        let mut input = Cursor::new("quit\n");
        let mut out = Vec::new();
        let winner = play(&config, &mut input, &mut out).unwrap();
        assert_eq!(winner, None);
        assert!(String::from_utf8(out).unwrap().contains("Red to move>"));
    }

    #[test]
    fn test_computer_answers_human_move() {
        let config = Config {
            depth: 2,
            ..Config::default()
        };
        // Red step, then end of input
        let mut input = Cursor::new("2 1\n3 2\n");
        let mut out = Vec::new();
        let winner = play(&config, &mut input, &mut out).unwrap();
        assert_eq!(winner, None);

        let text = String::from_utf8(out).unwrap();
        // Prompted three times: select, move, then again after White replied
        assert_eq!(text.matches("Red to move>").count(), 3);
        assert!(!text.contains("White to move>"));
    }

    #[test]
    fn test_bad_input_is_reported() {
        let config = Config::default();
        let mut input = Cursor::new("9 9\n4 4\nq\n");
        let mut out = Vec::new();
        play(&config, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Enter a cell"));
        assert!(text.contains("Nothing to do at 4,4."));
    }
}

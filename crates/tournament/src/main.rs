//! `tournament match <engine> <engine>`: pit two checkers engines against each other.

use checkers_core::Engine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tournament::{MatchConfig, MatchRunner, TournamentConfig, TournamentResults};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
ML-checkers tournament runner

Usage:
  tournament match <engine1> <engine2> [--games N] [--depth D] [--max-moves M] [--out FILE]

Engines:
  minimax        alpha-beta search on material
  minimax:plain  full minimax, no pruning
  random         uniformly random legal move
  random:SEED    random with a fixed seed

Example:
  tournament match minimax random --games 20 --depth 4 --out results.json";

/// Engine from a `name[:option]` argument.
fn create_engine(arg: &str) -> Result<Box<dyn Engine>, String> {
    let (name, option) = match arg.split_once(':') {
        Some((name, option)) => (name, Some(option)),
        None => (arg, None),
    };
    match (name.to_lowercase().as_str(), option) {
        ("minimax" | "mm", None) => Ok(Box::new(MinimaxEngine::new())),
        ("minimax" | "mm", Some("plain")) => Ok(Box::new(MinimaxEngine::plain())),
        ("random" | "rand", None) => Ok(Box::new(RandomEngine::new())),
        ("random" | "rand", Some(seed)) => seed
            .parse()
            .map(|seed| Box::new(RandomEngine::seeded(seed)) as Box<dyn Engine>)
            .map_err(|_| format!("bad seed in {arg}")),
        _ => Err(format!("unknown engine: {arg}")),
    }
}

struct MatchArgs {
    engines: [String; 2],
    config: MatchConfig,
    out: Option<PathBuf>,
}

fn flag_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value.parse().map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn parse_match_args(args: &[String]) -> Result<MatchArgs, String> {
    let [first, second, rest @ ..] = args else {
        return Err("match requires two engines".to_string());
    };

    let mut config = MatchConfig::default();
    let mut out = None;
    let mut iter = rest.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--games" | "-g" => config.num_games = flag_value(flag, iter.next())?,
            "--depth" | "-d" => config.depth = flag_value(flag, iter.next())?,
            "--max-moves" | "-m" => config.max_moves = flag_value(flag, iter.next())?,
            "--out" | "-o" => out = Some(flag_value(flag, iter.next())?),
            "--quiet" | "-q" => config.verbose = false,
            other => return Err(format!("unknown option: {other}")),
        }
    }
    if config.depth == 0 {
        return Err("--depth must be at least 1".to_string());
    }

    Ok(MatchArgs {
        engines: [first.clone(), second.clone()],
        config,
        out,
    })
}

fn run_match(args: MatchArgs) -> Result<(), String> {
    let [name1, name2] = &args.engines;
    let mut engine1 = create_engine(name1)?;
    let mut engine2 = create_engine(name2)?;

    println!("=== {name1} vs {name2} ===");
    println!(
        "{} games at depth {}, draw after {} plies\n",
        args.config.num_games, args.config.depth, args.config.max_moves
    );

    let mut report = TournamentResults::new(
        &format!("{name1} vs {name2}"),
        args.engines.to_vec(),
        TournamentConfig {
            games_per_match: args.config.num_games,
            search_depth: args.config.depth,
            max_moves_per_game: args.config.max_moves,
        },
    );

    let result = MatchRunner::new(args.config).run_match(engine1.as_mut(), engine2.as_mut());
    println!(
        "\n{name1}: +{} -{} ={}  ({:.1}%)\n",
        result.wins,
        result.losses,
        result.draws,
        result.score() * 100.0
    );

    report.add_match(name1, name2, result);
    report.print_report();

    if let Some(path) = &args.out {
        // The match itself succeeded; a failed write is only reported
        if let Err(e) = report.save(path) {
            warn!(path = %path.display(), "could not save results: {e}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let outcome = match args.first().map(String::as_str) {
        Some("match") => parse_match_args(&args[1..]).and_then(run_match),
        Some("help" | "--help" | "-h") | None => {
            println!("{USAGE}");
            Ok(())
        }
        Some(other) => Err(format!("unknown command: {other}")),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}\n\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}

//! Engine-versus-engine matches for checkers.
//!
//! [`MatchRunner`] plays a series of games with colors alternating, tallies
//! them into a [`MatchResult`] and [`TournamentResults`] writes the JSON report.
//!
//! ```bash
//! cargo run -p tournament -- match minimax random --games 20 --depth 4
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;

//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Same game seen from the other player's side
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results (indexed by participant pairs)
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u8,
    pub max_moves_per_game: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: 4,
            max_moves_per_game: 200,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Write the results as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| format!("serialize: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("write {}: {e}", path.display()))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("read {}: {e}", path.display()))?;
        serde_json::from_str(&text).map_err(|e| format!("parse {}: {e}", path.display()))
    }

    /// Plain-text summary, one line per match.
    pub fn generate_report(&self) -> String {
        let cfg = &self.config;
        let mut lines = vec![
            format!("== {} ==", self.name),
            format!("engines: {}", self.participants.join(", ")),
            format!(
                "{} games per match, depth {}, draw after {} plies",
                cfg.games_per_match, cfg.search_depth, cfg.max_moves_per_game
            ),
            String::new(),
            format!("{:<20} {:<20} {:>4} {:>4} {:>4} {:>7}", "first", "second", "+", "-", "=", "score"),
        ];
        lines.extend(self.matches.iter().map(|m| {
            format!(
                "{:<20} {:<20} {:>4} {:>4} {:>4} {:>6.1}%",
                m.engine1,
                m.engine2,
                m.result.wins,
                m.result.losses,
                m.result.draws,
                m.result.score() * 100.0
            )
        }));
        lines.join("\n")
    }

    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_score() {
        let mut result = MatchResult::new();
        assert_eq!(result.score(), 0.5);

        result.record(GameResult::Win);
        result.record(GameResult::Draw);
        result.record(GameResult::Loss.flipped());
        assert_eq!(result.total_games(), 3);
        assert!((result.score() - 2.5 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_results_survive_json_file() {
        let mut results = TournamentResults::new(
            "unit",
            vec!["a".to_string(), "b".to_string()],
            TournamentConfig::default(),
        );
        results.add_match("a", "b", MatchResult { wins: 3, losses: 1, draws: 2 });

        let path = std::env::temp_dir().join(format!("checkers_results_{}.json", std::process::id()));
        results.save(&path).unwrap();
        let loaded = TournamentResults::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.name, "unit");
        assert_eq!(loaded.matches[0].result, results.matches[0].result);
        let report = loaded.generate_report();
        let line = report.lines().last().unwrap();
        assert!(line.starts_with("a "));
        assert!(line.ends_with("3    1    2   66.7%"));
    }
}

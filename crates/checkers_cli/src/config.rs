//! Game settings, read from a TOML file and overridden from the command line.

use checkers_core::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "checkers.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("invalid value for {flag}: {value}")]
    BadFlag { flag: String, value: String },

    #[error("{0} needs a value")]
    MissingValue(String),

    #[error("unknown option: {0}")]
    UnknownFlag(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Red,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Red => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Plies searched per computer move
    pub depth: u8,
    /// Side played by the computer
    pub computer: Side,
    pub engine: EngineKind,
    pub alpha_beta: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: 4,
            computer: Side::White,
            engine: EngineKind::Minimax,
            alpha_beta: true,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    /// Load settings from `path`. A missing default file is not an error.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(self)
    }
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub depth: Option<u8>,
    pub help: bool,
}

impl Args {
    pub fn parse(args: &[String]) -> Result<Self, ConfigError> {
        let mut out = Args::default();
        let mut iter = args.iter();
        while let Some(flag) = iter.next() {
            match flag.as_str() {
                "--config" | "-c" => {
                    out.config = Some(PathBuf::from(flag_value(flag, iter.next())?));
                }
                "--depth" | "-d" => {
                    let value = flag_value(flag, iter.next())?;
                    let depth = value.parse().map_err(|_| bad_flag(flag, value))?;
                    out.depth = Some(depth);
                }
                "--help" | "-h" => out.help = true,
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }
        Ok(out)
    }

    /// Settings file plus command-line overrides.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path, true)?,
            None => Config::load(Path::new(DEFAULT_CONFIG_PATH), false)?,
        };
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        config.validate()
    }
}

fn bad_flag(flag: &str, value: &str) -> ConfigError {
    ConfigError::BadFlag {
        flag: flag.to_string(),
        value: value.to_string(),
    }
}

fn flag_value<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str, ConfigError> {
    value
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

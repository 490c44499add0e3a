//! Driver configuration
//!
//! Values come from environment variables first, then command-line flags
//! override them. Unparsable environment values fall back to defaults;
//! unparsable flags are errors.

use anyhow::{anyhow, bail, Result};

use crate::core::{GameRules, ScorePolicy};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_MOVES_ALLOWED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    pub width: usize,
    pub height: usize,
    pub max_moves: u32,
    pub policy: ScorePolicy,
    /// `None` lets the binary pick a random seed
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_moves: MAX_MOVES_ALLOWED,
            policy: ScorePolicy::default(),
            seed: None,
            log_path: None,
        }
    }
}

impl AdapterConfig {
    /// Create from environment variables
    ///
    /// - `MATCH3_WIDTH`, `MATCH3_HEIGHT`: board size (default 8x8)
    /// - `MATCH3_MAX_MOVES`: move budget (default 3)
    /// - `MATCH3_SCORE_POLICY`: `latest` or `cumulative`
    /// - `MATCH3_SEED`: generator seed
    /// - `MATCH3_LOG_PATH`: JSONL effect log file
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let width = env::var("MATCH3_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = env::var("MATCH3_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let max_moves = env::var("MATCH3_MAX_MOVES")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_moves);
        let policy = env::var("MATCH3_SCORE_POLICY")
            .ok()
            .and_then(|s| ScorePolicy::from_str(&s))
            .unwrap_or(defaults.policy);
        let seed = env::var("MATCH3_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());
        let log_path = env::var("MATCH3_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            max_moves,
            policy,
            seed,
            log_path,
        }
    }

    /// Apply command-line flags on top of `self`
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || flag_value(args, i, flag);
            match flag {
                "--width" => self.width = parse_flag(flag, value()?)?,
                "--height" => self.height = parse_flag(flag, value()?)?,
                "--max-moves" => self.max_moves = parse_flag(flag, value()?)?,
                "--seed" => self.seed = Some(parse_flag(flag, value()?)?),
                "--policy" => {
                    let v = value()?;
                    self.policy = ScorePolicy::from_str(v)
                        .ok_or_else(|| anyhow!("invalid --policy value: {}", v))?;
                }
                "--log" => self.log_path = Some(value()?.to_string()),
                other => bail!("unknown argument: {}", other),
            }
            i += 2;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("board must be at least 1x1, got {}x{}", self.width, self.height);
        }
        if self.max_moves == 0 {
            bail!("max moves must be at least 1");
        }
        Ok(())
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            width: self.width,
            height: self.height,
            max_moves: self.max_moves,
            policy: self.policy,
        }
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_match_reference_game() {
        let config = AdapterConfig::default();
        assert_eq!((config.width, config.height), (8, 8));
        assert_eq!(config.max_moves, 3);
        assert_eq!(config.policy, ScorePolicy::Latest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_fields() {
        let config = AdapterConfig::default()
            .with_args(&args(&[
                "--width", "5", "--height", "6", "--seed", "42", "--policy", "cumulative", "--max-moves", "10",
                "--log", "/tmp/effects.jsonl",
            ]))
            .unwrap();
        assert_eq!((config.width, config.height), (5, 6));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.policy, ScorePolicy::Cumulative);
        assert_eq!(config.max_moves, 10);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/effects.jsonl"));
    }

    #[test]
    fn test_bad_flags_are_errors() {
        let base = AdapterConfig::default();
        assert!(base.clone().with_args(&args(&["--width"])).is_err());
        assert!(base.clone().with_args(&args(&["--width", "wide"])).is_err());
        assert!(base.clone().with_args(&args(&["--policy", "max"])).is_err());
        let err = base.with_args(&args(&["--colour", "red"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --colour");
    }

    #[test]
    fn test_zero_sizes_fail_validation() {
        let config = AdapterConfig {
            width: 0,
            ..AdapterConfig::default()
        };
        assert!(config.validate().is_err());
        let config = AdapterConfig {
            max_moves: 0,
            ..AdapterConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

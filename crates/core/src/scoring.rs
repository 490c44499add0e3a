//! Scoring module - turns an effect log into points
//!
//! Each match is worth `BASE_MATCH_SCORE × run length`. How those values add up
//! across a game is a policy choice:
//!
//! - `Latest`: the score is the value of the most recent match; each match
//!   event overwrites it
//! - `Cumulative`: every match adds to the score

use crate::types::{Effect, Match, BASE_MATCH_SCORE};

/// Points for a single match
pub fn match_score<T>(m: &Match<T>) -> u32 {
    BASE_MATCH_SCORE.saturating_mul(m.len() as u32)
}

/// How match values combine into the game score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScorePolicy {
    #[default]
    Latest,
    Cumulative,
}

impl ScorePolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Some(ScorePolicy::Latest),
            "cumulative" | "sum" => Some(ScorePolicy::Cumulative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScorePolicy::Latest => "latest",
            ScorePolicy::Cumulative => "cumulative",
        }
    }
}

/// Running score fed from effect logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    policy: ScorePolicy,
    score: u32,
    matches: u32,
    refills: u32,
}

impl ScoreTally {
    pub fn new(policy: ScorePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn record<T>(&mut self, effect: &Effect<T>) {
        match effect {
            Effect::Match(m) => {
                let points = match_score(m);
                self.score = match self.policy {
                    ScorePolicy::Latest => points,
                    ScorePolicy::Cumulative => self.score.saturating_add(points),
                };
                self.matches += 1;
            }
            Effect::Refill => self.refills += 1,
        }
    }

    pub fn record_all<T>(&mut self, effects: &[Effect<T>]) {
        for effect in effects {
            self.record(effect);
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn refills(&self) -> u32 {
        self.refills
    }

    pub fn policy(&self) -> ScorePolicy {
        self.policy
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.policy);
    }
}

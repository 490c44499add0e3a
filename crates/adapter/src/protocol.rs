//! Protocol module - JSON message types for the headless driver
//!
//! One JSON object per line in each direction. Every message carries a `type`
//! tag and the `seq` of the request it belongs to.

use serde::{Deserialize, Serialize};

use crate::snapshot::GameSnapshot;
use crate::types::{Effect, Gem, Move, Position};

// ============== Shared payloads ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionWire {
    pub row: i32,
    pub col: i32,
}

impl From<Position> for PositionWire {
    fn from(p: Position) -> Self {
        Self {
            row: p.row,
            col: p.col,
        }
    }
}

impl From<PositionWire> for Position {
    fn from(p: PositionWire) -> Self {
        Position::new(p.row, p.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GemWire {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
}

impl From<Gem> for GemWire {
    fn from(g: Gem) -> Self {
        match g {
            Gem::A => GemWire::A,
            Gem::B => GemWire::B,
            Gem::C => GemWire::C,
        }
    }
}

impl From<GemWire> for Gem {
    fn from(g: GemWire) -> Self {
        match g {
            GemWire::A => Gem::A,
            GemWire::B => Gem::B,
            GemWire::C => Gem::C,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectWire {
    Match {
        matched: GemWire,
        positions: Vec<PositionWire>,
    },
    Refill,
}

impl From<&Effect<Gem>> for EffectWire {
    fn from(effect: &Effect<Gem>) -> Self {
        match effect {
            Effect::Match(m) => EffectWire::Match {
                matched: m.matched.into(),
                positions: m.positions.iter().copied().map(PositionWire::from).collect(),
            },
            Effect::Refill => EffectWire::Refill,
        }
    }
}

pub fn effects_to_wire(effects: &[Effect<Gem>]) -> Vec<EffectWire> {
    effects.iter().map(EffectWire::from).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveWire {
    pub from: PositionWire,
    pub to: PositionWire,
}

impl From<Move> for MoveWire {
    fn from(m: Move) -> Self {
        Self {
            from: m.from.into(),
            to: m.to.into(),
        }
    }
}

// ============== Client -> Driver ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    NewGame {
        seq: u64,
        #[serde(default)]
        seed: Option<u32>,
    },
    Move {
        seq: u64,
        from: PositionWire,
        to: PositionWire,
    },
    Snapshot {
        seq: u64,
    },
    Hint {
        seq: u64,
    },
    End {
        seq: u64,
    },
}

impl Request {
    pub fn seq(&self) -> u64 {
        match self {
            Request::NewGame { seq, .. }
            | Request::Move { seq, .. }
            | Request::Snapshot { seq }
            | Request::Hint { seq }
            | Request::End { seq } => *seq,
        }
    }
}

// ============== Driver -> Client ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidRequest,
    NoGame,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    MoveResult {
        seq: u64,
        accepted: bool,
        passes: u32,
        effects: Vec<EffectWire>,
        game: GameSnapshot,
    },
    Snapshot {
        seq: u64,
        game: GameSnapshot,
    },
    Hint {
        seq: u64,
        #[serde(rename = "move")]
        mv: Option<MoveWire>,
    },
    Error {
        seq: Option<u64>,
        code: ErrorCode,
        message: String,
    },
}

impl Response {
    pub fn error(seq: Option<u64>, code: ErrorCode, message: impl Into<String>) -> Self {
        Response::Error {
            seq,
            code,
            message: message.into(),
        }
    }
}

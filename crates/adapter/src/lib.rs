//! Adapter crate - headless JSON driver for the match-3 engine
//!
//! External clients (bots, test harnesses, a UI process) play through a
//! **line-delimited JSON protocol**: one request object per line in, one
//! response object per line out.
//!
//! # Message Types
//!
//! ## Client → Driver
//!
//! - **new_game**: start a fresh settled board, optionally with a seed
//! - **move**: swap two cells; costs one move whether or not it matches
//! - **snapshot**: current board, score, and move budget
//! - **hint**: first legal swap, or `null` on a dead board
//! - **end**: finish the game; later moves are refused
//!
//! ## Driver → Client
//!
//! - **move_result**: accepted flag, cascade passes, effect log, snapshot
//! - **snapshot**: [`snapshot::GameSnapshot`]
//! - **hint**: `{ "move": { "from": .., "to": .. } }` or `{ "move": null }`
//! - **error**: `invalid_request`, `no_game`, or `game_over`
//!
//! # Environment Variables
//!
//! - `MATCH3_WIDTH` / `MATCH3_HEIGHT`: board size (default 8x8)
//! - `MATCH3_MAX_MOVES`: move budget per game (default 3)
//! - `MATCH3_SCORE_POLICY`: `latest` (default) or `cumulative`
//! - `MATCH3_SEED`: generator seed (default: random)
//! - `MATCH3_LOG_PATH`: append a JSONL effect log to this file

pub mod config;
pub mod driver;
pub mod log;
pub mod protocol;
pub mod snapshot;

pub use match3_core as core;
pub use match3_types as types;

pub use config::AdapterConfig;
pub use driver::{Driver, GemGame};
pub use log::{EffectLog, LogRecord};
pub use protocol::{ErrorCode, Request, Response};
pub use snapshot::GameSnapshot;

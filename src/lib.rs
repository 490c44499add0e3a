//! Match-3 (workspace facade crate).
//!
//! Re-exports the member crates as `match3::{core,adapter,types}` so
//! binaries, integration tests, and benches share one import path while the
//! implementation lives in dedicated crates under `crates/`.

pub use match3_adapter as adapter;
pub use match3_core as core;
pub use match3_types as types;

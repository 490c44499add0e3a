//! Core board engine - pure, deterministic, and testable
//!
//! This crate owns the match-3 rules: the grid of pieces, run detection, swap
//! validation, and the clear/fall/refill cascade. It has **zero dependencies**
//! on rendering, networking, or storage.
//!
//! - **Deterministic**: the same generator stream produces the same board and
//!   the same effect log
//! - **Pure**: [`engine::apply_move`] takes the board by reference and returns
//!   a new one; the cascade never calls back into the caller
//! - **Generic**: pieces can be any `Clone + PartialEq` type
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular board with silent out-of-bounds clamping
//! - [`matches`]: directional run counting and full-board run scans
//! - [`moves`]: swap validation and legal-move search
//! - [`cascade`]: the clear → fall → refill → rescan state machine
//! - [`engine`]: `create` / `can_move` / `apply_move` facade
//! - [`rng`]: piece generators
//! - [`scoring`]: effect-log score tally
//! - [`session`]: move budget and completion around one board
//! - [`observe`]: listener replay of effect logs
//!
//! # Example
//!
//! ```
//! use match3_core::engine::{apply_move, can_move};
//! use match3_core::{Grid, SequenceGenerator};
//! use match3_core::types::{Effect, Position};
//!
//! let rows = ["AAB", "BCA", "CBC"]
//!     .iter()
//!     .map(|r| r.chars().collect())
//!     .collect();
//! let grid = Grid::from_rows(rows).unwrap();
//! let (a, b) = (Position::new(0, 2), Position::new(1, 2));
//!
//! assert!(can_move(&grid, a, b));
//!
//! let mut generator = SequenceGenerator::new(vec!['C', 'B', 'A']);
//! let outcome = apply_move(&mut generator, &grid, a, b);
//! assert!(outcome.accepted);
//! assert!(matches!(outcome.effects[0], Effect::Match(_)));
//! assert_eq!(outcome.effects[1], Effect::Refill);
//! ```

pub mod cascade;
pub mod engine;
pub mod grid;
pub mod matches;
pub mod moves;
pub mod observe;
pub mod rng;
pub mod scoring;
pub mod session;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use cascade::{resolve, Cascade, Phase, Resolution};
pub use engine::{apply_move, create, create_settled, MoveOutcome};
pub use grid::{Grid, Lookup};
pub use matches::{all_matches, has_match};
pub use moves::{available_moves, can_move, find_move};
pub use observe::Observers;
pub use rng::{GemGenerator, Generator, SequenceGenerator, SimpleRng};
pub use scoring::{match_score, ScorePolicy, ScoreTally};
pub use session::{Game, GameRules};

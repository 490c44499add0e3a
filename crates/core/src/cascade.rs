//! Cascade resolver - clear, fall, refill, rescan
//!
//! After an accepted swap the board is driven through a small state machine
//! until no run remains:
//!
//! ```text
//! Idle -> Matching -> Clearing -> Falling -> Refilling -> Matching -> ... -> Stable
//! ```
//!
//! - **Matching**: scan the whole board; no runs means `Stable`.
//! - **Clearing**: log one `Effect::Match` per distinct run, then vacate every
//!   cell of every run.
//! - **Falling**: per column, surviving pieces sink to the bottom keeping their
//!   order.
//! - **Refilling**: every vacated cell (row-major) gets a fresh piece; log one
//!   `Effect::Refill` if any cell was filled.
//!
//! The loop has no pass limit. A generator that keeps producing completed runs
//! keeps the cascade going.

use crate::grid::Grid;
use crate::matches::all_matches;
use crate::rng::Generator;
use crate::types::{Effect, Match};

/// Resolver state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Matching,
    Clearing,
    Falling,
    Refilling,
    Stable,
}

/// Final board and the ordered effect log of one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T> {
    pub grid: Grid<T>,
    pub effects: Vec<Effect<T>>,
    /// Clear/fall/refill rounds performed (cascade depth)
    pub passes: u32,
}

/// Step-wise resolver over an owned grid
pub struct Cascade<'g, T, G: ?Sized> {
    grid: Grid<T>,
    generator: &'g mut G,
    phase: Phase,
    pending: Vec<Match<T>>,
    effects: Vec<Effect<T>>,
    passes: u32,
}

impl<'g, T, G> Cascade<'g, T, G>
where
    T: Clone + PartialEq,
    G: Generator<T> + ?Sized,
{
    pub fn new(grid: Grid<T>, generator: &'g mut G) -> Self {
        Self {
            grid,
            generator,
            phase: Phase::Idle,
            pending: Vec::new(),
            effects: Vec::new(),
            passes: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Board as of the last completed phase (may contain vacated cells)
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn effects(&self) -> &[Effect<T>] {
        &self.effects
    }

    /// Advance one phase and return the new phase
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Idle | Phase::Matching => {
                self.pending = all_matches(&self.grid);
                if self.pending.is_empty() {
                    Phase::Stable
                } else {
                    Phase::Clearing
                }
            }
            Phase::Clearing => {
                let found = std::mem::take(&mut self.pending);
                let mut logged: Vec<&Match<T>> = Vec::with_capacity(found.len());
                for m in &found {
                    if !logged.iter().any(|seen| seen.positions == m.positions) {
                        logged.push(m);
                        self.effects.push(Effect::Match(m.clone()));
                    }
                }
                clear_matches(&mut self.grid, &found);
                Phase::Falling
            }
            Phase::Falling => {
                apply_gravity(&mut self.grid);
                Phase::Refilling
            }
            Phase::Refilling => {
                if refill(&mut self.grid, &mut *self.generator) > 0 {
                    self.effects.push(Effect::Refill);
                }
                self.passes += 1;
                Phase::Matching
            }
            Phase::Stable => Phase::Stable,
        };
        self.phase
    }

    /// Step until `Stable`
    pub fn run(mut self) -> Resolution<T> {
        while self.step() != Phase::Stable {}
        Resolution {
            grid: self.grid,
            effects: self.effects,
            passes: self.passes,
        }
    }
}

/// Resolve a board to stability, returning the final board and effect log
///
/// A board that is already stable comes back unchanged with no effects.
pub fn resolve<T, G>(grid: Grid<T>, generator: &mut G) -> Resolution<T>
where
    T: Clone + PartialEq,
    G: Generator<T> + ?Sized,
{
    Cascade::new(grid, generator).run()
}

/// Vacate every cell named by any of `matches`
pub fn clear_matches<T>(grid: &mut Grid<T>, matches: &[Match<T>]) {
    for m in matches {
        for &position in &m.positions {
            grid.clear_piece(position);
        }
    }
}

/// Let pieces fall into vacated cells below them
///
/// Each column is rewritten with its vacated cells on top and its pieces
/// below, in their original top-to-bottom order. Piece count per column is
/// preserved.
pub fn apply_gravity<T>(grid: &mut Grid<T>) {
    for col in 0..grid.width() {
        let column = grid.take_column(col);
        let pieces: Vec<Option<T>> = column.into_iter().filter(Option::is_some).collect();
        let gap = grid.height() - pieces.len();
        let settled = std::iter::repeat_with(|| None).take(gap).chain(pieces).collect();
        grid.put_column(col, settled);
    }
}

/// Fill every vacated cell row-major from `generator`; returns cells filled
pub fn refill<T, G: Generator<T> + ?Sized>(grid: &mut Grid<T>, generator: &mut G) -> usize {
    let empty: Vec<_> = grid.positions().filter(|&p| grid.is_empty_at(p)).collect();
    for &position in &empty {
        grid.set_piece(position, generator.next());
    }
    empty.len()
}

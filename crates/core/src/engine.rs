//! Engine facade - the three calls external collaborators use
//!
//! - [`create`]: fill a new board from a generator
//! - [`can_move`]: validate a swap without touching the board
//! - [`apply_move`]: swap and cascade to a stable board, returning the effect log
//!
//! Every call is a pure function of its inputs plus the generator's stream; the
//! grid passed in is never modified.

use crate::cascade::{resolve, Resolution};
use crate::grid::Grid;
use crate::rng::Generator;
use crate::types::{Effect, Position};

pub use crate::moves::can_move;

/// Result of [`apply_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome<T> {
    pub grid: Grid<T>,
    pub effects: Vec<Effect<T>>,
    /// False when the swap was rejected and nothing happened
    pub accepted: bool,
    pub passes: u32,
}

impl<T> MoveOutcome<T> {
    fn rejected(grid: Grid<T>) -> Self {
        Self {
            grid,
            effects: Vec::new(),
            accepted: false,
            passes: 0,
        }
    }

    fn accepted(resolution: Resolution<T>) -> Self {
        Self {
            grid: resolution.grid,
            effects: resolution.effects,
            accepted: true,
            passes: resolution.passes,
        }
    }
}

/// Fill a `width × height` board, one generator call per cell (row-major)
///
/// The board may contain runs; see [`create_settled`].
pub fn create<T, G: Generator<T> + ?Sized>(generator: &mut G, width: usize, height: usize) -> Grid<T> {
    Grid::create(generator, width, height)
}

/// Fill a board and cascade away any runs the fill produced
pub fn create_settled<T, G>(generator: &mut G, width: usize, height: usize) -> Grid<T>
where
    T: Clone + PartialEq,
    G: Generator<T> + ?Sized,
{
    let grid = Grid::create(generator, width, height);
    resolve(grid, generator).grid
}

/// Swap two cells and resolve the resulting cascade
///
/// A move that fails [`can_move`] is not an error: the board comes back
/// unchanged with an empty effect log and `accepted == false`.
pub fn apply_move<T, G>(generator: &mut G, grid: &Grid<T>, first: Position, second: Position) -> MoveOutcome<T>
where
    T: Clone + PartialEq,
    G: Generator<T> + ?Sized,
{
    if !can_move(grid, first, second) {
        return MoveOutcome::rejected(grid.clone());
    }

    let mut swapped = grid.clone();
    swapped.swap(first, second);
    MoveOutcome::accepted(resolve(swapped, generator))
}

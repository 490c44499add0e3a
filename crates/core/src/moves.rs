//! Move validator
//!
//! A swap is legal when both cells are on the board, the two positions do not
//! differ in both row and column, and the exchanged board has a run through at
//! least one of the two cells. Orthogonal swaps across a gap (same row or
//! column, not adjacent) pass the check as well.
//!
//! Validation reads the board through a [`SwappedView`], so the grid is never
//! touched.

use arrayvec::ArrayVec;

use crate::grid::{Grid, SwappedView};
use crate::matches::has_match;
use crate::types::{Direction, Move, Position};

/// True when the positions differ in both row and column
pub fn is_diagonal_move(first: Position, second: Position) -> bool {
    (first.row - second.row).abs() > 0 && (first.col - second.col).abs() > 0
}

/// Whether swapping `first` and `second` would create a match
pub fn can_move<T: PartialEq>(grid: &Grid<T>, first: Position, second: Position) -> bool {
    if grid.is_outside_board(first) || grid.is_outside_board(second) {
        return false;
    }
    if is_diagonal_move(first, second) {
        return false;
    }

    let swapped = SwappedView::new(grid, first, second);
    has_match(&swapped, second) || has_match(&swapped, first)
}

/// On-board neighbors to the right of and below `position`
///
/// Together these cover every adjacent pair exactly once when walked in
/// row-major order.
fn forward_neighbors<T>(grid: &Grid<T>, position: Position) -> ArrayVec<Position, 2> {
    let mut neighbors = ArrayVec::new();
    for direction in [Direction::Right, Direction::Below] {
        let next = position.step(direction);
        if !grid.is_outside_board(next) {
            neighbors.push(next);
        }
    }
    neighbors
}

/// Every adjacent swap that would create a match, in row-major order
pub fn available_moves<T: PartialEq>(grid: &Grid<T>) -> Vec<Move> {
    grid.positions()
        .flat_map(|from| {
            forward_neighbors(grid, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .filter(|mv| can_move(grid, mv.from, mv.to))
        .collect()
}

/// The first adjacent swap that would create a match
pub fn find_move<T: PartialEq>(grid: &Grid<T>) -> Option<Move> {
    grid.positions().find_map(|from| {
        forward_neighbors(grid, from)
            .into_iter()
            .find(|&to| can_move(grid, from, to))
            .map(|to| Move::new(from, to))
    })
}

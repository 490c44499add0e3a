//! Grid module - the rectangular table of pieces
//!
//! Cells are stored in a flat row-major `Vec` (`row * width + col`), with `None`
//! marking a cell vacated by a clear. Empty cells only exist while a cascade is
//! in progress; every grid handed back to a caller is fully populated.
//!
//! Out-of-bounds access is silently clamped: reads return no piece and writes
//! are discarded, so the matching and gravity code can probe neighbors without
//! checking bounds first.

use crate::rng::Generator;
use crate::types::Position;

/// Read access to pieces by position
///
/// Implemented by [`Grid`] and by [`SwappedView`], which lets the match
/// detector evaluate a hypothetical swap without copying or touching the grid.
pub trait Lookup<T> {
    fn piece(&self, position: Position) -> Option<&T>;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn is_outside_board(&self, position: Position) -> bool {
        position.row < 0
            || position.col < 0
            || position.row as usize >= self.height()
            || position.col as usize >= self.width()
    }
}

/// The game board - `height` rows of `width` cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Fill a new grid row-major, one generator call per cell
    ///
    /// Dimensions are clamped to at least 1.
    pub fn create<G: Generator<T> + ?Sized>(generator: &mut G, width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let cells = (0..width * height).map(|_| Some(generator.next())).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from explicit rows
    ///
    /// Returns `None` for an empty table, an empty row, or rows of differing
    /// length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells = rows.into_iter().flatten().map(Some).collect();
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, position: Position) -> Option<usize> {
        if self.is_outside_board(position) {
            return None;
        }
        Some(position.row as usize * self.width + position.col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_outside_board(&self, position: Position) -> bool {
        Lookup::is_outside_board(self, position)
    }

    /// Piece at `position`; `None` when out of bounds or vacated
    pub fn piece(&self, position: Position) -> Option<&T> {
        self.index(position).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Write a piece; ignored when out of bounds
    pub fn set_piece(&mut self, position: Position, value: T) {
        if let Some(idx) = self.index(position) {
            self.cells[idx] = Some(value);
        }
    }

    /// Vacate a cell; ignored when out of bounds
    pub fn clear_piece(&mut self, position: Position) {
        if let Some(idx) = self.index(position) {
            self.cells[idx] = None;
        }
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        matches!(self.index(position), Some(idx) if self.cells[idx].is_none())
    }

    /// Exchange two cells; ignored unless both positions are on the board
    pub fn swap(&mut self, first: Position, second: Position) {
        if let (Some(a), Some(b)) = (self.index(first), self.index(second)) {
            self.cells.swap(a, b);
        }
    }

    /// Every on-board position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + Clone {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Number of vacated cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Option<T>]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        self.cells.chunks(self.width)
    }

    /// Take the cells of one column top to bottom, leaving them vacated
    pub(crate) fn take_column(&mut self, col: usize) -> Vec<Option<T>> {
        let width = self.width;
        (0..self.height)
            .map(|row| self.cells[row * width + col].take())
            .collect()
    }

    /// Overwrite one column top to bottom
    pub(crate) fn put_column(&mut self, col: usize, column: Vec<Option<T>>) {
        let width = self.width;
        for (row, cell) in column.into_iter().enumerate().take(self.height) {
            self.cells[row * width + col] = cell;
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Convert to nested rows; `None` if any cell is vacated
    pub fn to_rows(&self) -> Option<Vec<Vec<T>>> {
        self.rows()
            .map(|row| row.iter().cloned().collect::<Option<Vec<T>>>())
            .collect()
    }
}

impl<T> Lookup<T> for Grid<T> {
    fn piece(&self, position: Position) -> Option<&T> {
        Grid::piece(self, position)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

/// A read-only view of a grid with two cells exchanged
#[derive(Debug, Clone, Copy)]
pub struct SwappedView<'a, T> {
    grid: &'a Grid<T>,
    first: Position,
    second: Position,
}

impl<'a, T> SwappedView<'a, T> {
    pub fn new(grid: &'a Grid<T>, first: Position, second: Position) -> Self {
        Self {
            grid,
            first,
            second,
        }
    }
}

impl<T> Lookup<T> for SwappedView<'_, T> {
    fn piece(&self, position: Position) -> Option<&T> {
        if position == self.first {
            self.grid.piece(self.second)
        } else if position == self.second {
            self.grid.piece(self.first)
        } else {
            self.grid.piece(position)
        }
    }

    fn width(&self) -> usize {
        self.grid.width
    }

    fn height(&self) -> usize {
        self.grid.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceGenerator;

    fn letters(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn test_create_fills_row_major() {
        let mut gen = SequenceGenerator::new(vec![1, 2, 3, 4, 5, 6]);
        let grid = Grid::create(&mut gen, 3, 2);
        assert_eq!(grid.to_rows(), Some(vec![vec![1, 2, 3], vec![4, 5, 6]]));
    }

    #[test]
    fn test_create_clamps_zero_dimensions() {
        let mut gen = || 'A';
        let grid = Grid::create(&mut gen, 0, 0);
        assert_eq!((grid.width(), grid.height()), (1, 1));
        assert_eq!(grid.piece(Position::new(0, 0)), Some(&'A'));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        assert!(Grid::<u8>::from_rows(vec![]).is_none());
        assert!(Grid::<u8>::from_rows(vec![vec![]]).is_none());
    }

    #[test]
    fn test_out_of_bounds_reads_and_writes_are_silent() {
        let mut grid = letters(&["AB", "CA"]);
        let before = grid.clone();

        for p in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(2, 0),
            Position::new(0, 2),
        ] {
            assert!(grid.is_outside_board(p));
            assert_eq!(grid.piece(p), None);
            grid.set_piece(p, 'Z');
            grid.clear_piece(p);
        }
        grid.swap(Position::new(0, 0), Position::new(5, 5));

        assert_eq!(grid, before);
    }

    #[test]
    fn test_positions_are_row_major_and_restartable() {
        let grid = letters(&["ABC", "CAB"]);
        let positions = grid.positions();
        let first: Vec<_> = positions.clone().collect();
        let second: Vec<_> = positions.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(first[0], Position::new(0, 0));
        assert_eq!(first[3], Position::new(1, 0));
        assert_eq!(first[5], Position::new(1, 2));
    }

    #[test]
    fn test_swapped_view_exchanges_only_two_cells() {
        let grid = letters(&["AB", "CA"]);
        let view = SwappedView::new(&grid, Position::new(0, 0), Position::new(0, 1));
        assert_eq!(view.piece(Position::new(0, 0)), Some(&'B'));
        assert_eq!(view.piece(Position::new(0, 1)), Some(&'A'));
        assert_eq!(view.piece(Position::new(1, 0)), Some(&'C'));
        assert_eq!(grid.piece(Position::new(0, 0)), Some(&'A'));
    }

    #[test]
    fn test_cleared_cells_read_as_no_piece() {
        let mut grid = letters(&["AB"]);
        grid.clear_piece(Position::new(0, 1));
        assert_eq!(grid.piece(Position::new(0, 1)), None);
        assert!(grid.is_empty_at(Position::new(0, 1)));
        assert_eq!(grid.empty_count(), 1);
        assert_eq!(grid.to_rows(), None);
    }
}

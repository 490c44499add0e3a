//! Match detector - run counting and full-board scans
//!
//! Two views of the same rule:
//!
//! - [`consecutive_matches`] / [`has_match`] answer "does the piece at P sit in a
//!   run of three or more?" by walking outward from P. The move validator uses
//!   these on a hypothetical board.
//! - [`all_matches`] reports every maximal run on the board, all rows first and
//!   then all columns. A cell shared by a horizontal and a vertical run appears
//!   in both records; the detector never merges them.
//!
//! Every walk is an iterative loop bounded by the board dimensions.

use crate::grid::{Grid, Lookup};
use crate::types::{Direction, Match, Position, MIN_RUN_LEN};

/// Count neighbors in `direction` holding the same piece as `from`
///
/// The count excludes `from` itself and stops at the first differing piece,
/// vacated cell, or board edge. A vacated or off-board origin counts zero.
pub fn consecutive_matches<T, L>(board: &L, from: Position, direction: Direction) -> usize
where
    T: PartialEq,
    L: Lookup<T> + ?Sized,
{
    let Some(target) = board.piece(from) else {
        return 0;
    };

    let limit = board.width().max(board.height());
    let mut count = 0;
    let mut cursor = from.step(direction);
    while count < limit && board.piece(cursor) == Some(target) {
        count += 1;
        cursor = cursor.step(direction);
    }
    count
}

/// True when `position` is part of a horizontal or vertical run of at least
/// [`MIN_RUN_LEN`]
pub fn has_match<T, L>(board: &L, position: Position) -> bool
where
    T: PartialEq,
    L: Lookup<T> + ?Sized,
{
    if board.piece(position).is_none() {
        return false;
    }
    let horizontal = 1
        + consecutive_matches(board, position, Direction::Left)
        + consecutive_matches(board, position, Direction::Right);
    let vertical = 1
        + consecutive_matches(board, position, Direction::Above)
        + consecutive_matches(board, position, Direction::Below);
    horizontal >= MIN_RUN_LEN || vertical >= MIN_RUN_LEN
}

/// Maximal runs along one row, left to right
///
/// Out-of-range rows yield nothing.
pub fn horizontal_matches<T: Clone + PartialEq>(grid: &Grid<T>, row: usize) -> Vec<Match<T>> {
    if row >= grid.height() {
        return Vec::new();
    }
    let row = row as i32;
    scan_line(grid, (0..grid.width() as i32).map(|col| Position::new(row, col)))
}

/// Maximal runs along one column, top to bottom
///
/// Out-of-range columns yield nothing.
pub fn vertical_matches<T: Clone + PartialEq>(grid: &Grid<T>, col: usize) -> Vec<Match<T>> {
    if col >= grid.width() {
        return Vec::new();
    }
    let col = col as i32;
    scan_line(grid, (0..grid.height() as i32).map(|row| Position::new(row, col)))
}

/// Every run on the board: all horizontal runs (row by row), then all
/// vertical runs (column by column)
pub fn all_matches<T: Clone + PartialEq>(grid: &Grid<T>) -> Vec<Match<T>> {
    let mut matches = Vec::new();
    for row in 0..grid.height() {
        matches.extend(horizontal_matches(grid, row));
    }
    for col in 0..grid.width() {
        matches.extend(vertical_matches(grid, col));
    }
    matches
}

/// True when no run of [`MIN_RUN_LEN`] exists anywhere on the board
pub fn is_stable<T: Clone + PartialEq>(grid: &Grid<T>) -> bool {
    (0..grid.height()).all(|row| horizontal_matches(grid, row).is_empty())
        && (0..grid.width()).all(|col| vertical_matches(grid, col).is_empty())
}

/// Walk a line of positions, buffering same-valued neighbors and emitting
/// each buffer of [`MIN_RUN_LEN`] or more when the value changes
fn scan_line<T, I>(grid: &Grid<T>, line: I) -> Vec<Match<T>>
where
    T: Clone + PartialEq,
    I: Iterator<Item = Position>,
{
    let mut matches = Vec::new();
    let mut current: Option<&T> = None;
    let mut buffer: Vec<Position> = Vec::new();

    for position in line {
        let piece = grid.piece(position);
        if piece.is_some() && piece == current {
            buffer.push(position);
            continue;
        }

        flush_run(&mut matches, current, &mut buffer);
        current = piece;
        if piece.is_some() {
            buffer.push(position);
        }
    }
    flush_run(&mut matches, current, &mut buffer);

    matches
}

fn flush_run<T: Clone>(matches: &mut Vec<Match<T>>, current: Option<&T>, buffer: &mut Vec<Position>) {
    match current {
        Some(piece) if buffer.len() >= MIN_RUN_LEN => matches.push(Match {
            matched: piece.clone(),
            positions: std::mem::take(buffer),
        }),
        _ => buffer.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    fn positions(cells: &[(i32, i32)]) -> Vec<Position> {
        cells.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn test_consecutive_counts_in_every_direction() {
        let grid = letters(&["ABBB", "ABCA", "ACBA", "BAAA"]);
        let p = Position::new(0, 1);
        assert_eq!(consecutive_matches(&grid, p, Direction::Left), 0);
        assert_eq!(consecutive_matches(&grid, p, Direction::Right), 2);
        assert_eq!(consecutive_matches(&grid, p, Direction::Above), 0);
        assert_eq!(consecutive_matches(&grid, p, Direction::Below), 1);

        let corner = Position::new(3, 3);
        assert_eq!(consecutive_matches(&grid, corner, Direction::Left), 2);
        assert_eq!(consecutive_matches(&grid, corner, Direction::Above), 2);
        assert_eq!(consecutive_matches(&grid, corner, Direction::Right), 0);
        assert_eq!(consecutive_matches(&grid, corner, Direction::Below), 0);
    }

    #[test]
    fn test_consecutive_stops_at_vacated_cells() {
        let mut grid = letters(&["AAAA"]);
        grid.clear_piece(Position::new(0, 2));
        assert_eq!(consecutive_matches(&grid, Position::new(0, 0), Direction::Right), 1);
        assert_eq!(consecutive_matches(&grid, Position::new(0, 2), Direction::Left), 0);
    }

    #[test]
    fn test_has_match_through_the_middle() {
        let grid = letters(&["BAB", "BAC", "CAB"]);
        assert!(has_match(&grid, Position::new(1, 1)));
        assert!(has_match(&grid, Position::new(0, 1)));
        assert!(!has_match(&grid, Position::new(0, 0)));
        assert!(!has_match(&grid, Position::new(-1, 0)));
    }

    #[test]
    fn test_horizontal_runs_split_on_value_change() {
        let grid = letters(&["AAABBBBC"]);
        let matches = horizontal_matches(&grid, 0);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched, 'A');
        assert_eq!(matches[0].positions, positions(&[(0, 0), (0, 1), (0, 2)]));
        assert_eq!(matches[1].matched, 'B');
        assert_eq!(matches[1].positions, positions(&[(0, 3), (0, 4), (0, 5), (0, 6)]));
    }

    #[test]
    fn test_run_ending_at_edge_is_reported() {
        let grid = letters(&["ABBB"]);
        let matches = horizontal_matches(&grid, 0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].positions, positions(&[(0, 1), (0, 2), (0, 3)]));
    }

    #[test]
    fn test_vertical_runs_scan_top_to_bottom() {
        let grid = letters(&["AB", "CB", "CB", "CA"]);
        let first = vertical_matches(&grid, 0);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].matched, 'C');
        assert_eq!(first[0].positions, positions(&[(1, 0), (2, 0), (3, 0)]));
        assert_eq!(vertical_matches(&grid, 1)[0].positions, positions(&[(0, 1), (1, 1), (2, 1)]));
        assert!(vertical_matches(&grid, 9).is_empty());
    }

    #[test]
    fn test_horizontal_results_precede_vertical() {
        let grid = letters(&["AAAB", "CBCB", "ACAB"]);
        let matches = all_matches(&grid);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].is_horizontal());
        assert_eq!(matches[1].positions, positions(&[(0, 3), (1, 3), (2, 3)]));
    }

    #[test]
    fn test_l_shape_is_two_overlapping_records() {
        let grid = letters(&["ABC", "ACB", "AAA"]);
        let matches = all_matches(&grid);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].positions, positions(&[(2, 0), (2, 1), (2, 2)]));
        assert_eq!(matches[1].positions, positions(&[(0, 0), (1, 0), (2, 0)]));
        assert!(matches[0].contains(Position::new(2, 0)) && matches[1].contains(Position::new(2, 0)));
    }

    #[test]
    fn test_checkerboard_is_stable() {
        let grid = letters(&["ABAB", "BABA", "ABAB"]);
        assert!(all_matches(&grid).is_empty());
        assert!(is_stable(&grid));
    }
}

//! Match detector tests

use match3::core::matches::{consecutive_matches, horizontal_matches, is_stable, vertical_matches};
use match3::core::{all_matches, create_settled, has_match, GemGenerator, Grid};
use match3::types::{Direction, Gem, Position};

fn letters(rows: &[&str]) -> Grid<char> {
    Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
}

#[test]
fn test_bottom_row_is_single_horizontal_match() {
    let grid = letters(&["ABA", "BAB", "AAA"]);
    let matches = all_matches(&grid);
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.matched, 'A');
    assert_eq!(
        m.positions,
        vec![Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)]
    );
    assert!(m.is_horizontal());
}

#[test]
fn test_two_in_a_row_is_not_a_match() {
    let grid = letters(&["AAB", "BBA", "ABA"]);
    assert!(all_matches(&grid).is_empty());
    assert!(is_stable(&grid));
    for p in grid.positions() {
        assert!(!has_match(&grid, p), "no run through {:?}", p);
    }
}

#[test]
fn test_runs_are_maximal() {
    let grid = letters(&["AAAAB"]);
    let matches = horizontal_matches(&grid, 0);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].len(), 4);
}

#[test]
fn test_rows_reported_before_columns() {
    let grid = letters(&["ABC", "ABC", "ABC", "CCC"]);
    let matches = all_matches(&grid);
    assert_eq!(matches.len(), 4);
    assert!(matches[0].is_horizontal());
    assert_eq!(matches[0].matched, 'C');
    assert_eq!(matches[1].matched, 'A');
    assert_eq!(matches[2].matched, 'B');
    assert_eq!(matches[3].matched, 'C');
    assert_eq!(vertical_matches(&grid, 2)[0].len(), 4);
}

#[test]
fn test_consecutive_counts_exclude_origin() {
    let grid = letters(&["AAAB"]);
    let origin = Position::new(0, 1);
    assert_eq!(consecutive_matches(&grid, origin, Direction::Left), 1);
    assert_eq!(consecutive_matches(&grid, origin, Direction::Right), 1);
    assert_eq!(consecutive_matches(&grid, origin, Direction::Above), 0);
    assert_eq!(consecutive_matches(&grid, Position::new(4, 4), Direction::Left), 0);
    assert!(has_match(&grid, origin));
    assert!(!has_match(&grid, Position::new(0, 3)));
}

#[test]
fn test_out_of_range_lines_are_empty() {
    let grid = letters(&["AAA"]);
    assert!(horizontal_matches(&grid, 3).is_empty());
    assert!(vertical_matches(&grid, 7).is_empty());
}

#[test]
fn test_settled_boards_have_no_runs() {
    for seed in 0..20 {
        let grid: Grid<Gem> = create_settled(&mut GemGenerator::new(seed), 8, 8);
        assert!(all_matches(&grid).is_empty(), "seed {} left a run", seed);
    }
}

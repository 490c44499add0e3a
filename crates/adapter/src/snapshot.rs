//! Game snapshot - the serializable view of a session
//!
//! Board rows are strings of gem letters, top row first. This is what a
//! persistence layer stores after each move and what it hands back to resume.

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Game, Generator, Grid};
use crate::types::Gem;

/// Marker for a vacated cell in a board row
const EMPTY_CELL: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub board: Vec<String>,
    pub score: u32,
    pub moves_used: u32,
    pub moves_left: u32,
    pub completed: bool,
}

impl GameSnapshot {
    pub fn capture<G: Generator<Gem>>(game: &Game<Gem, G>) -> Self {
        let grid = game.grid();
        Self {
            width: grid.width(),
            height: grid.height(),
            board: board_rows(grid),
            score: game.score(),
            moves_used: game.moves_used(),
            moves_left: game.moves_left(),
            completed: game.is_completed(),
        }
    }

    /// Rebuild the board this snapshot describes
    pub fn to_grid(&self) -> Result<Grid<Gem>> {
        let grid = parse_board(&self.board)?;
        if grid.width() != self.width || grid.height() != self.height {
            bail!(
                "board is {}x{} but snapshot says {}x{}",
                grid.width(),
                grid.height(),
                self.width,
                self.height
            );
        }
        Ok(grid)
    }
}

pub fn board_rows(grid: &Grid<Gem>) -> Vec<String> {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map(|g| g.as_char()).unwrap_or(EMPTY_CELL))
                .collect()
        })
        .collect()
}

pub fn parse_board<S: AsRef<str>>(rows: &[S]) -> Result<Grid<Gem>> {
    let parsed = rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.as_ref()
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    Gem::from_char(ch).ok_or_else(|| anyhow!("unknown gem {:?} at row {}, col {}", ch, r, c))
                })
                .collect::<Result<Vec<Gem>>>()
        })
        .collect::<Result<Vec<Vec<Gem>>>>()?;

    Grid::from_rows(parsed).ok_or_else(|| anyhow!("board must be a non-empty rectangle"))
}

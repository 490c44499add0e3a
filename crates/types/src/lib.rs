//! Core types module - shared data structures and constants
//!
//! This crate defines the value types exchanged between the board engine, the
//! scoring consumer, and the headless driver. Everything here is plain data with
//! no external dependencies.
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs, zero-based, with row 0 at the top of the
//! board. Both components are signed so that callers can name cells outside the
//! board (for example `col - 1` from the left edge); the engine treats such
//! positions as "no piece" on read and ignores them on write.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_RUN_LEN` | 3 | Shortest run that counts as a match |
//! | `BASE_MATCH_SCORE` | 1000 | Points per matched piece |
//! | `MAX_MOVES_ALLOWED` | 3 | Moves a session may spend |
//! | `DEFAULT_WIDTH` | 8 | Columns on a fresh board |
//! | `DEFAULT_HEIGHT` | 8 | Rows on a fresh board |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Direction, Gem, Position};
//!
//! let gem = Gem::from_str("b").unwrap();
//! assert_eq!(gem, Gem::B);
//!
//! let p = Position::new(2, 3);
//! assert_eq!(p.step(Direction::Left), Position::new(2, 2));
//! assert_eq!(p.step(Direction::Below), Position::new(3, 3));
//! ```

/// Shortest horizontal or vertical run that counts as a match
pub const MIN_RUN_LEN: usize = 3;

/// Points awarded per piece in a match (reference policy: base × run length)
pub const BASE_MATCH_SCORE: u32 = 1000;

/// Moves a game session may spend before further moves are ignored
pub const MAX_MOVES_ALLOWED: u32 = 3;

/// Columns on a freshly created board
pub const DEFAULT_WIDTH: usize = 8;

/// Rows on a freshly created board
pub const DEFAULT_HEIGHT: usize = 8;

/// A board coordinate, `(row, col)`, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighboring position one cell away in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }
}

/// The four directions scanned by the match detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Above,
    Below,
}

impl Direction {
    /// `(row, col)` offset of one step in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Above => (-1, 0),
            Direction::Below => (1, 0),
        }
    }
}

/// The reference piece alphabet
///
/// The engine itself is generic over any equatable piece type; `Gem` is what
/// the stock generator and the headless driver use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gem {
    A,
    B,
    C,
}

impl Gem {
    pub const ALL: [Gem; 3] = [Gem::A, Gem::B, Gem::C];

    /// Parse a gem from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::Gem;
    ///
    /// assert_eq!(Gem::from_str("a"), Some(Gem::A));
    /// assert_eq!(Gem::from_str("C"), Some(Gem::C));
    /// assert_eq!(Gem::from_str("d"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Gem::A),
            'B' => Some(Gem::B),
            'C' => Some(Gem::C),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Gem::A => 'A',
            Gem::B => 'B',
            Gem::C => 'C',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gem::A => "A",
            Gem::B => "B",
            Gem::C => "C",
        }
    }
}

/// A straight run of at least [`MIN_RUN_LEN`] identical pieces
///
/// Positions are listed in scan order (left to right for a horizontal run, top
/// to bottom for a vertical one). L and T shapes are reported as separate
/// horizontal and vertical matches that may share a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match<T> {
    pub matched: T,
    pub positions: Vec<Position>,
}

impl<T> Match<T> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// True when the run lies along a single row
    pub fn is_horizontal(&self) -> bool {
        match self.positions.first() {
            Some(first) => self.positions.len() > 1 && self.positions.iter().all(|p| p.row == first.row),
            None => false,
        }
    }
}

/// One entry of the effect log produced by a move
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Effect<T> {
    /// A run was found and cleared
    Match(Match<T>),
    /// At least one vacated cell received a fresh piece
    Refill,
}

impl<T> Effect<T> {
    pub fn as_match(&self) -> Option<&Match<T>> {
        match self {
            Effect::Match(m) => Some(m),
            Effect::Refill => None,
        }
    }

    pub fn is_refill(&self) -> bool {
        matches!(self, Effect::Refill)
    }
}

/// A requested swap of two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

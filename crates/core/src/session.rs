//! Game session - move budget, completion, and score around the engine
//!
//! The engine has no notion of how many moves a player gets. A [`Game`] owns
//! one board and its generator, refuses moves once the budget is spent or the
//! game is over, and feeds every effect log to its score tally and observers.

use crate::engine::{apply_move, create_settled, MoveOutcome};
use crate::grid::Grid;
use crate::moves::{available_moves, find_move};
use crate::observe::Observers;
use crate::rng::Generator;
use crate::scoring::{ScorePolicy, ScoreTally};
use crate::types::{Effect, Move, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_MOVES_ALLOWED};

/// Board size and move budget for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub width: usize,
    pub height: usize,
    pub max_moves: u32,
    pub policy: ScorePolicy,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_moves: MAX_MOVES_ALLOWED,
            policy: ScorePolicy::default(),
        }
    }
}

/// One player's game
#[derive(Debug)]
pub struct Game<T, G> {
    grid: Grid<T>,
    generator: G,
    tally: ScoreTally,
    observers: Observers<T>,
    moves_used: u32,
    max_moves: u32,
    completed: bool,
}

impl<T, G> Game<T, G>
where
    T: Clone + PartialEq,
    G: Generator<T>,
{
    /// Start a game on a freshly filled, settled board
    pub fn new(mut generator: G, rules: GameRules) -> Self {
        let grid = create_settled(&mut generator, rules.width, rules.height);
        Self::with_grid(grid, generator, rules)
    }

    /// Start a game on an existing board (e.g. one restored from a snapshot)
    pub fn with_grid(grid: Grid<T>, generator: G, rules: GameRules) -> Self {
        Self {
            grid,
            generator,
            tally: ScoreTally::new(rules.policy),
            observers: Observers::new(),
            moves_used: 0,
            max_moves: rules.max_moves,
            completed: false,
        }
    }

    /// Register a listener for every effect of every later move
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&Effect<T>) + Send + 'static,
    {
        self.observers.add(listener);
    }

    /// Whether a move would currently be attempted at all
    pub fn can_play(&self) -> bool {
        !self.completed && self.moves_used < self.max_moves
    }

    /// Attempt a swap
    ///
    /// Returns `None` without touching anything if the game is over or the
    /// move budget is spent. Otherwise the attempt costs one move, accepted
    /// or not.
    pub fn make_move(&mut self, first: Position, second: Position) -> Option<MoveOutcome<T>> {
        if !self.can_play() {
            return None;
        }

        let outcome = apply_move(&mut self.generator, &self.grid, first, second);
        self.moves_used += 1;
        if outcome.accepted {
            self.grid = outcome.grid.clone();
            self.tally.record_all(&outcome.effects);
            self.observers.replay(&outcome.effects);
        }
        Some(outcome)
    }

    /// Mark the game finished; later moves are ignored
    pub fn end(&mut self) {
        self.completed = true;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn moves_used(&self) -> u32 {
        self.moves_used
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn moves_left(&self) -> u32 {
        self.max_moves.saturating_sub(self.moves_used)
    }

    pub fn score(&self) -> u32 {
        self.tally.score()
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn hint(&self) -> Option<Move> {
        find_move(&self.grid)
    }

    /// True when no adjacent swap can create a match
    pub fn is_dead(&self) -> bool {
        available_moves(&self.grid).is_empty()
    }
}

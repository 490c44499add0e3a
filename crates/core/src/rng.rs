//! RNG module - piece generators
//!
//! A [`Generator`] supplies the piece for every newly created or refilled cell.
//! Any distribution is legal; the stock [`GemGenerator`] picks uniformly over
//! the reference alphabet using a seeded LCG so games are reproducible.
//!
//! A generator must never yield a value the caller uses to mean "vacated"; the
//! engine does not guard against it.

use crate::types::Gem;

/// Source of fresh pieces
pub trait Generator<T> {
    fn next(&mut self) -> T;
}

impl<T, F: FnMut() -> T> Generator<T> for F {
    fn next(&mut self) -> T {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Uniform pick over [`Gem::ALL`]
#[derive(Debug, Clone)]
pub struct GemGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl GemGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Generator<Gem> for GemGenerator {
    fn next(&mut self) -> Gem {
        let idx = self.rng.next_range(Gem::ALL.len() as u32) as usize;
        Gem::ALL[idx]
    }
}

/// Cycles through a fixed list of pieces
///
/// Deterministic boards for tests and replays.
#[derive(Debug, Clone)]
pub struct SequenceGenerator<T> {
    pieces: Vec<T>,
    index: usize,
}

impl<T: Clone> SequenceGenerator<T> {
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    pub fn new(pieces: Vec<T>) -> Self {
        assert!(!pieces.is_empty(), "SequenceGenerator needs at least one piece");
        Self { pieces, index: 0 }
    }

    /// Number of pieces handed out so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl<T: Clone> Generator<T> for SequenceGenerator<T> {
    fn next(&mut self) -> T {
        let piece = self.pieces[self.index % self.pieces.len()].clone();
        self.index += 1;
        piece
    }
}

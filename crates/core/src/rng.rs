//! RNG module - uniform random piece selection
//!
//! A small seeded LCG keeps games reproducible: the same seed yields the same
//! sequence of pieces, which the tests and benches rely on.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would be a fixed point of the multiply step
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`. Uses the high bits, which have a much
    /// longer period than the low bits of an LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Draws piece kinds uniformly at random, independently on every draw.
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    seed: u32,
    rng: SimpleRng,
}

impl PieceRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn draw(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }
}

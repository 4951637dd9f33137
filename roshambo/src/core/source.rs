//! Computer move sources.
//!
//! The [`MoveSource`] trait decouples the round from where the computer's move
//! comes from. The binary uses [`RandomMoves`] over a seeded `StdRng`; tests use
//! the scripted sources in `test_support`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::moves::Move;

/// Supplies the computer's move for a round.
pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

/// Uniform random moves drawn from an injected RNG.
#[derive(Debug, Clone)]
pub struct RandomMoves<R> {
    rng: R,
}

impl<R: Rng> RandomMoves<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMoves<StdRng> {
    /// Deterministic source: the same seed always yields the same moves.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

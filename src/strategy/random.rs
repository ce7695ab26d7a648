//! Tier 1: uniform random play

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    ports::{Strategy, TurnView},
};

/// Picks any free cell with equal probability
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_cell(&mut self, view: &TurnView<'_>) -> Result<usize> {
        let moves = view.board.free_cells();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoFreeCells)
    }

    fn name(&self) -> &str {
        "random"
    }
}

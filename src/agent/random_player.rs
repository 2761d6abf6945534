//! Uniform random mover.
//!
//! The only "AI" this crate has: every legal move is equally likely.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::player::Player;
use crate::game_repr::{LegalMove, Position};

pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Seeded from OS entropy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: name.into(),
        }
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: name.into(),
        }
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, _position: &Position, moves: &[LegalMove]) -> Option<usize> {
        if moves.is_empty() {
            None
        } else {
            Some(self.rng.gen_range(0..moves.len()))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Game configuration consumed by [`Session`](crate::orchestrator::Session).

use crate::agent::{Player, RandomPlayer};
use crate::game_repr::Color;

/// Number of times a player may be asked for a move in one ply before the
/// session gives up.
pub const DEFAULT_MAX_SELECTION_ATTEMPTS: u32 = 8;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Uniform random mover, reproducible when a seed is given
    Random { seed: Option<u64> },
}

impl PlayerConfig {
    pub fn build(&self, color: Color) -> Box<dyn Player> {
        match *self {
            PlayerConfig::Random { seed: Some(seed) } => {
                Box::new(RandomPlayer::with_seed(format!("Random ({})", color.name()), seed))
            }
            PlayerConfig::Random { seed: None } => {
                Box::new(RandomPlayer::new(format!("Random ({})", color.name())))
            }
        }
    }
}

/// Complete session configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Configuration for the White player
    pub white_player: PlayerConfig,
    /// Configuration for the Black player
    pub black_player: PlayerConfig,
    /// Stop after this many plies; `None` plays to checkmate or stalemate
    pub max_plies: Option<u32>,
    /// Selection attempts per ply before the session aborts
    pub max_selection_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_player: PlayerConfig::Random { seed: None },
            black_player: PlayerConfig::Random { seed: None },
            max_plies: None,
            max_selection_attempts: DEFAULT_MAX_SELECTION_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Two random movers. Black's seed is derived from White's so one number
    /// reproduces the whole game.
    pub fn aivai(seed: Option<u64>) -> Self {
        Self {
            white_player: PlayerConfig::Random { seed },
            black_player: PlayerConfig::Random {
                seed: seed.map(|s| s.wrapping_add(1)),
            },
            ..Self::default()
        }
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white_player,
            Color::Black => self.black_player,
        }
    }
}

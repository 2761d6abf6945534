//! Player trait and associated types for game agents.
//!
//! A player is anything that can pick one move out of the legal-move list the
//! engine hands it: a random mover, a scripted replay, or an interactive
//! front end living outside this crate. The [`Session`](crate::orchestrator::Session)
//! owns the position; players only ever see it by shared reference.
//!
//! # Synchronous Design
//!
//! `select_move()` is blocking. The engine is turn-based and single-threaded,
//! so the session simply calls it and waits.

use crate::error::ChessError;
use crate::game_repr::{Color, LegalMove, Position};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The side to move had no legal moves while in check.
    Checkmate { winner: Color },
    /// The side to move had no legal moves and was not in check.
    Stalemate { to_move: Color },
    /// A player declined to select a move.
    Resigned { by: Color },
    /// The configured ply limit was reached first.
    PlyLimitReached,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match *self {
            GameOutcome::Checkmate { winner } => Some(winner),
            GameOutcome::Resigned { by } => Some(by.opposite()),
            _ => None,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `select_move()` must be implemented.
///
/// ## `select_move()`
/// - Returns `Some(index)` into `moves`. An out-of-range index is rejected by
///   the session and the player is asked again.
/// - Returns `None` to resign / quit.
///
/// ## `move_rejected()`
/// - Called when the selection could not be committed, right before the
///   player is asked again.
pub trait Player {
    /// Pick one of `moves` for the side to move in `position`.
    fn select_move(&mut self, position: &Position, moves: &[LegalMove]) -> Option<usize>;

    fn move_rejected(&mut self, _error: &ChessError) {
        // Default: do nothing
    }

    fn game_ended(&mut self, _outcome: GameOutcome) {
        // Default: do nothing
    }

    fn name(&self) -> &str {
        "Player"
    }
}

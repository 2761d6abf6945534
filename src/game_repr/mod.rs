mod board;
mod moves;
mod piece;
mod position;
pub mod piece_moves;

#[cfg(test)]
mod tests;

pub use board::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use piece_moves::{MoveSet, PieceMoves, MOVE_SETS};

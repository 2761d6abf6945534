pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod notation;
pub mod orchestrator;
pub mod persist;

pub use error::{ChessError, Result};

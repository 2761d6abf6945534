//! Game session: drives two players through the ply state machine.
//!
//! ```text
//! PRE_MOVE (check status) -> GENERATE (legal moves, castling when not in check)
//!   -> [no moves: checkmate if in check, else stalemate]
//!   -> SELECT -> COMMIT (apply on a snapshot, reject if own king attacked)
//!   -> [rejected: back to SELECT]
//!   -> next ply
//! ```
//!
//! The session owns the [`Position`] exclusively. Players get a shared
//! reference and answer with an index into the move list.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::agent::{GameOutcome, Player};
use crate::config::GameConfig;
use crate::error::{ChessError, Result};
use crate::game_repr::{Color, Position};
use crate::notation;

pub struct Session {
    position: Position,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    config: GameConfig,
    plies: u32,
    /// Side to move and full-move count when the session started.
    start: (Color, u32),
    /// Labels of the committed moves, in order.
    history: Vec<String>,
    outcome: Option<GameOutcome>,
}

impl Session {
    /// Session with the players described by `config`, starting from
    /// `initial` or the standard setup.
    pub fn new(config: GameConfig, initial: Option<Position>) -> Self {
        let white = config.white_player.build(Color::White);
        let black = config.black_player.build(Color::Black);
        Self::with_players(config, initial, white, black)
    }

    pub fn with_players(
        config: GameConfig,
        initial: Option<Position>,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
    ) -> Self {
        let position = initial.unwrap_or_default();
        info!(
            "session started: {} (White) vs {} (Black), {} to move",
            white.name(),
            black.name(),
            position.turn_color().name()
        );
        Self {
            start: (position.turn_color(), position.state.num_turns),
            position,
            white,
            black,
            config,
            plies: 0,
            history: Vec::new(),
            outcome: None,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Move history as numbered lines, `"1. e4 e5"`, one full move per line.
    /// A game that starts with Black to move opens with `"1... e5"`.
    pub fn pgn(&self) -> String {
        let (mut color, turns) = self.start;
        let mut number = turns + 1;
        let mut text = String::new();
        for (i, label) in self.history.iter().enumerate() {
            match color {
                Color::White => text.push_str(&format!("{number}. {label}")),
                Color::Black => {
                    if i == 0 {
                        text.push_str(&format!("{number}... {label}"));
                    } else {
                        text.push(' ');
                        text.push_str(label);
                    }
                    text.push('\n');
                    number += 1;
                }
            }
            color = color.opposite();
        }
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }

    pub fn save_pgn(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.pgn())?;
        debug!("wrote move history to {}", path.display());
        Ok(())
    }

    /// Plays one ply. Returns the outcome once the game is over.
    ///
    /// A rejected selection (out of range, or leaving the own king in check)
    /// puts the position back as it was and asks the same player again, up
    /// to `max_selection_attempts` times.
    pub fn play_ply(&mut self) -> Result<Option<GameOutcome>> {
        if let Some(outcome) = self.outcome {
            return Ok(Some(outcome));
        }
        if self.config.max_plies.is_some_and(|max| self.plies >= max) {
            return Ok(Some(self.finish(GameOutcome::PlyLimitReached)));
        }

        let color = self.position.turn_color();
        let in_check = self.position.is_in_check(color)?;
        let moves = self.position.generate_legal_moves(color)?;
        if moves.is_empty() {
            let outcome = if in_check {
                GameOutcome::Checkmate {
                    winner: color.opposite(),
                }
            } else {
                GameOutcome::Stalemate { to_move: color }
            };
            return Ok(Some(self.finish(outcome)));
        }

        debug!(
            "Turn {}, {} to move{}",
            self.position.state.num_turns + 1,
            color.name(),
            if in_check { " (in check)" } else { "" }
        );
        let labels = notation::labels(&self.position.board, &moves);

        let player = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let mut attempts = 0;
        loop {
            attempts += 1;
            let Some(index) = player.select_move(&self.position, &moves) else {
                return Ok(Some(self.finish(GameOutcome::Resigned { by: color })));
            };

            let committed = match moves.get(index) {
                Some(mv) => self.position.commit_move(mv),
                None => Err(ChessError::InvalidSelection {
                    index,
                    len: moves.len(),
                }),
            };

            match committed {
                Ok(()) => {
                    debug!("{} plays {}", player.name(), labels[index]);
                    self.history.push(labels[index].clone());
                    self.plies += 1;
                    return Ok(None);
                }
                Err(e @ (ChessError::InvalidSelection { .. } | ChessError::IllegalMove(_))) => {
                    warn!("{} rejected: {e}", player.name());
                    player.move_rejected(&e);
                    if attempts >= self.config.max_selection_attempts {
                        return Err(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Plays until the game ends.
    pub fn run(&mut self) -> Result<GameOutcome> {
        loop {
            if let Some(outcome) = self.play_ply()? {
                return Ok(outcome);
            }
        }
    }

    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        match outcome {
            GameOutcome::Checkmate { winner } => info!("Checkmate, {} wins.", winner.name()),
            GameOutcome::Stalemate { to_move } => {
                info!("Stalemate; no moves left for {}.", to_move.name())
            }
            GameOutcome::Resigned { by } => info!("{} resigned.", by.name()),
            GameOutcome::PlyLimitReached => info!("Stopped after {} plies.", self.plies),
        }
        self.outcome = Some(outcome);
        self.white.game_ended(outcome);
        self.black.game_ended(outcome);
        outcome
    }
}

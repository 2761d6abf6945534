use log::{debug, trace};

use super::piece_moves::PieceMoves;
use super::*;
use crate::error::{ChessError, Result};

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME STATE, LEGALITY AND MOVE APPLICATION
 */

/// A value kept once per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByColor<T> {
    pub white: T,
    pub black: T,
}

impl<T> ByColor<T> {
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub turn_color: Color,
    /// Full moves played; bumped after each Black ply.
    pub num_turns: u32,
    /// Plies since the last pawn move or capture. Tracked, never enforced.
    pub fifty_move_rule_turn_count: u32,
    /// Consecutive plies each king has been in check.
    pub king_in_check: ByColor<u32>,
    pub king_was_checked: ByColor<bool>,
}

impl GameState {
    pub fn new(turn_color: Color) -> Self {
        Self {
            turn_color,
            num_turns: 0,
            fifty_move_rule_turn_count: 0,
            king_in_check: ByColor::default(),
            king_was_checked: ByColor::default(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate { to_move: Color },
}

/// Board plus bookkeeping for one game. Cloning it is the way hypothetical
/// moves are tried without touching the real game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub state: GameState,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_parts(Board::standard(), GameState::default())
    }
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing board and state; threat flags are recomputed.
    pub fn from_parts(board: Board, state: GameState) -> Self {
        let mut pos = Self { board, state };
        pos.refresh_threats();
        pos
    }

    /// Position from a FEN piece-placement field with `turn_color` to move.
    pub fn from_placement(placement: &str, turn_color: Color) -> Result<Self> {
        Ok(Self::from_parts(
            Board::from_placement(placement)?,
            GameState::new(turn_color),
        ))
    }

    pub fn turn_color(&self) -> Color {
        self.state.turn_color
    }

    // ===========================
    // Move generation
    // ===========================

    /// Every pseudo-legal move of `color`, tagged with its origin.
    ///
    /// Squares are visited file by file; each piece contributes its catalog
    /// moves followed by its en passant captures. Castling is not included
    /// and nothing is filtered for self-check.
    pub fn generate_pseudo_moves(&self, color: Color) -> Result<Vec<LegalMove>> {
        let mut moves = Vec::with_capacity(40);
        let mut scratch = PieceMoves::new();

        for origin in Board::coords() {
            if !self.board.piece(origin).is(color) {
                continue;
            }
            scratch.clear();
            self.board.pseudo_moves_into(origin, &mut scratch);
            for &mv in &scratch {
                push_move(&mut moves, LegalMove::simple(origin, mv))?;
            }
            self.board.en_passant_moves_into(origin, &mut moves)?;
        }
        Ok(moves)
    }

    /// Legal moves of `color`: pseudo-legal moves, castling when not in
    /// check, then everything that would leave the king attacked removed.
    pub fn generate_legal_moves(&self, color: Color) -> Result<Vec<LegalMove>> {
        let in_check = self.is_in_check(color)?;
        let mut moves = self.generate_pseudo_moves(color)?;
        if !in_check {
            self.add_castle_moves(color, &mut moves)?;
        }
        let pseudo_count = moves.len();
        let legal = self.remove_illegal_moves(color, moves)?;
        debug!(
            "{}: {} pseudo-legal, {} legal moves (in check: {})",
            color.name(),
            pseudo_count,
            legal.len(),
            in_check
        );
        Ok(legal)
    }

    /// Keeps the moves of `color` that do not leave its king attacked.
    ///
    /// Every candidate is played out on a private copy of the position, so
    /// `self` is never touched.
    pub fn remove_illegal_moves(&self, color: Color, moves: Vec<LegalMove>) -> Result<Vec<LegalMove>> {
        let mut legal = Vec::new();
        legal
            .try_reserve(moves.len())
            .map_err(|_| ChessError::ResourceExhausted {
                requested: moves.len(),
                limit: MAX_LEGAL_MOVES,
            })?;

        for mv in moves {
            let mut scratch = *self;
            scratch.board.move_pieces(&mv);
            scratch.board.clear_threats();
            scratch.recompute_threats(color.opposite());
            scratch.recompute_threats(color);
            if scratch.is_in_check(color)? {
                trace!("discarding {mv}: leaves {} king attacked", color.name());
                continue;
            }
            legal.push(mv);
        }
        Ok(legal)
    }

    // ===========================
    // Threats
    // ===========================

    /// Flags every enemy piece that a capture of `color` could land on.
    /// Existing flags are not cleared first.
    pub fn recompute_threats(&mut self, color: Color) {
        let mut scratch = PieceMoves::new();
        for origin in Board::coords() {
            if !self.board.piece(origin).is(color) {
                continue;
            }
            scratch.clear();
            self.board.pseudo_moves_into(origin, &mut scratch);
            for mv in scratch.iter().filter(|mv| mv.is_capture) {
                let target = &mut self.board[mv.destination].piece;
                if target.is(color.opposite()) {
                    target.set_threatened();
                }
            }
        }
    }

    /// Clears the threat map and rebuilds it for both sides.
    pub fn refresh_threats(&mut self) {
        let mover = self.state.turn_color;
        self.board.clear_threats();
        self.recompute_threats(mover.opposite());
        self.recompute_threats(mover);
    }

    /// Reads the threat flag of `color`'s king. Assumes threats are current.
    pub fn is_in_check(&self, color: Color) -> Result<bool> {
        let king = self.board.find_king(color)?;
        Ok(self.board.piece(king).is_threatened)
    }

    // ===========================
    // State transition
    // ===========================

    /// Plays `mv` for the side to move without checking legality.
    ///
    /// The update is all-or-nothing: on error `self` is unchanged.
    pub fn apply_move(&mut self, mv: &LegalMove) -> Result<()> {
        let mut next = *self;
        next.apply_in_place(mv)?;
        *self = next;
        Ok(())
    }

    /// Plays `mv` and keeps it only if the mover's king ends up safe.
    /// Otherwise the pre-move position is kept and `IllegalMove` returned.
    pub fn commit_move(&mut self, mv: &LegalMove) -> Result<()> {
        let mover = self.state.turn_color;
        let mut next = *self;
        next.apply_in_place(mv)?;
        if next.is_in_check(mover)? {
            debug!("{mv} leaves {} in check, restoring snapshot", mover.name());
            return Err(ChessError::IllegalMove(mover));
        }
        *self = next;
        Ok(())
    }

    fn apply_in_place(&mut self, mv: &LegalMove) -> Result<()> {
        let mover = self.state.turn_color;
        self.board.settle_pawns(mover.opposite());

        let moved = self.board.piece(mv.origin());
        let first_pawn_move = moved.piece_type == Type::Pawn && !moved.has_moved;
        let resets_fifty = moved.piece_type == Type::Pawn || mv.is_capture();

        self.board.move_pieces(mv);
        if !first_pawn_move {
            for step in mv.steps() {
                self.board[step.destination()].piece.has_moved = true;
            }
        }
        for sq in self.board.promote_pawns(mover) {
            debug!("{} pawn promoted on {sq}", mover.name());
        }

        self.refresh_threats();
        let white_check = self.is_in_check(Color::White)?;
        let black_check = self.is_in_check(Color::Black)?;
        for (color, in_check) in [(Color::White, white_check), (Color::Black, black_check)] {
            let streak = self.state.king_in_check.get_mut(color);
            if in_check {
                *streak += 1;
                *self.state.king_was_checked.get_mut(color) = true;
            } else {
                *streak = 0;
            }
        }

        if resets_fifty {
            self.state.fifty_move_rule_turn_count = 0;
        } else {
            self.state.fifty_move_rule_turn_count += 1;
        }
        if mover == Color::Black {
            self.state.num_turns += 1;
        }
        self.state.turn_color = mover.opposite();
        Ok(())
    }

    // ===========================
    // Game end
    // ===========================

    pub fn status(&self) -> Result<GameStatus> {
        let color = self.state.turn_color;
        let in_check = self.is_in_check(color)?;
        if !self.generate_legal_moves(color)?.is_empty() {
            return Ok(GameStatus::Ongoing);
        }
        Ok(if in_check {
            GameStatus::Checkmate {
                winner: color.opposite(),
            }
        } else {
            GameStatus::Stalemate { to_move: color }
        })
    }

    /// Counts leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&self, depth: u32) -> Result<u64> {
        if depth == 0 {
            return Ok(1);
        }
        let moves = self.generate_legal_moves(self.state.turn_color)?;
        if depth == 1 {
            return Ok(moves.len() as u64);
        }

        let mut nodes = 0;
        for mv in &moves {
            let mut child = *self;
            child.apply_move(mv)?;
            nodes += child.perft(depth - 1)?;
        }
        Ok(nodes)
    }
}

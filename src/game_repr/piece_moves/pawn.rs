use crate::error::Result;
use crate::game_repr::{push_move, Board, Color, Coord, LegalMove, Move, Piece, Step, Type, BOARD_WIDTH};

/// Rank a pawn of `color` has to stand on to capture en passant.
pub fn en_passant_rank(color: Color) -> i8 {
    match color {
        Color::White => 4,
        Color::Black => 3,
    }
}

impl Board {
    /// En passant captures for the pawn on `origin`.
    ///
    /// Eligibility is read off the board, not the move history: a pawn on its
    /// fifth rank next to an enemy pawn that has never moved may take it. The
    /// capture is expressed as a two-step chain, the enemy pawn stepping back
    /// one rank and the capturing pawn landing on top of it.
    pub fn en_passant_moves_into(&self, origin: Coord, moves: &mut Vec<LegalMove>) -> Result<()> {
        let pawn = self.piece(origin);
        if pawn.piece_type != Type::Pawn || origin.rank != en_passant_rank(pawn.color) {
            return Ok(());
        }

        for side in [-1, 1] {
            let victim_sq = Coord::new(origin.file + side, origin.rank);
            if !victim_sq.in_bounds() {
                continue;
            }
            let victim = self.piece(victim_sq);
            if !victim.is_a(pawn.color.opposite(), Type::Pawn) || victim.has_moved {
                continue;
            }
            let landing = Coord::new(victim_sq.file, origin.rank + pawn.color.forward());
            if !self[landing].is_empty() {
                continue;
            }
            push_move(
                moves,
                LegalMove::EnPassant {
                    pawn_removal: Step::new(victim_sq, Move::quiet(landing)),
                    capture: Step::new(origin, Move::capture(landing)),
                },
            )?;
        }
        Ok(())
    }

    /// Marks pawns of `color` that left their home rank as moved.
    ///
    /// A pawn's first move deliberately leaves `has_moved` unset so that the
    /// opponent can still take it en passant on the very next ply. Running this
    /// before the opponent's move is applied closes that window again.
    pub fn settle_pawns(&mut self, color: Color) {
        for c in Self::coords() {
            if c.rank == color.pawn_home_rank() {
                continue;
            }
            let square = &mut self[c];
            if square.piece.is_a(color, Type::Pawn) {
                square.piece.has_moved = true;
            }
        }
    }

    /// Turns every pawn of `color` on its last rank into a queen. The piece
    /// keeps its flags. Returns the promoted squares.
    pub fn promote_pawns(&mut self, color: Color) -> Vec<Coord> {
        let rank = color.promotion_rank();
        let mut promoted = Vec::new();
        for file in 0..BOARD_WIDTH {
            let c = Coord::new(file, rank);
            let piece = self.piece(c);
            if piece.is_a(color, Type::Pawn) {
                self.set_piece(
                    c,
                    Piece {
                        piece_type: Type::Queen,
                        ..piece
                    },
                );
                promoted.push(c);
            }
        }
        promoted
    }
}

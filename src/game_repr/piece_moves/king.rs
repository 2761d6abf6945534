use log::trace;

use crate::error::Result;
use crate::game_repr::{push_move, Color, Coord, LegalMove, Move, Position, Step, Type, BOARD_WIDTH};

/// Files the king and rook land on for each castling side.
struct CastleSide {
    name: &'static str,
    rook_file: i8,
    king_to: i8,
    rook_to: i8,
}

/// File the king starts on.
const KING_FILE: i8 = 4;

const QUEEN_SIDE: CastleSide = CastleSide {
    name: "queen side",
    rook_file: 0,
    king_to: 2,
    rook_to: 3,
};

const KING_SIDE: CastleSide = CastleSide {
    name: "king side",
    rook_file: BOARD_WIDTH - 1,
    king_to: 6,
    rook_to: 5,
};

impl Position {
    /// Appends the castling moves available to `color`, queen side first.
    ///
    /// Requires a king on its start square that has never moved and was never
    /// threatened, an unmoved rook on the corner, and nothing standing
    /// between them.
    ///
    /// NOTE: the squares the king passes over are not checked for attacks.
    /// Only the landing square is screened, by the legality filter.
    pub fn add_castle_moves(&self, color: Color, moves: &mut Vec<LegalMove>) -> Result<()> {
        let board = &self.board;
        let king_sq = board.find_king(color)?;
        let king = board.piece(king_sq);
        let rank = color.back_rank();
        if king.has_moved || king.was_ever_threatened || king_sq != Coord::new(KING_FILE, rank) {
            return Ok(());
        }

        for side in [QUEEN_SIDE, KING_SIDE] {
            let rook_sq = Coord::new(side.rook_file, rank);
            let rook = board.piece(rook_sq);
            if !rook.is_a(color, Type::Rook) || rook.has_moved {
                continue;
            }

            let (lo, hi) = if side.rook_file < king_sq.file {
                (side.rook_file + 1, king_sq.file)
            } else {
                (king_sq.file + 1, side.rook_file)
            };
            if (lo..hi).any(|file| !board[Coord::new(file, rank)].is_empty()) {
                trace!("{} cannot castle {}: path blocked", color.name(), side.name);
                continue;
            }

            push_move(
                moves,
                LegalMove::Castle {
                    king: Step::new(king_sq, Move::quiet(Coord::new(side.king_to, rank))),
                    rook: Step::new(rook_sq, Move::quiet(Coord::new(side.rook_to, rank))),
                },
            )?;
        }
        Ok(())
    }
}

pub mod king;
pub mod pawn;

use smallvec::SmallVec;

use super::{Board, Color, Coord, Move, Type, BOARD_WIDTH};

/// Scratch buffer for the moves of a single piece. A queen tops out at 27.
pub type PieceMoves = SmallVec<[Move; 32]>;

/// Movement description of one piece type.
///
/// Passive directions only reach empty squares, hostile directions only
/// reach enemy pieces. Each direction is walked up to `max_steps` times.
#[derive(Debug, Clone, Copy)]
pub struct MoveSet {
    pub passive: &'static [Coord],
    pub hostile: &'static [Coord],
    pub max_steps: i8,
}

const PAWN_PASSIVE: [Coord; 1] = [Coord::new(0, 1)];
const PAWN_HOSTILE: [Coord; 2] = [Coord::new(1, 1), Coord::new(-1, 1)];
const BISHOP_DIRS: [Coord; 4] = [
    Coord::new(1, 1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
];
const KNIGHT_JUMPS: [Coord; 8] = [
    Coord::new(2, 1),
    Coord::new(1, 2),
    Coord::new(-1, 2),
    Coord::new(-2, 1),
    Coord::new(-2, -1),
    Coord::new(-1, -2),
    Coord::new(1, -2),
    Coord::new(2, -1),
];
const ROOK_DIRS: [Coord; 4] = [
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(-1, 0),
];
const ROYAL_DIRS: [Coord; 8] = [
    Coord::new(0, 1),
    Coord::new(1, 1),
    Coord::new(1, 0),
    Coord::new(1, -1),
    Coord::new(0, -1),
    Coord::new(-1, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
];

/// Catalog indexed by [`Type::code`].
pub static MOVE_SETS: [MoveSet; 7] = [
    // None
    MoveSet { passive: &[], hostile: &[], max_steps: 0 },
    // Pawn
    MoveSet { passive: &PAWN_PASSIVE, hostile: &PAWN_HOSTILE, max_steps: 1 },
    // Bishop
    MoveSet { passive: &BISHOP_DIRS, hostile: &BISHOP_DIRS, max_steps: BOARD_WIDTH },
    // Knight
    MoveSet { passive: &KNIGHT_JUMPS, hostile: &KNIGHT_JUMPS, max_steps: 1 },
    // Rook
    MoveSet { passive: &ROOK_DIRS, hostile: &ROOK_DIRS, max_steps: BOARD_WIDTH },
    // Queen
    MoveSet { passive: &ROYAL_DIRS, hostile: &ROYAL_DIRS, max_steps: BOARD_WIDTH },
    // King
    MoveSet { passive: &ROYAL_DIRS, hostile: &ROYAL_DIRS, max_steps: 1 },
];

impl Type {
    pub fn move_set(&self) -> &'static MoveSet {
        &MOVE_SETS[self.code() as usize]
    }
}

impl Board {
    /// Pseudo-legal moves of the piece on `origin`, in catalog order.
    ///
    /// Ignores whether the move exposes the mover's own king. An empty square
    /// yields nothing. The buffer is NOT cleared before adding moves.
    pub fn pseudo_moves_into(&self, origin: Coord, moves: &mut PieceMoves) {
        let piece = self.piece(origin);
        if piece.is_none() {
            return;
        }
        let set = piece.piece_type.move_set();
        let is_pawn = piece.piece_type == Type::Pawn;
        // Only pawns are direction-sensitive: Black walks toward rank 0.
        let orient = |dir: Coord| -> Coord {
            if is_pawn && piece.color == Color::Black {
                Coord::new(dir.file, -dir.rank)
            } else {
                dir
            }
        };

        // An unmoved pawn reaches one square further, on quiet moves only.
        let passive_steps = if is_pawn && !piece.has_moved {
            set.max_steps + 1
        } else {
            set.max_steps
        };
        for &dir in set.passive {
            let dir = orient(dir);
            for step in 1..=passive_steps {
                let target = origin + dir.scaled(step);
                if !target.in_bounds() || !self[target].is_empty() {
                    break;
                }
                moves.push(Move::quiet(target));
            }
        }

        for &dir in set.hostile {
            let dir = orient(dir);
            for step in 1..=set.max_steps {
                let target = origin + dir.scaled(step);
                if !target.in_bounds() {
                    break;
                }
                let occupant = self.piece(target);
                if occupant.is_none() {
                    continue;
                }
                if occupant.color != piece.color {
                    moves.push(Move::capture(target));
                }
                break;
            }
        }
    }

    /// Wrapper around [`Board::pseudo_moves_into`].
    pub fn pseudo_moves(&self, origin: Coord) -> PieceMoves {
        let mut moves = PieceMoves::new();
        self.pseudo_moves_into(origin, &mut moves);
        moves
    }
}

use std::fmt;
use std::ops::Add;

use smallvec::{smallvec, SmallVec};

use crate::error::{ChessError, Result};

pub const BOARD_WIDTH: i8 = 8;
pub const BOARD_HEIGHT: i8 = 8;

/// Safety ceiling for the number of moves collected in a single ply.
pub const MAX_LEGAL_MOVES: usize = 300;

/// A square coordinate, or a direction when used as an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    pub fn in_bounds(&self) -> bool {
        (0..BOARD_WIDTH).contains(&self.file) && (0..BOARD_HEIGHT).contains(&self.rank)
    }

    pub fn scaled(&self, factor: i8) -> Self {
        Self::new(self.file * factor, self.rank * factor)
    }

    /// Parses `"e4"`-style algebraic squares.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Self::new(
            (file as u8 - b'a') as i8,
            (rank as u8 - b'1') as i8,
        ))
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.file as u8) as char
    }

    pub fn rank_char(&self) -> char {
        (b'1' + self.rank as u8) as char
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Destination of a move, relative to an implicit origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub destination: Coord,
    pub is_capture: bool,
}

impl Move {
    pub fn quiet(destination: Coord) -> Self {
        Self {
            destination,
            is_capture: false,
        }
    }

    pub fn capture(destination: Coord) -> Self {
        Self {
            destination,
            is_capture: true,
        }
    }
}

/// One piece moving from `origin` to `mv.destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub origin: Coord,
    pub mv: Move,
}

impl Step {
    pub fn new(origin: Coord, mv: Move) -> Self {
        Self { origin, mv }
    }

    pub fn destination(&self) -> Coord {
        self.mv.destination
    }
}

/// A move together with any second piece that has to move atomically with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalMove {
    Simple(Step),
    /// King lands on its castled square, rook on the square it bridges.
    Castle { king: Step, rook: Step },
    /// The enemy pawn "retreats" one rank, then the capturing pawn lands on
    /// top of it. Both steps end on the same square.
    EnPassant { pawn_removal: Step, capture: Step },
}

impl LegalMove {
    pub fn simple(origin: Coord, mv: Move) -> Self {
        Self::Simple(Step::new(origin, mv))
    }

    /// The step of the piece belonging to the side to move that the player
    /// actually picked up.
    pub fn primary(&self) -> Step {
        match *self {
            LegalMove::Simple(step) => step,
            LegalMove::Castle { king, .. } => king,
            LegalMove::EnPassant { capture, .. } => capture,
        }
    }

    pub fn origin(&self) -> Coord {
        self.primary().origin
    }

    pub fn destination(&self) -> Coord {
        self.primary().destination()
    }

    pub fn is_capture(&self) -> bool {
        self.primary().mv.is_capture
    }

    pub fn is_castle(&self) -> bool {
        matches!(self, LegalMove::Castle { .. })
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self, LegalMove::EnPassant { .. })
    }

    /// Steps in the order they have to be applied to the board.
    pub fn steps(&self) -> SmallVec<[Step; 2]> {
        match *self {
            LegalMove::Simple(step) => smallvec![step],
            LegalMove::Castle { king, rook } => smallvec![king, rook],
            LegalMove::EnPassant {
                pawn_removal,
                capture,
            } => smallvec![pawn_removal, capture],
        }
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.origin(), sep, self.destination())
    }
}

/// Appends to a per-ply move list, growing it geometrically and refusing to
/// go past [`MAX_LEGAL_MOVES`].
pub fn push_move(moves: &mut Vec<LegalMove>, mv: LegalMove) -> Result<()> {
    if moves.len() >= MAX_LEGAL_MOVES {
        return Err(ChessError::ResourceExhausted {
            requested: moves.len() + 1,
            limit: MAX_LEGAL_MOVES,
        });
    }
    moves
        .try_reserve(1)
        .map_err(|_| ChessError::ResourceExhausted {
            requested: moves.len() + 1,
            limit: MAX_LEGAL_MOVES,
        })?;
    moves.push(mv);
    Ok(())
}

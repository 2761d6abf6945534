use crate::error::{ChessError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank index pawns of this color start on.
    pub fn pawn_home_rank(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Rank index a pawn of this color promotes on.
    pub fn promotion_rank(&self) -> i8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// Rank index the king and rooks of this color start on.
    pub fn back_rank(&self) -> i8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Forward direction along the rank axis.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

/// Piece type. `None` marks an empty square; it is a value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    None,
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl Type {
    pub const ALL: [Type; 7] = [
        Type::None,
        Type::Pawn,
        Type::Bishop,
        Type::Knight,
        Type::Rook,
        Type::Queen,
        Type::King,
    ];

    /// Numeric code, also the index into the movement catalog.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Uppercase letter used in move labels, `' '` for an empty square.
    pub fn to_char(&self) -> char {
        match self {
            Type::Pawn => 'P',
            Type::Bishop => 'B',
            Type::Knight => 'N',
            Type::Rook => 'R',
            Type::Queen => 'Q',
            Type::King => 'K',
            Type::None => ' ',
        }
    }
}

/// A piece plus its status flags.
///
/// When `piece_type` is [`Type::None`] every other field is meaningless and
/// consumers must not read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
    pub has_moved: bool,
    /// Recomputed from scratch every ply.
    pub is_threatened: bool,
    /// Monotonic: once set it is never cleared. Only castling reads it.
    pub was_ever_threatened: bool,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub fn new(color: Color, piece_type: Type) -> Self {
        Self {
            color,
            piece_type,
            has_moved: false,
            is_threatened: false,
            was_ever_threatened: false,
        }
    }

    pub fn none() -> Self {
        Self::new(Color::White, Type::None)
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    pub fn is_a(&self, color: Color, piece_type: Type) -> bool {
        self.piece_type == piece_type && self.color == color
    }

    /// Marks the piece as attacked this ply. Also latches `was_ever_threatened`.
    pub fn set_threatened(&mut self) {
        self.is_threatened = true;
        self.was_ever_threatened = true;
    }

    pub fn from_char(c: char) -> Result<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => {
                return Err(ChessError::InvalidPlacement(format!(
                    "unknown piece character '{c}'"
                )))
            }
        };
        Ok(Self::new(color, piece_type))
    }

    /// Board diagram letter: uppercase for White, lowercase for Black.
    pub fn to_char(&self) -> char {
        match self.piece_type {
            Type::None => '.',
            t if self.color == Color::White => t.to_char(),
            t => t.to_char().to_ascii_lowercase(),
        }
    }
}

/// One cell of the board. `color` is the display color fixed at setup and
/// plays no part in the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub piece: Piece,
    pub color: Color,
}

impl Square {
    /// Empty square with the display color for `(file + rank) mod 2`.
    pub fn empty(file: i8, rank: i8) -> Self {
        let color = if (file + rank) % 2 == 1 {
            Color::White
        } else {
            Color::Black
        };
        Self {
            piece: Piece::none(),
            color,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

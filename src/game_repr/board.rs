use std::fmt;
use std::ops::{Index, IndexMut};

use super::*;
use crate::error::{ChessError, Result};

/// 8x8 grid of squares indexed `[file][rank]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_HEIGHT as usize]; BOARD_WIDTH as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<Coord> for Board {
    type Output = Square;

    fn index(&self, c: Coord) -> &Square {
        &self.squares[c.file as usize][c.rank as usize]
    }
}

impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, c: Coord) -> &mut Square {
        &mut self.squares[c.file as usize][c.rank as usize]
    }
}

impl Board {
    /// Board with no pieces; square display colors are assigned.
    pub fn empty() -> Self {
        let mut squares = [[Square::empty(0, 0); BOARD_HEIGHT as usize]; BOARD_WIDTH as usize];
        for (file, column) in squares.iter_mut().enumerate() {
            for (rank, square) in column.iter_mut().enumerate() {
                *square = Square::empty(file as i8, rank as i8);
            }
        }
        Self { squares }
    }

    /// Standard initial setup.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        const BACK_ROW: [Type; 8] = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];
        for color in [Color::White, Color::Black] {
            for (file, &piece_type) in BACK_ROW.iter().enumerate() {
                let file = file as i8;
                board[Coord::new(file, color.back_rank())].piece = Piece::new(color, piece_type);
                board[Coord::new(file, color.pawn_home_rank())].piece = Piece::new(color, Type::Pawn);
            }
        }
        board
    }

    /// Builds a board from the piece-placement field of a FEN string
    /// (rank 8 first). Pieces start with their flags cleared, except pawns
    /// off their home rank, which count as moved.
    pub fn from_placement(placement: &str) -> Result<Self> {
        let mut board = Self::empty();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_HEIGHT as usize {
            return Err(ChessError::InvalidPlacement(format!(
                "expected {} ranks, found {}",
                BOARD_HEIGHT,
                rows.len()
            )));
        }

        for (row, text) in rows.iter().enumerate() {
            let rank = BOARD_HEIGHT - 1 - row as i8;
            let mut file: i8 = 0;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as i8;
                    continue;
                }
                if file >= BOARD_WIDTH {
                    return Err(ChessError::InvalidPlacement(format!(
                        "rank {} has more than {} files",
                        rank + 1,
                        BOARD_WIDTH
                    )));
                }
                board[Coord::new(file, rank)].piece = Piece::from_char(c)?;
                file += 1;
            }
            if file != BOARD_WIDTH {
                return Err(ChessError::InvalidPlacement(format!(
                    "rank {} describes {} files",
                    rank + 1,
                    file
                )));
            }
        }
        board.settle_pawns(Color::White);
        board.settle_pawns(Color::Black);
        Ok(board)
    }

    pub fn piece(&self, c: Coord) -> Piece {
        self[c].piece
    }

    pub fn set_piece(&mut self, c: Coord, piece: Piece) {
        self[c].piece = piece;
    }

    pub fn clear(&mut self, c: Coord) {
        self[c].piece = Piece::none();
    }

    /// Every coordinate in scan order: file-major, rank-minor.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_WIDTH).flat_map(|file| (0..BOARD_HEIGHT).map(move |rank| Coord::new(file, rank)))
    }

    pub fn squares(&self) -> impl Iterator<Item = (Coord, &Square)> + '_ {
        Self::coords().map(move |c| (c, &self[c]))
    }

    /// First square (scan order) holding a piece of this type and color.
    pub fn find_piece(&self, piece_type: Type, color: Color) -> Option<Coord> {
        Self::coords().find(|&c| self.piece(c).is_a(color, piece_type))
    }

    pub fn find_king(&self, color: Color) -> Result<Coord> {
        self.find_piece(Type::King, color)
            .ok_or(ChessError::KingNotFound(color))
    }

    /// Drops every `is_threatened` bit. `was_ever_threatened` is kept.
    pub fn clear_threats(&mut self) {
        for column in self.squares.iter_mut() {
            for square in column.iter_mut() {
                square.piece.is_threatened = false;
            }
        }
    }

    /// Moves the pieces of every step in order. The moved piece keeps its
    /// type, color and flags; whatever stood on the destination is replaced.
    /// `has_moved` is not touched here.
    pub fn move_pieces(&mut self, mv: &LegalMove) {
        for step in mv.steps() {
            let piece = self.piece(step.origin);
            self.clear(step.origin);
            self.set_piece(step.destination(), piece);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_HEIGHT).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_WIDTH {
                write!(f, "{}", self.piece(Coord::new(file, rank)).to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 0..BOARD_WIDTH {
            write!(f, "{}", (b'a' + file as u8) as char)?;
        }
        writeln!(f)
    }
}

//! Binary save format for a [`Position`].
//!
//! ```text
//! offset  size  field
//!      0     4  magic "CHSR"
//!      4     4  format version (1)
//!      8     4  side to move (0 White, 1 Black)
//!     12     4  num_turns
//!     16     4  fifty-move counter
//!     20     8  check streaks, White then Black
//!     28     8  was-checked flags, White then Black
//!     36    64  one byte per square, file-major
//! ```
//!
//! Integers are little-endian. Square byte layout:
//! bits 0-2 piece type code, bit 3 piece is White, bit 4 `has_moved`,
//! bit 5 `is_threatened`, bit 6 `was_ever_threatened`, bit 7 square is light.

use std::fs;
use std::path::Path;

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::error::{ChessError, Result};
use crate::game_repr::{Board, ByColor, Color, GameState, Piece, Position, Square, Type};

pub const MAGIC: [u8; 4] = *b"CHSR";
pub const VERSION: u32 = 1;
pub const HEADER_LEN: usize = std::mem::size_of::<SaveHeader>();
pub const SAVE_LEN: usize = HEADER_LEN + 64;

const TYPE_MASK: u8 = 0b0000_0111;
const WHITE_PIECE: u8 = 1 << 3;
const HAS_MOVED: u8 = 1 << 4;
const THREATENED: u8 = 1 << 5;
const EVER_THREATENED: u8 = 1 << 6;
const LIGHT_SQUARE: u8 = 1 << 7;

/// Fixed-size header. Fields hold little-endian values.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct SaveHeader {
    magic: [u8; 4],
    version: u32,
    turn_color: u32,
    num_turns: u32,
    fifty_move_count: u32,
    check_streak: [u32; 2],
    was_checked: [u32; 2],
}

fn color_code(color: Color) -> u32 {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

fn encode_square(square: &Square) -> u8 {
    let piece = &square.piece;
    let mut byte = piece.piece_type.code() & TYPE_MASK;
    if piece.is(Color::White) {
        byte |= WHITE_PIECE;
    }
    if piece.has_moved {
        byte |= HAS_MOVED;
    }
    if piece.is_threatened {
        byte |= THREATENED;
    }
    if piece.was_ever_threatened {
        byte |= EVER_THREATENED;
    }
    if square.color == Color::White {
        byte |= LIGHT_SQUARE;
    }
    byte
}

fn decode_square(byte: u8, index: usize) -> Result<Square> {
    let code = byte & TYPE_MASK;
    let piece_type = Type::from_code(code)
        .ok_or_else(|| ChessError::MalformedSave(format!("bad piece code {code} in square {index}")))?;
    let color_bit = |flag: u8| if byte & flag != 0 { Color::White } else { Color::Black };
    let piece = if piece_type == Type::None {
        Piece::none()
    } else {
        Piece {
            color: color_bit(WHITE_PIECE),
            piece_type,
            has_moved: byte & HAS_MOVED != 0,
            is_threatened: byte & THREATENED != 0,
            was_ever_threatened: byte & EVER_THREATENED != 0,
        }
    };
    Ok(Square {
        piece,
        color: color_bit(LIGHT_SQUARE),
    })
}

/// Serializes `position` into exactly [`SAVE_LEN`] bytes.
pub fn encode(position: &Position) -> Vec<u8> {
    let state = &position.state;
    let header = SaveHeader {
        magic: MAGIC,
        version: VERSION.to_le(),
        turn_color: color_code(state.turn_color).to_le(),
        num_turns: state.num_turns.to_le(),
        fifty_move_count: state.fifty_move_rule_turn_count.to_le(),
        check_streak: [
            state.king_in_check.white.to_le(),
            state.king_in_check.black.to_le(),
        ],
        was_checked: [
            (state.king_was_checked.white as u32).to_le(),
            (state.king_was_checked.black as u32).to_le(),
        ],
    };

    let mut bytes = Vec::with_capacity(SAVE_LEN);
    bytes.extend_from_slice(bytemuck::bytes_of(&header));
    bytes.extend(position.board.squares().map(|(_, square)| encode_square(square)));
    bytes
}

/// Rebuilds a position from [`encode`]d bytes.
///
/// The stored threat flags are overwritten by a fresh threat computation;
/// `was_ever_threatened` survives as stored.
pub fn decode(bytes: &[u8]) -> Result<Position> {
    if bytes.len() != SAVE_LEN {
        return Err(ChessError::MalformedSave(format!(
            "expected {SAVE_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    let (head, body) = bytes.split_at(HEADER_LEN);
    let header: SaveHeader = bytemuck::pod_read_unaligned(head);
    if header.magic != MAGIC {
        return Err(ChessError::MalformedSave(format!("bad magic {:?}", header.magic)));
    }
    let version = u32::from_le(header.version);
    if version != VERSION {
        return Err(ChessError::MalformedSave(format!("unsupported version {version}")));
    }
    let turn_color = match u32::from_le(header.turn_color) {
        0 => Color::White,
        1 => Color::Black,
        other => return Err(ChessError::MalformedSave(format!("bad side to move {other}"))),
    };

    let mut board = Board::empty();
    for (index, (coord, &byte)) in Board::coords().zip(body).enumerate() {
        board[coord] = decode_square(byte, index)?;
    }

    let state = GameState {
        turn_color,
        num_turns: u32::from_le(header.num_turns),
        fifty_move_rule_turn_count: u32::from_le(header.fifty_move_count),
        king_in_check: ByColor {
            white: u32::from_le(header.check_streak[0]),
            black: u32::from_le(header.check_streak[1]),
        },
        king_was_checked: ByColor {
            white: u32::from_le(header.was_checked[0]) != 0,
            black: u32::from_le(header.was_checked[1]) != 0,
        },
    };
    Ok(Position::from_parts(board, state))
}

pub fn save_to_file(position: &Position, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode(position))?;
    debug!("saved position to {}", path.display());
    Ok(())
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Position> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let position = decode(&bytes)?;
    debug!("loaded position from {}", path.display());
    Ok(position)
}

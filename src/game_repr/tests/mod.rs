use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Square from algebraic notation, e.g. `sq("e4")`
pub fn sq(name: &str) -> Coord {
    Coord::from_algebraic(name).unwrap()
}

/// Helper function to create a position with no pieces, White to move
pub fn empty_position() -> Position {
    Position::from_parts(Board::empty(), GameState::default())
}

/// Helper function to place a piece. Threats are recomputed afterwards.
pub fn place_piece(pos: &mut Position, at: &str, color: Color, piece_type: Type) {
    pos.board.set_piece(sq(at), Piece::new(color, piece_type));
    pos.refresh_threats();
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[LegalMove], from: &str, to: &str) -> bool {
    find_move(moves, from, to).is_some()
}

pub fn find_move(moves: &[LegalMove], from: &str, to: &str) -> Option<LegalMove> {
    moves
        .iter()
        .copied()
        .find(|m| m.origin() == sq(from) && m.destination() == sq(to))
}

/// Plays `from`-`to` for the side to move, panicking if it is not legal.
pub fn play(pos: &mut Position, from: &str, to: &str) {
    let moves = pos.generate_legal_moves(pos.turn_color()).unwrap();
    let mv = find_move(&moves, from, to)
        .unwrap_or_else(|| panic!("{from}-{to} is not legal here"));
    pos.apply_move(&mv).unwrap();
}

/// Destinations of the piece on `at`, in generation order.
pub fn destinations(board: &Board, at: &str) -> Vec<Coord> {
    board.pseudo_moves(sq(at)).iter().map(|m| m.destination).collect()
}

// ==================== TEST MODULES ====================

mod castling;
mod check_detection;
mod checkmate;

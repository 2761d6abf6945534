use super::*;

// ==================== CASTLING TESTS ====================

fn castles(pos: &Position, color: Color) -> Vec<LegalMove> {
    pos.generate_legal_moves(color)
        .unwrap()
        .into_iter()
        .filter(|m| m.is_castle())
        .collect()
}

#[test]
fn test_white_castles_both_sides() {
    let pos = Position::from_placement("r3k2r/8/8/8/8/8/8/R3K2R", Color::White).unwrap();
    let moves = castles(&pos, Color::White);

    assert_eq!(moves.len(), 2);
    assert_eq!(
        moves[0],
        LegalMove::Castle {
            king: Step::new(sq("e1"), Move::quiet(sq("c1"))),
            rook: Step::new(sq("a1"), Move::quiet(sq("d1"))),
        }
    );
    assert_eq!(
        moves[1],
        LegalMove::Castle {
            king: Step::new(sq("e1"), Move::quiet(sq("g1"))),
            rook: Step::new(sq("h1"), Move::quiet(sq("f1"))),
        }
    );
}

#[test]
fn test_black_castles_both_sides() {
    let pos = Position::from_placement("r3k2r/8/8/8/8/8/8/R3K2R", Color::Black).unwrap();
    let moves = castles(&pos, Color::Black);

    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0].destination(), sq("c8"));
    assert_eq!(moves[1].destination(), sq("g8"));
}

#[test]
fn test_kingside_castle_execution() {
    let mut pos = Position::from_placement("r3k2r/8/8/8/8/8/8/R3K2R", Color::White).unwrap();
    let moves = castles(&pos, Color::White);
    pos.apply_move(&moves[1]).unwrap();

    let king = pos.board.piece(sq("g1"));
    let rook = pos.board.piece(sq("f1"));
    assert!(king.is_a(Color::White, Type::King) && king.has_moved);
    assert!(rook.is_a(Color::White, Type::Rook) && rook.has_moved);
    assert!(pos.board[sq("e1")].is_empty());
    assert!(pos.board[sq("h1")].is_empty());
    assert_eq!(pos.turn_color(), Color::Black);
    assert_eq!(pos.state.fifty_move_rule_turn_count, 1);
}

#[test]
fn test_castling_blocked_by_pieces() {
    let pos = Position::from_placement("4k3/8/8/8/8/8/8/RN2K1NR", Color::White).unwrap();
    assert!(castles(&pos, Color::White).is_empty());

    let pos = Position::default();
    assert!(castles(&pos, Color::White).is_empty());
}

#[test]
fn test_no_castling_after_king_moved() {
    let mut pos = Position::from_placement("4k3/8/8/8/8/8/8/R3K2R", Color::White).unwrap();
    pos.board[sq("e1")].piece.has_moved = true;
    assert!(castles(&pos, Color::White).is_empty());
}

#[test]
fn test_no_castling_with_moved_rook() {
    let mut pos = Position::from_placement("4k3/8/8/8/8/8/8/R3K2R", Color::White).unwrap();
    pos.board[sq("h1")].piece.has_moved = true;

    let moves = castles(&pos, Color::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].destination(), sq("c1"));
}

#[test]
fn test_no_castling_for_king_ever_threatened() {
    let mut pos = Position::from_placement("4k3/8/8/8/8/8/8/R3K2R", Color::White).unwrap();
    pos.board[sq("e1")].piece.was_ever_threatened = true;
    assert!(castles(&pos, Color::White).is_empty());
}

#[test]
fn test_no_castling_out_of_check() {
    let pos = Position::from_placement("4r2k/8/8/8/8/8/8/R3K2R", Color::White).unwrap();
    assert!(pos.is_in_check(Color::White).unwrap());
    assert!(castles(&pos, Color::White).is_empty());
}

#[test]
fn test_no_castling_with_enemy_rook_in_corner() {
    let mut pos = Position::from_placement("4k3/8/8/8/8/8/8/4K2r", Color::White).unwrap();
    pos.board[sq("e1")].piece.was_ever_threatened = false;
    let mut moves = Vec::new();
    pos.add_castle_moves(Color::White, &mut moves).unwrap();
    assert!(moves.is_empty());
}

#[test]
fn test_castling_into_attack_is_filtered() {
    let pos = Position::from_placement("6rk/8/8/8/8/8/8/4K2R", Color::White).unwrap();

    let mut raw = Vec::new();
    pos.add_castle_moves(Color::White, &mut raw).unwrap();
    assert_eq!(raw.len(), 1);

    assert!(castles(&pos, Color::White).is_empty());
}

#[test]
fn test_castling_through_attacked_square_is_allowed() {
    // Only the landing square is screened; f1 being covered does not matter.
    let pos = Position::from_placement("5r1k/8/8/8/8/8/8/4K2R", Color::White).unwrap();
    let moves = castles(&pos, Color::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].destination(), sq("g1"));
}

#[test]
fn test_no_castling_for_king_off_start_square() {
    let pos = Position::from_placement("4k3/8/8/8/8/8/8/RK1B4", Color::White).unwrap();
    let mut raw = Vec::new();
    pos.add_castle_moves(Color::White, &mut raw).unwrap();
    assert!(raw.is_empty());

    for mv in pos.generate_legal_moves(Color::White).unwrap() {
        let mut next = pos;
        next.apply_move(&mv).unwrap();
        assert!(
            next.board.find_piece(Type::Bishop, Color::White).is_some(),
            "{mv} removed the bishop"
        );
    }
}

#[test]
fn test_no_castling_for_king_on_g_file() {
    let pos = Position::from_placement("4k3/8/8/8/8/8/8/R5KR", Color::White).unwrap();
    assert!(castles(&pos, Color::White).is_empty());
}

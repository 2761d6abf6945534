use super::*;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_rook_check_on_open_file() {
    let pos = Position::from_placement("4r2k/8/8/8/8/8/8/4K3", Color::White).unwrap();
    assert!(pos.is_in_check(Color::White).unwrap());
    assert!(!pos.is_in_check(Color::Black).unwrap());
}

#[test]
fn test_blocked_line_is_not_check() {
    let pos = Position::from_placement("4r2k/8/8/8/4N3/8/8/4K3", Color::White).unwrap();
    assert!(!pos.is_in_check(Color::White).unwrap());
    assert!(pos.board.piece(sq("e4")).is_threatened);
}

#[test]
fn test_knight_check() {
    let pos = Position::from_placement("7k/8/8/8/8/3n4/8/4K3", Color::White).unwrap();
    assert!(pos.is_in_check(Color::White).unwrap());
}

#[test]
fn test_pawn_checks_forward_only() {
    let pos = Position::from_placement("7k/8/8/8/8/8/3p4/4K3", Color::White).unwrap();
    assert!(pos.is_in_check(Color::White).unwrap());

    let pos = Position::from_placement("7k/8/8/8/8/8/8/3pK3", Color::White).unwrap();
    assert!(!pos.is_in_check(Color::White).unwrap());
}

#[test]
fn test_missing_king_is_an_error() {
    let pos = Position::from_placement("7k/8/8/8/8/8/8/8", Color::White).unwrap();
    assert!(matches!(
        pos.is_in_check(Color::White),
        Err(crate::error::ChessError::KingNotFound(Color::White))
    ));
}

#[test]
fn test_discovered_check_after_move() {
    let mut pos = Position::from_placement("4k3/8/8/8/4N3/8/4R3/K7", Color::White).unwrap();
    assert!(!pos.is_in_check(Color::Black).unwrap());

    play(&mut pos, "e4", "c5");
    assert!(pos.is_in_check(Color::Black).unwrap());
    assert_eq!(pos.state.king_in_check.black, 1);
    assert!(pos.state.king_was_checked.black);
    assert!(!pos.state.king_was_checked.white);
}

#[test]
fn test_check_streak_resets_when_resolved() {
    let mut pos = Position::from_placement("4k3/8/8/8/4N3/8/4R3/K7", Color::White).unwrap();
    play(&mut pos, "e4", "c5");
    play(&mut pos, "e8", "d8");

    assert_eq!(pos.state.king_in_check.black, 0);
    assert!(pos.state.king_was_checked.black);
    assert!(pos.board.piece(sq("d8")).was_ever_threatened);
}

#[test]
fn test_pinned_piece_cannot_move() {
    let pos = Position::from_placement("4r2k/8/8/8/8/8/4B3/4K3", Color::White).unwrap();
    let moves = pos.generate_legal_moves(Color::White).unwrap();
    assert!(moves.iter().all(|m| m.origin() != sq("e2")));

    let pseudo = pos.generate_pseudo_moves(Color::White).unwrap();
    assert!(pseudo.iter().any(|m| m.origin() == sq("e2")));
}

#[test]
fn test_every_legal_move_answers_check() {
    let pos = Position::from_placement("4r2k/8/8/8/8/8/3P1P2/R3K2R", Color::White).unwrap();
    assert!(pos.is_in_check(Color::White).unwrap());

    let moves = pos.generate_legal_moves(Color::White).unwrap();
    assert!(!moves.is_empty());
    for mv in &moves {
        let mut next = pos;
        next.apply_move(mv).unwrap();
        assert!(!next.is_in_check(Color::White).unwrap(), "{mv} leaves the king in check");
    }
}

#[test]
fn test_threat_flags_follow_the_board() {
    let mut pos = Position::default();
    play(&mut pos, "e2", "e4");
    play(&mut pos, "d7", "d5");

    assert!(pos.board.piece(sq("d5")).is_threatened);
    assert!(pos.board.piece(sq("e4")).is_threatened);

    play(&mut pos, "e4", "d5");
    assert!(pos.board.piece(sq("d5")).is_threatened, "queen d8 covers d5");
    assert!(!pos.board.piece(sq("e4")).is_threatened);
}

use super::*;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_fools_mate() {
    let mut pos = Position::default();
    play(&mut pos, "f2", "f3");
    play(&mut pos, "e7", "e5");
    play(&mut pos, "g2", "g4");
    play(&mut pos, "d8", "h4");

    assert!(pos.generate_legal_moves(Color::White).unwrap().is_empty());
    assert_eq!(pos.status().unwrap(), GameStatus::Checkmate { winner: Color::Black });
}

#[test]
fn test_back_rank_mate() {
    let mut pos = Position::from_placement("6k1/5ppp/8/8/8/8/8/R5K1", Color::White).unwrap();
    assert_eq!(pos.status().unwrap(), GameStatus::Ongoing);

    play(&mut pos, "a1", "a8");
    assert_eq!(pos.status().unwrap(), GameStatus::Checkmate { winner: Color::White });
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let mut pos = Position::from_placement("6k1/5pp1/8/8/8/8/8/R5K1", Color::White).unwrap();
    play(&mut pos, "a1", "a8");

    assert!(pos.is_in_check(Color::Black).unwrap());
    let moves = pos.generate_legal_moves(Color::Black).unwrap();
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "g8", "h7"));
    assert_eq!(pos.status().unwrap(), GameStatus::Ongoing);
}

#[test]
fn test_smothered_mate() {
    let pos = Position::from_placement("6rk/5Npp/8/8/8/8/8/6K1", Color::Black).unwrap();
    assert!(pos.is_in_check(Color::Black).unwrap());
    assert_eq!(pos.status().unwrap(), GameStatus::Checkmate { winner: Color::White });
}

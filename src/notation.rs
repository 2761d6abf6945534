//! Short algebraic labels for legal moves ("e4", "Nf3", "exd5", "O-O").
//!
//! Labels carry no check or mate suffix and promotion is implicit, since a
//! pawn always becomes a queen.

use crate::game_repr::{Board, LegalMove, Type};

/// How much of the origin square a label spells out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Disambiguation {
    #[default]
    None,
    File,
    FileAndRank,
}

impl Disambiguation {
    fn file(self) -> bool {
        self >= Disambiguation::File
    }

    fn rank(self) -> bool {
        self == Disambiguation::FileAndRank
    }
}

/// Label of `mv` as played on `board` (the position before the move).
pub fn move_label(board: &Board, mv: &LegalMove, origin: Disambiguation) -> String {
    if let LegalMove::Castle { rook, .. } = mv {
        let label = if rook.origin.file == 0 { "O-O-O" } else { "O-O" };
        return label.to_string();
    }

    let step = mv.primary();
    let from = step.origin;
    let piece_type = board.piece(from).piece_type;
    let mut label = String::with_capacity(6);

    if piece_type == Type::Pawn {
        if step.mv.is_capture {
            label.push(from.file_char());
            if origin.rank() {
                label.push(from.rank_char());
            }
            label.push('x');
        }
        label.push_str(&step.destination().to_string());
        return label;
    }

    label.push(piece_type.to_char());
    if origin.file() {
        label.push(from.file_char());
    }
    if origin.rank() {
        label.push(from.rank_char());
    }
    if step.mv.is_capture {
        label.push('x');
    }
    label.push_str(&step.destination().to_string());
    label
}

/// Labels for a whole move list, disambiguated until no two are equal.
///
/// Colliding moves from different files get their origin file; moves from
/// the same file get file and rank.
pub fn labels(board: &Board, moves: &[LegalMove]) -> Vec<String> {
    let mut levels = vec![Disambiguation::None; moves.len()];
    let mut labels: Vec<String> = moves
        .iter()
        .map(|mv| move_label(board, mv, Disambiguation::None))
        .collect();

    loop {
        let mut changed = false;
        for i in 0..moves.len() {
            for j in (i + 1)..moves.len() {
                if labels[i] != labels[j] {
                    continue;
                }
                let wanted = if moves[i].origin().file == moves[j].origin().file {
                    Disambiguation::FileAndRank
                } else {
                    Disambiguation::File
                };
                for k in [i, j] {
                    if levels[k] < wanted {
                        levels[k] = wanted;
                        labels[k] = move_label(board, &moves[k], wanted);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            return labels;
        }
    }
}

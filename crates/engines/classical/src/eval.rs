//! Static evaluation: material plus a small bonus for central presence.

use gambit_core::{Board, Color, PieceKind};

/// Material values in centipawns, indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King.
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Bonus for the four center squares (d4, e4, d5, e5).
const CENTER_BONUS: i32 = 30;
/// Bonus for the sixteen-square ring around them.
const RING_BONUS: i32 = 10;

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Score the position from `perspective`'s point of view, in centipawns.
/// Positive is good for `perspective`; the function is antisymmetric, so
/// `evaluate(b, White) == -evaluate(b, Black)`.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let mut score = 0i32;

    for (sq, piece) in board.pieces() {
        let mut value = piece_value(piece.kind);
        // Kings carry no material value and earn no placement bonus.
        if piece.kind != PieceKind::King {
            value += placement_bonus(sq.file(), sq.rank());
        }
        if piece.color == perspective {
            score += value;
        } else {
            score -= value;
        }
    }

    score
}

fn placement_bonus(file: i8, rank: i8) -> i32 {
    if (3..=4).contains(&file) && (3..=4).contains(&rank) {
        CENTER_BONUS
    } else if (2..=5).contains(&file) && (2..=5).contains(&rank) {
        RING_BONUS
    } else {
        0
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

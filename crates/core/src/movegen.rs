//! Move generation: a pseudo-legal layer per piece kind, then a legality
//! filter that plays each candidate and rejects any that leave the mover's
//! king attacked.

use crate::board::{Board, DIAG_DIRS, KING_STEPS, KNIGHT_JUMPS, ORTHO_DIRS};
use crate::types::{Color, Move, Piece, PieceKind, Square};

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// All legal moves for the side to move, freshly allocated.
/// Clones the board once and delegates to `legal_moves_into`.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Legal moves for the piece on `from`; empty when the square is empty or
/// holds a piece with no moves. Boundary entry point for "what can this
/// piece do?" queries.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Move> {
    let mut moves = legal_moves(board);
    moves.retain(|mv| mv.from == from);
    moves
}

/// Generate all legal moves into `out`, reusing the buffer across calls.
/// The board is restored to its input state before returning; the `&mut`
/// is only for probing candidates with make/unmake.
pub fn legal_moves_into(board: &mut Board, out: &mut Vec<Move>) {
    out.clear();
    pseudo_legal_moves(board, out);

    let mover = board.side_to_move;
    out.retain(|&mv| {
        let undo = board.make_move(mv);
        let exposes_king = board.in_check(mover);
        board.unmake_move(mv, undo);
        !exposes_king
    });
}

/// Geometrically plausible moves only; no check-awareness at this layer.
fn pseudo_legal_moves(board: &Board, out: &mut Vec<Move>) {
    for (from, piece) in board.pieces() {
        if piece.color != board.side_to_move {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_moves(board, from, piece.color, out),
            PieceKind::Knight => leaper_moves(board, from, piece.color, &KNIGHT_JUMPS, out),
            PieceKind::Bishop => slider_moves(board, from, piece.color, &DIAG_DIRS, out),
            PieceKind::Rook => slider_moves(board, from, piece.color, &ORTHO_DIRS, out),
            PieceKind::Queen => {
                slider_moves(board, from, piece.color, &DIAG_DIRS, out);
                slider_moves(board, from, piece.color, &ORTHO_DIRS, out);
            }
            PieceKind::King => {
                leaper_moves(board, from, piece.color, &KING_STEPS, out);
                castle_moves(board, from, piece.color, out);
            }
        }
    }
}

/// Push `from -> to`, fanning out to all four promotion choices when a pawn
/// reaches its last rank.
fn push_pawn_move(from: Square, to: Square, color: Color, out: &mut Vec<Move>) {
    if to.rank() == color.opponent().home_rank() {
        for kind in PROMOTION_KINDS {
            out.push(Move::promoting(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    let dir = color.pawn_direction();
    let start_rank = color.home_rank() + dir;

    // Single push, then the double push from the starting rank when both
    // intervening squares are empty.
    if let Some(one) = from.offset(0, dir)
        && board.is_empty(one)
    {
        push_pawn_move(from, one, color, out);
        if from.rank() == start_rank
            && let Some(two) = from.offset(0, 2 * dir)
            && board.is_empty(two)
        {
            out.push(Move::new(from, two));
        }
    }

    // Diagonal captures, plus en passant when the target square matches the
    // board's one-ply eligibility marker.
    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != color => push_pawn_move(from, to, color, out),
            None if board.en_passant == Some(to) => out.push(Move::en_passant(from, to)),
            _ => {}
        }
    }
}

/// Knights and kings: fixed offset tables filtered to in-bounds squares not
/// occupied by a friendly piece.
fn leaper_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr)
            && board.piece_at(to).is_none_or(|pc| pc.color != color)
        {
            out.push(Move::new(from, to));
        }
    }
}

/// Bishops, rooks and queens: ray-cast until the first occupied square,
/// which is included as a capture when hostile.
fn slider_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cur = to.offset(df, dr);
        }
    }
}

fn castle_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    let rank = color.home_rank();
    if from != Square::new(4, rank).unwrap() {
        return;
    }
    // No castling out of check.
    if board.in_check(color) {
        return;
    }

    let enemy = color.opponent();
    let clear = |files: &[i8]| {
        files
            .iter()
            .all(|&f| board.is_empty(Square::new(f, rank).unwrap()))
    };
    let safe = |files: &[i8]| {
        files
            .iter()
            .all(|&f| !board.is_square_attacked(Square::new(f, rank).unwrap(), enemy))
    };
    // A right can outlive its rook in a hand-built position; fail closed.
    let rook_on = |file: i8| {
        board.piece_at(Square::new(file, rank).unwrap())
            == Some(Piece::new(color, PieceKind::Rook))
    };

    // Kingside: f and g empty, king crosses f and lands on g.
    if board.castling.kingside(color) && rook_on(7) && clear(&[5, 6]) && safe(&[5, 6]) {
        out.push(Move::castle(from, Square::new(6, rank).unwrap()));
    }
    // Queenside: b, c and d empty; the king only traverses d and c.
    if board.castling.queenside(color) && rook_on(0) && clear(&[1, 2, 3]) && safe(&[3, 2]) {
        out.push(Move::castle(from, Square::new(2, rank).unwrap()));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

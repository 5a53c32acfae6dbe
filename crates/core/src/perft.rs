use crate::board::Board;
use crate::movegen::legal_moves_into;

/// Count all leaf positions reachable in exactly `depth` plies. The standard
/// cross-check for move-generator correctness.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let undo = board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.unmake_move(mv, undo);
    }
    nodes
}

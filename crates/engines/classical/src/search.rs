//! Negamax search with alpha-beta pruning.

use gambit_core::{Board, Move, TimeControl, legal_moves_into};

use crate::eval::evaluate;

/// Base score for a checkmate. The distance to mate is subtracted so the
/// search prefers the shortest mate it can find (and the longest defense
/// when it is being mated).
pub const MATE_SCORE: i32 = 100_000;

/// What `pick_best_move` found, and whether the search ran to completion.
pub struct SearchOutcome {
    /// Best root move and its score, `None` when no legal move exists.
    pub best_move: Option<(Move, i32)>,
    /// True when the search aborted on the time control.
    pub stopped: bool,
}

/// Search `board` to `depth` plies and return the best move with its score.
/// `nodes` accumulates visited positions; `tc` is polled periodically and
/// aborts the search mid-tree when it expires.
pub fn pick_best_move(
    board: &Board,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let mut tmp = board.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut moves);

    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    }

    let mut best = moves[0];
    let mut best_score = i32::MIN + 1;
    let mut stopped = false;

    // Hashes along the current line, for repetition detection inside the
    // tree. Seeded with the root so an immediate shuffle-back scores as
    // a repetition.
    let mut history = Vec::with_capacity(depth as usize + 1);
    history.push(tmp.position_hash());

    for mv in moves {
        if tc.should_check_time(*nodes) && tc.check_time() {
            stopped = true;
            break;
        }

        let undo = tmp.make_move(mv);
        history.push(tmp.position_hash());
        *nodes += 1;

        let (score, was_stopped) = negamax(
            &mut tmp,
            depth.saturating_sub(1),
            1,
            i32::MIN / 2,
            i32::MAX / 2,
            &mut history,
            nodes,
            tc,
        );
        let score = -score;

        history.pop();
        tmp.unmake_move(mv, undo);

        if was_stopped {
            stopped = true;
            break;
        }

        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    SearchOutcome {
        best_move: Some((best, best_score)),
        stopped,
    }
}

/// Recursive negamax. `ply` is the distance from the root, used to grade
/// mate scores by depth. Returns `(score, stopped)`.
#[allow(clippy::too_many_arguments)]
fn negamax(
    board: &mut Board,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    beta: i32,
    history: &mut Vec<u64>,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (i32, bool) {
    if tc.should_check_time(*nodes) && tc.check_time() {
        return (0, true);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);

    // Checkmate and stalemate outrank the draw rules: a mate delivered on
    // the hundredth halfmove still ends the game.
    if moves.is_empty() {
        if board.in_check(board.side_to_move) {
            // Mated here; closer mates are worse for the mated side.
            return (-(MATE_SCORE - ply as i32), false);
        }
        return (0, false);
    }

    // Draw-by-rule conditions score as dead equal.
    if board.is_fifty_move_draw() || board.is_insufficient_material() {
        return (0, false);
    }
    let curr_key = board.position_hash();
    if history.iter().filter(|&&k| k == curr_key).count() >= 3 {
        return (0, false);
    }

    if depth == 0 {
        return (evaluate(board, board.side_to_move), false);
    }

    let mut best = i32::MIN + 1;

    for mv in moves {
        let undo = board.make_move(mv);
        history.push(board.position_hash());
        *nodes += 1;

        let (score, stopped) = negamax(
            board,
            depth - 1,
            ply + 1,
            -beta,
            -alpha,
            history,
            nodes,
            tc,
        );
        let score = -score;

        history.pop();
        board.unmake_move(mv, undo);

        if stopped {
            return (best, true);
        }

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }

    (best, false)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

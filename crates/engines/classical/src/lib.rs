//! Classical engine: negamax with alpha-beta pruning over a material and
//! center-control evaluation. Draw rules (fifty-move, repetition,
//! insufficient material) are scored inside the tree, and a time budget
//! degrades the search to best-so-far instead of failing.

mod eval;
mod search;

use gambit_core::{Board, Engine, SearchLimits, SearchResult};

pub use eval::{evaluate, piece_value};
pub use search::MATE_SCORE;

#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome =
            search::pick_best_move(board, limits.depth, &mut self.nodes, &limits.time_control);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

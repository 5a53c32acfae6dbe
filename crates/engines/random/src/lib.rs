//! An engine that picks uniformly among the legal moves. It is the lowest
//! difficulty tier and a handy baseline: any searching engine should beat
//! it comfortably.

use gambit_core::{Board, Engine, SearchLimits, SearchResult, legal_moves_into};
use rand::seq::SliceRandom;
use rand::thread_rng;


#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let mut tmp = board.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut tmp, &mut moves);

        self.nodes = 1;
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

//! The computer opponent: a difficulty tier wrapped around an engine.
//!
//! Tier 1 plays uniformly random legal moves; tiers 2 through 5 run the
//! alpha-beta engine with the tier number as its search depth.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use gambit_core::{Board, Engine, Move, SearchLimits};
use gambit_classical::ClassicalEngine;
use gambit_random::RandomEngine;


pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// A difficulty tier from 1 (random) to 5 (deepest search).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Build a tier, clamping out-of-range levels into 1..=5.
    pub fn from_level(level: u8) -> Difficulty {
        Difficulty(level.clamp(MIN_LEVEL, MAX_LEVEL))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Search depth in plies; `None` for the random tier.
    pub fn search_depth(self) -> Option<u8> {
        if self.0 == MIN_LEVEL {
            None
        } else {
            Some(self.0)
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(3)
    }
}

/// A ready-to-play computer opponent.
pub struct Opponent {
    difficulty: Difficulty,
    engine: Box<dyn Engine>,
}

impl Opponent {
    pub fn new(difficulty: Difficulty) -> Opponent {
        let engine: Box<dyn Engine> = match difficulty.search_depth() {
            None => Box::new(RandomEngine::new()),
            Some(_) => Box::new(ClassicalEngine::new()),
        };
        Opponent { difficulty, engine }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Pick a move for the side to move, `None` when the game is over.
    /// `move_time` caps the thinking time; the search falls back to its
    /// best-so-far move when the budget runs out.
    pub fn find_best_move(&mut self, board: &Board, move_time: Option<Duration>) -> Option<Move> {
        let limits = match (self.difficulty.search_depth(), move_time) {
            (Some(depth), Some(budget)) => SearchLimits::depth_and_time(depth, budget),
            (Some(depth), None) => SearchLimits::depth(depth),
            (None, _) => SearchLimits::depth(1),
        };
        self.engine.search(board, limits).best_move
    }

    /// Reset engine state between games.
    pub fn new_game(&mut self) {
        self.engine.new_game();
    }
}

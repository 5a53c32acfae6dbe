pub mod board;
pub mod fen;
pub mod game;
pub mod limits;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod zobrist;

pub use board::{Board, CastlingRights, Undo};
pub use fen::{FenError, START_FEN};
pub use game::{DrawReason, Game, GameState, MoveError, MoveRecord};
pub use limits::{SearchLimits, TimeControl};
pub use movegen::{legal_moves, legal_moves_from, legal_moves_into};
pub use perft::perft;
pub use types::{Color, InvalidSquare, Move, MoveKind, Piece, PieceKind, Square};

// =============================================================================
// Engine trait — implemented by every opponent engine (classical, random)
// =============================================================================

/// Result of a search operation.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None when no legal moves exist).
    pub best_move: Option<Move>,
    /// Score in centipawns from the side to move's perspective.
    pub score: i32,
    /// Search depth requested.
    pub depth: u8,
    /// Nodes visited, for statistics.
    pub nodes: u64,
    /// True when the search hit its deadline and returned best-so-far.
    pub stopped: bool,
}

/// Seam between the rules engine and move-picking strategies, so the
/// opponent can swap search styles without touching the rules.
pub trait Engine: Send {
    /// Search `board` under `limits`. Must operate on its own clone; the
    /// caller's board is never mutated.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// Engine display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}

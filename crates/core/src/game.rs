//! The playable game: a board plus move history, a derived game state, and
//! the validated move entry point the presentation layer drives.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Undo};
use crate::movegen;
use crate::types::{Color, Move, MoveKind, Piece, PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    FiftyMove,
    InsufficientMaterial,
    Repetition,
    Agreement,
}

/// Derived from the board after every committed move. Checkmate, stalemate
/// and draws are terminal; `Check` is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Active,
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Active | GameState::Check(_))
    }
}

/// Why a move request was rejected. All recoverable: the game is left
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("it is {0:?}'s turn")]
    WrongTurn(Color),
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}

/// A committed move as recorded in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Short algebraic notation, without check/mate suffixes.
    pub san: String,
}

pub struct Game {
    board: Board,
    state: GameState,
    records: Vec<MoveRecord>,
    undos: Vec<(Move, Undo)>,
    /// Zobrist hash after every committed move (and the start position),
    /// for threefold-repetition detection.
    position_history: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A new game from the standard initial position.
    pub fn new() -> Game {
        Game::from_board(Board::startpos())
    }

    /// A game continuing from an arbitrary position. The state is derived
    /// immediately, so e.g. a bare-kings position starts as a draw.
    pub fn from_board(board: Board) -> Game {
        let hash = board.position_hash();
        let mut game = Game {
            board,
            state: GameState::Active,
            records: Vec::new(),
            undos: Vec::new(),
            position_history: vec![hash],
        };
        game.recompute_state();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Legal moves for the piece on `from`; empty when the square is empty,
    /// the piece belongs to the waiting player, or the game is over.
    pub fn possible_moves(&self, from: Square) -> Vec<Move> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        movegen::legal_moves_from(&self.board, from)
    }

    /// Validate and commit a move. `promotion` is consulted only when the
    /// move promotes; an unspecified choice promotes to a queen.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;
        if piece.color != self.board.side_to_move {
            return Err(MoveError::WrongTurn(self.board.side_to_move));
        }

        let wanted = promotion.unwrap_or(PieceKind::Queen);
        let mv = movegen::legal_moves_from(&self.board, from)
            .into_iter()
            .find(|m| m.to == to && m.promotion.is_none_or(|p| p == wanted))
            .ok_or(MoveError::IllegalMove { from, to })?;

        Ok(self.commit(mv, piece))
    }

    /// Commit a move that is already known to be legal (e.g. one returned by
    /// the search). Skips validation apart from the terminal-state gate.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare(mv.from))?;
        Ok(self.commit(mv, piece))
    }

    fn commit(&mut self, mv: Move, piece: Piece) -> MoveRecord {
        let san = self.san_for(mv, piece);
        let captured = match mv.kind {
            MoveKind::EnPassant => Some(Piece::new(piece.color.opponent(), PieceKind::Pawn)),
            _ => self.board.piece_at(mv.to),
        };

        let undo = self.board.make_move(mv);
        self.position_history.push(self.board.position_hash());

        let record = MoveRecord {
            mv,
            piece,
            captured,
            san,
        };
        self.records.push(record.clone());
        self.undos.push((mv, undo));
        self.recompute_state();
        record
    }

    /// Revert the last committed move. Returns its record, or `None` when
    /// there is nothing to undo. This is the only way history shrinks.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let (mv, undo) = self.undos.pop()?;
        let record = self.records.pop().expect("records out of sync with undos");
        self.board.unmake_move(mv, undo);
        self.position_history.pop();
        self.recompute_state();
        Some(record)
    }

    /// Both players agree to a draw. Terminal.
    pub fn agree_draw(&mut self) {
        if !self.state.is_terminal() {
            self.state = GameState::Draw(DrawReason::Agreement);
        }
    }

    /// Derive the state for the player now to move. The no-legal-move
    /// outcomes are evaluated before the draw-by-rule conditions.
    fn recompute_state(&mut self) {
        let to_move = self.board.side_to_move;
        let any_moves = !movegen::legal_moves(&self.board).is_empty();
        let in_check = self.board.in_check(to_move);

        self.state = if !any_moves {
            if in_check {
                GameState::Checkmate {
                    winner: to_move.opponent(),
                }
            } else {
                GameState::Stalemate
            }
        } else if in_check {
            GameState::Check(to_move)
        } else if self.board.is_fifty_move_draw() {
            GameState::Draw(DrawReason::FiftyMove)
        } else if self.board.is_insufficient_material() {
            GameState::Draw(DrawReason::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            GameState::Draw(DrawReason::Repetition)
        } else {
            GameState::Active
        };
    }

    fn is_threefold_repetition(&self) -> bool {
        let current = self.board.position_hash();
        self.position_history
            .iter()
            .filter(|&&h| h == current)
            .count()
            >= 3
    }

    /// SAN for a move about to be played on the current board. Disambiguation
    /// and check suffixes are omitted; enough for history display.
    fn san_for(&self, mv: Move, piece: Piece) -> String {
        if mv.is_castle() {
            return if mv.to.file() > mv.from.file() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let mut san = String::new();
        if piece.kind != PieceKind::Pawn {
            san.push(piece.kind.letter());
        }

        let is_capture = self.board.piece_at(mv.to).is_some() || mv.is_en_passant();
        if is_capture {
            if piece.kind == PieceKind::Pawn {
                san.push((b'a' + mv.from.file() as u8) as char);
            }
            san.push('x');
        }

        san.push_str(&mv.to.to_string());

        if let Some(promo) = mv.promotion {
            san.push('=');
            san.push(promo.letter());
        }

        san
    }
}

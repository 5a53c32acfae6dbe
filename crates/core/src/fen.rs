//! FEN import and export.
//!
//! The textual boundary format: eight slash-delimited ranks of occupancy,
//! side to move, castling rights, en-passant target, halfmove clock and
//! fullmove number. Parsing fails closed with a typed error; it never
//! panics on malformed input.

use std::str::FromStr;

use crate::board::{Board, CastlingRights};
use crate::types::{Color, Piece, PieceKind, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected at least 4 whitespace-separated fields, found {0}")]
    MissingFields(usize),
    #[error("board section must list 8 ranks, found {0}")]
    BadRankCount(usize),
    #[error("rank {0} does not describe exactly 8 files")]
    BadRankWidth(usize),
    #[error("unknown piece character {0:?}")]
    BadPieceChar(char),
    #[error("invalid side to move {0:?}")]
    BadSideToMove(String),
    #[error("invalid castling character {0:?}")]
    BadCastling(char),
    #[error("invalid en passant target {0:?}")]
    BadEnPassant(String),
    #[error("invalid move counter {0:?}")]
    BadCounter(String),
}

fn piece_from_char(c: char) -> Option<Piece> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

fn piece_to_char(piece: Piece) -> char {
    let c = piece.kind.letter();
    match piece.color {
        Color::White => c,
        Color::Black => c.to_ascii_lowercase(),
    }
}

impl Board {
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::MissingFields(fields.len()));
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let rank = 7 - i as i8;
            let mut file: i8 = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as i8;
                } else {
                    let piece = piece_from_char(c).ok_or(FenError::BadPieceChar(c))?;
                    let sq = Square::new(file, rank).ok_or(FenError::BadRankWidth(8 - i))?;
                    board.set_piece(sq, Some(piece));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth(8 - i));
            }
        }

        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        board.castling = CastlingRights::none();
        if fields[2] != "-" {
            for c in fields[2].chars() {
                match c {
                    'K' => board.castling.white_kingside = true,
                    'Q' => board.castling.white_queenside = true,
                    'k' => board.castling.black_kingside = true,
                    'q' => board.castling.black_queenside = true,
                    _ => return Err(FenError::BadCastling(c)),
                }
            }
        }

        board.en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_str(fields[3])
                    .map_err(|_| FenError::BadEnPassant(fields[3].to_string()))?,
            )
        };

        let parse_counter = |s: &str| {
            s.parse::<u32>()
                .map_err(|_| FenError::BadCounter(s.to_string()))
        };
        board.halfmove_clock = fields.get(4).map_or(Ok(0), |s| parse_counter(s))?;
        board.fullmove_number = fields.get(5).map_or(Ok(1), |s| parse_counter(s))?;

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(80);

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                let sq = Square::new(file, rank).unwrap();
                match self.piece_at(sq) {
                    None => empty_run += 1,
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(piece_to_char(piece));
                    }
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling == CastlingRights::none() {
            fen.push('-');
        } else {
            for (right, c) in [
                (self.castling.white_kingside, 'K'),
                (self.castling.white_queenside, 'Q'),
                (self.castling.black_kingside, 'k'),
                (self.castling.black_queenside, 'q'),
            ] {
                if right {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;

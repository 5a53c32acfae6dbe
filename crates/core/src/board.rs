use crate::types::{Color, Move, MoveKind, Piece, PieceKind, Square};
use crate::zobrist::KEYS;

pub(crate) const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub fn all() -> CastlingRights {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> CastlingRights {
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    /// Revoke whatever rights depend on the piece sitting on `sq`.
    /// Covers a king leaving its home square, a rook leaving its corner,
    /// and a rook being captured on its corner.
    fn revoke_touching(&mut self, sq: Square) {
        match (sq.file(), sq.rank()) {
            (4, 0) => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            (0, 0) => self.white_queenside = false,
            (7, 0) => self.white_kingside = false,
            (4, 7) => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
            (0, 7) => self.black_queenside = false,
            (7, 7) => self.black_kingside = false,
            _ => {}
        }
    }
}

/// Everything needed to revert a `make_move`.
#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    /// (rook_from, rook_to) when the move was a castle.
    pub rook_move: Option<(Square, Square)>,
    /// Square the bypassed pawn actually stood on, for en passant.
    pub ep_captured_sq: Option<Square>,
}

/// A chess position: a mailbox of 64 squares plus the bookkeeping fields the
/// rules need. Pure state container; it performs no validation of its own.
/// Validated callers drive it through `make_move`/`unmake_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square behind a pawn that just advanced two ranks. Lives exactly one
    /// ply: `make_move` clears it before possibly setting a new one.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

impl Board {
    /// An empty board, White to move. Building block for FEN parsing and
    /// hand-assembled test positions.
    pub fn empty() -> Board {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position.
    pub fn startpos() -> Board {
        let mut b = Board::empty();
        b.castling = CastlingRights::all();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            let file = file as i8;
            b.put(Square::new(file, 0).unwrap(), Piece::new(Color::White, kind));
            b.put(Square::new(file, 1).unwrap(), Piece::new(Color::White, PieceKind::Pawn));
            b.put(Square::new(file, 6).unwrap(), Piece::new(Color::Black, PieceKind::Pawn));
            b.put(Square::new(file, 7).unwrap(), Piece::new(Color::Black, kind));
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// All occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, pc)| pc.color == color && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn in_check(&self, color: Color) -> bool {
        // A reachable position always has both kings; tolerate absence
        // defensively rather than treating it as a game outcome.
        debug_assert!(self.king_square(color).is_some(), "no {color:?} king on board");
        match self.king_square(color) {
            Some(ksq) => self.is_square_attacked(ksq, color.opponent()),
            None => false,
        }
    }

    /// Does any piece of color `by` attack `target`? Works backwards from
    /// the target square, so it never allocates a move list.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        // Pawns attack diagonally forward, so look one rank back from the
        // target in the attacker's advance direction.
        let back = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = target.offset(df, back)
                && self.piece_at(sq) == Some(Piece::new(by, PieceKind::Pawn))
            {
                return true;
            }
        }

        for (df, dr) in KNIGHT_JUMPS {
            if let Some(sq) = target.offset(df, dr)
                && self.piece_at(sq) == Some(Piece::new(by, PieceKind::Knight))
            {
                return true;
            }
        }

        for (df, dr) in KING_STEPS {
            if let Some(sq) = target.offset(df, dr)
                && self.piece_at(sq) == Some(Piece::new(by, PieceKind::King))
            {
                return true;
            }
        }

        self.ray_hits(target, by, &DIAG_DIRS, PieceKind::Bishop)
            || self.ray_hits(target, by, &ORTHO_DIRS, PieceKind::Rook)
    }

    /// Scan rays from `target`; true if the first blocker on any ray is an
    /// enemy `slider` or queen.
    fn ray_hits(&self, target: Square, by: Color, dirs: &[(i8, i8)], slider: PieceKind) -> bool {
        for &(df, dr) in dirs {
            let mut cur = target.offset(df, dr);
            while let Some(sq) = cur {
                if let Some(pc) = self.piece_at(sq) {
                    if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                cur = sq.offset(df, dr);
            }
        }
        false
    }

    /// Apply `mv` unconditionally and return the record needed to revert it.
    /// Callers are responsible for only passing validated moves.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self
            .piece_at(mv.from)
            .expect("make_move: no piece on from-square");
        let mut captured = self.piece_at(mv.to);

        let undo_base = Undo {
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            moved_piece: moved,
            rook_move: None,
            ep_captured_sq: None,
        };

        // En passant eligibility lasts one ply.
        self.en_passant = None;

        let mut ep_captured_sq = None;
        if mv.kind == MoveKind::EnPassant {
            // The captured pawn sits beside the destination, one rank back.
            let pawn_sq = mv
                .to
                .offset(0, -moved.color.pawn_direction())
                .expect("en passant target inside the board");
            captured = self.piece_at(pawn_sq);
            self.set_piece(pawn_sq, None);
            ep_captured_sq = Some(pawn_sq);
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));

        let is_promotion = moved.kind == PieceKind::Pawn
            && mv.to.rank() == moved.color.opponent().home_rank();
        if is_promotion {
            let kind = mv.promotion.unwrap_or(PieceKind::Queen);
            self.set_piece(mv.to, Some(Piece::new(moved.color, kind)));
        }

        // Castling relocates the rook in the same transition.
        let mut rook_move = None;
        if mv.kind == MoveKind::Castle {
            let rank = moved.color.home_rank();
            let (rook_from, rook_to) = if mv.to.file() == 6 {
                (Square::new(7, rank).unwrap(), Square::new(5, rank).unwrap())
            } else {
                (Square::new(0, rank).unwrap(), Square::new(3, rank).unwrap())
            };
            let rook = self
                .piece_at(rook_from)
                .expect("castle move with no rook on its corner");
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, Some(rook));
            rook_move = Some((rook_from, rook_to));
        }

        // Any move touching a king or rook home square kills the right,
        // including a capture of an unmoved rook.
        self.castling.revoke_touching(mv.from);
        self.castling.revoke_touching(mv.to);

        // A double pawn push opens the bypassed square to en passant.
        if moved.kind == PieceKind::Pawn && (mv.from.rank() - mv.to.rank()).abs() == 2 {
            self.en_passant = mv.from.offset(0, moved.color.pawn_direction());
        }

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.opponent();

        Undo {
            captured,
            rook_move,
            ep_captured_sq,
            ..undo_base
        }
    }

    /// Revert the most recent `make_move`. `undo` must be the record that
    /// move produced.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.opponent();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rook_from, rook_to)) = undo.rook_move {
            let rook = self.piece_at(rook_to).expect("rook missing on unmake");
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, Some(rook));
        }

        // A promoted pawn reverts to a pawn on its way back.
        self.set_piece(mv.from, Some(undo.moved_piece));
        self.set_piece(mv.to, None);

        if mv.kind == MoveKind::EnPassant {
            if let Some(pawn_sq) = undo.ep_captured_sq {
                self.set_piece(pawn_sq, undo.captured);
            }
        } else {
            self.set_piece(mv.to, undo.captured);
        }
    }

    /// Fifty full moves (100 plies) without a pawn move or capture.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Dead positions: K vs K, K+minor vs K, and K+B vs K+B with both
    /// bishops on the same square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = [0u32; 2];
        let mut bishop_shade = [None; 2];

        for (sq, pc) in self.pieces() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => minors[pc.color.idx()] += 1,
                PieceKind::Bishop => {
                    minors[pc.color.idx()] += 1;
                    bishop_shade[pc.color.idx()] = Some(sq.is_dark());
                }
            }
        }

        match minors[0] + minors[1] {
            0 | 1 => true,
            2 => {
                // Only drawn when it's one bishop each on like-colored squares.
                matches!(
                    (bishop_shade[0], bishop_shade[1]),
                    (Some(a), Some(b)) if a == b
                ) && minors[0] == 1
                    && minors[1] == 1
            }
            _ => false,
        }
    }

    /// Zobrist hash of the position. Ignores the move counters so a repeated
    /// position hashes equal regardless of the clocks.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for (sq, pc) in self.pieces() {
            h ^= KEYS.piece_key(pc, sq);
        }
        if self.side_to_move == Color::Black {
            h ^= KEYS.side_to_move;
        }
        for (i, right) in [
            self.castling.white_kingside,
            self.castling.white_queenside,
            self.castling.black_kingside,
            self.castling.black_queenside,
        ]
        .into_iter()
        .enumerate()
        {
            if right {
                h ^= KEYS.castling_key(i);
            }
        }
        if let Some(ep) = self.en_passant {
            h ^= KEYS.ep_key(ep.file() as u8);
        }
        h
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

//! Zobrist keys for position hashing.
//!
//! The hash is the XOR of a fixed random value per (piece, square), plus
//! values for side to move, each castling right, and the en-passant file.
//! Keys are generated at compile time from a fixed seed so hashes are
//! reproducible across runs.

use crate::types::{Piece, Square};

pub struct ZobristKeys {
    /// Indexed by [color][piece kind][square].
    pub pieces: [[[u64; 64]; 6]; 2],
    /// XOR-ed in when Black is to move.
    pub side_to_move: u64,
    /// One per castling right: wk, wq, bk, bq.
    pub castling: [u64; 4],
    /// One per en-passant file.
    pub en_passant: [u64; 8],
}

const fn splitmix64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (state, z ^ (z >> 31))
}

impl ZobristKeys {
    pub const fn new() -> ZobristKeys {
        let mut state = 0x0DDB_1A5E_5BAD_5EEDu64;
        let mut pieces = [[[0u64; 64]; 6]; 2];

        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    let (next, key) = splitmix64(state);
                    state = next;
                    pieces[color][kind][sq] = key;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        let (next, side_to_move) = splitmix64(state);
        state = next;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            let (next, key) = splitmix64(state);
            state = next;
            castling[i] = key;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            let (next, key) = splitmix64(state);
            state = next;
            en_passant[i] = key;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq.index()]
    }

    /// Key for castling right index (0=wk, 1=wq, 2=bk, 3=bq).
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.en_passant[file as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Global keys, computed at compile time.
pub static KEYS: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;

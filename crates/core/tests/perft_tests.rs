//! Perft counts against the standard reference positions. Each case is
//! checked at every listed depth; cases run in parallel.

use rayon::prelude::*;

use gambit_core::{Board, perft};

struct PerftCase {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u8, u64)],
}

const CASES: &[PerftCase] = &[
    PerftCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    },
    PerftCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
    PerftCase {
        name: "endgame with en passant pins",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    },
    PerftCase {
        name: "promotion heavy",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9_467)],
    },
    PerftCase {
        name: "talkchess bug catcher",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1_486), (3, 62_379)],
    },
];

#[test]
fn perft_matches_reference_counts() {
    CASES.par_iter().for_each(|case| {
        for &(depth, expected) in case.depths {
            let mut board = Board::from_fen(case.fen).unwrap();
            let got = perft(&mut board, depth);
            assert_eq!(
                got, expected,
                "{} at depth {}: expected {}, got {}",
                case.name, depth, expected, got
            );
        }
    });
}

#[test]
fn perft_leaves_the_board_unchanged() {
    let mut board = Board::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let before = board.to_fen();
    perft(&mut board, 3);
    assert_eq!(board.to_fen(), before);
}

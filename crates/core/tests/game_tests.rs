//! End-to-end tests for the game layer: move validation, checkmate and
//! check detection, promotion choices, undo, and history records.

use gambit_core::{
    Board, Color, Game, GameState, MoveError, MoveRecord, PieceKind, Square, START_FEN,
};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        game.make_move(sq(from), sq(to), None)
            .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"));
    }
}

// =============================================================================
// Checkmate and check
// =============================================================================

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );

    assert_eq!(
        game.state(),
        GameState::Checkmate {
            winner: Color::Black
        }
    );
    assert!(game.state().is_terminal());
    assert!(game.possible_moves(sq("e1")).is_empty());
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );

    assert_eq!(
        game.state(),
        GameState::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game.history().last().unwrap().san, "Qxf7");
}

#[test]
fn test_check_is_not_terminal() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("f7", "f6"), ("d1", "h5")]);

    assert_eq!(game.state(), GameState::Check(Color::Black));
    assert!(!game.state().is_terminal());
    // The checked side must address the check; g6 blocks.
    assert!(
        game.possible_moves(sq("g7"))
            .iter()
            .any(|mv| mv.to == sq("g6"))
    );
}

// =============================================================================
// Move validation
// =============================================================================

#[test]
fn test_queen_cannot_pass_through_own_pawn() {
    // After 1.e4 e5 the d2 pawn still blocks the queen's file, while the
    // d1-h5 diagonal has opened up.
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("e7", "e5")]);

    let targets: Vec<Square> = game.possible_moves(sq("d1")).iter().map(|m| m.to).collect();
    assert!(!targets.contains(&sq("d3")));
    assert!(targets.contains(&sq("f3")));
    assert!(targets.contains(&sq("h5")));

    assert_eq!(
        game.make_move(sq("d1"), sq("d3"), None),
        Err(MoveError::IllegalMove {
            from: sq("d1"),
            to: sq("d3"),
        })
    );
}

#[test]
fn test_rejects_move_from_empty_square() {
    let mut game = Game::new();
    assert_eq!(
        game.make_move(sq("e4"), sq("e5"), None),
        Err(MoveError::EmptySquare(sq("e4")))
    );
}

#[test]
fn test_rejects_moving_the_opponents_piece() {
    let mut game = Game::new();
    assert_eq!(
        game.make_move(sq("e7"), sq("e5"), None),
        Err(MoveError::WrongTurn(Color::White))
    );
}

#[test]
fn test_rejects_any_move_after_the_game_ends() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );

    assert_eq!(
        game.make_move(sq("e2"), sq("e3"), None),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_rejected_moves_leave_the_game_untouched() {
    let mut game = Game::new();
    let fen_before = game.board().to_fen();

    let _ = game.make_move(sq("e2"), sq("e5"), None);
    let _ = game.make_move(sq("d8"), sq("d5"), None);

    assert_eq!(game.board().to_fen(), fen_before);
    assert!(game.history().is_empty());
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn test_promotion_defaults_to_queen() {
    let board = Board::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mut game = Game::from_board(board);

    let record = game.make_move(sq("a7"), sq("a8"), None).unwrap();

    assert_eq!(record.mv.promotion, Some(PieceKind::Queen));
    assert_eq!(record.san, "a8=Q");
    assert_eq!(
        game.board().piece_at(sq("a8")).unwrap().kind,
        PieceKind::Queen
    );
}

#[test]
fn test_underpromotion_honors_the_choice() {
    let board = Board::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mut game = Game::from_board(board);

    let record = game
        .make_move(sq("a7"), sq("a8"), Some(PieceKind::Knight))
        .unwrap();

    assert_eq!(record.mv.promotion, Some(PieceKind::Knight));
    assert_eq!(record.san, "a8=N");
}

// =============================================================================
// Undo and history
// =============================================================================

#[test]
fn test_undo_restores_the_previous_position() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("e7", "e5")]);

    let undone = game.undo().unwrap();
    assert_eq!(undone.mv.to, sq("e5"));
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.history().len(), 1);

    game.undo().unwrap();
    assert_eq!(game.board().to_fen(), START_FEN);
    assert!(game.undo().is_none());
}

#[test]
fn test_undo_revives_a_checkmated_game() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    assert!(game.state().is_terminal());

    game.undo().unwrap();

    assert_eq!(game.state(), GameState::Active);
    assert!(game.make_move(sq("d8"), sq("e7"), None).is_ok());
}

#[test]
fn test_history_records_captures() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")],
    );

    let record = game.history().last().unwrap();
    assert_eq!(record.san, "exd5");
    assert_eq!(record.captured.map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(record.piece.color, Color::White);
}

#[test]
fn test_en_passant_capture_is_recorded() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );

    let record = game.make_move(sq("e5"), sq("d6"), None).unwrap();

    assert!(record.mv.is_en_passant());
    assert_eq!(record.san, "exd6");
    assert_eq!(record.captured.map(|p| p.kind), Some(PieceKind::Pawn));
    // The captured pawn sat beside the capturer, not on the target square.
    assert!(game.board().is_empty(sq("d5")));
}

#[test]
fn test_castling_san() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
            ("e1", "g1"),
        ],
    );

    assert_eq!(game.history().last().unwrap().san, "O-O");
    assert_eq!(
        game.board().piece_at(sq("f1")).unwrap().kind,
        PieceKind::Rook
    );
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_game_state_serializes_round_trip() {
    let states = [
        GameState::Active,
        GameState::Check(Color::Black),
        GameState::Checkmate {
            winner: Color::White,
        },
        GameState::Stalemate,
    ];
    for state in states {
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

#[test]
fn test_move_record_serializes_round_trip() {
    let mut game = Game::new();
    let record = game.make_move(sq("e2"), sq("e4"), None).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: MoveRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.san, "e4");
}

//! Search-level properties checked through the public API.

use fianchetto_core::{Board, Color, Game, Piece, PieceKind, Square};
use fianchetto_engine::search::minimax::minimax;
use fianchetto_engine::{evaluate, SearchState};

/// Full-width minimax with no pruning, no transposition table, and a static
/// leaf. Used as the ground truth for the alpha-beta consistency property
/// on positions whose horizon is capture-free (there quiescence collapses
/// to the static evaluation).
fn reference_minimax(game: &Game, depth: i32, maximizing: bool, engine_color: Color) -> f64 {
    let to_move = game.turn();
    if game.in_checkmate(to_move) {
        return if maximizing { -100_000.0 } else { 100_000.0 };
    }
    if game.in_stalemate(to_move) {
        return 0.0;
    }
    if depth <= 0 {
        return evaluate(game, engine_color);
    }
    let moves = game.legal_moves(to_move);
    if moves.is_empty() {
        return evaluate(game, engine_color);
    }
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for mv in moves {
        let child = game.make_move(mv);
        let score = reference_minimax(&child, depth - 1, !maximizing, engine_color);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

fn board_with(pieces: &[(PieceKind, Color, (u8, u8))]) -> Board {
    let mut board = Board::empty();
    for &(kind, color, (row, col)) in pieces {
        board.place(Piece::new(kind, color, Square::new(row, col)));
    }
    board
}

/// Positions where no capture can arise within the search plus quiescence
/// horizon: kings and pawns too far apart to meet.
fn capture_free_positions() -> Vec<Game> {
    vec![
        // Bare kings.
        Game::with_position(
            board_with(&[
                (PieceKind::King, Color::White, (7, 4)),
                (PieceKind::King, Color::Black, (0, 4)),
            ]),
            Color::White,
            Color::White,
            3,
        ),
        // Kings on the a-file, mutually blocked pawns far away on the h-file.
        Game::with_position(
            board_with(&[
                (PieceKind::King, Color::White, (7, 0)),
                (PieceKind::Pawn, Color::White, (6, 7)),
                (PieceKind::King, Color::Black, (0, 0)),
                (PieceKind::Pawn, Color::Black, (1, 7)),
            ]),
            Color::White,
            Color::White,
            3,
        ),
        // Mirror of the above: kings on the h-file, pawns on the a-file.
        Game::with_position(
            board_with(&[
                (PieceKind::King, Color::White, (7, 7)),
                (PieceKind::Pawn, Color::White, (6, 0)),
                (PieceKind::King, Color::Black, (0, 7)),
                (PieceKind::Pawn, Color::Black, (1, 0)),
            ]),
            Color::White,
            Color::White,
            3,
        ),
    ]
}

/// Alpha-beta (with move ordering, killer/history tables, and the
/// transposition table) must compute exactly the value of plain minimax.
#[test]
fn alpha_beta_matches_reference_minimax() {
    for (index, game) in capture_free_positions().into_iter().enumerate() {
        for depth in 1..=3 {
            let expected = reference_minimax(&game, depth, true, game.turn());
            let mut state = SearchState::new(game.turn(), depth);
            let actual = minimax(
                &game,
                depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                true,
                0,
                &mut state,
            );
            assert_eq!(
                actual, expected,
                "position {index} depth {depth}: alpha-beta {actual} != reference {expected}"
            );
        }
    }
}

/// Flip every piece across the middle of the board and swap colors.
fn mirrored(board: &Board) -> Board {
    let mut flipped = Board::empty();
    for square in Square::all() {
        if let Some(piece) = board.piece_at(square) {
            flipped.place(Piece::new(
                piece.kind,
                piece.color.opponent(),
                Square::new(7 - square.row(), square.col()),
            ));
        }
    }
    flipped
}

/// Evaluating a position for white equals evaluating its color-swapped
/// mirror for black. Checks on either king would trip the asymmetric
/// king-safety term, so the positions avoid them.
#[test]
fn evaluation_is_color_symmetric() {
    let positions = [
        board_with(&[
            (PieceKind::King, Color::White, (7, 4)),
            (PieceKind::Rook, Color::White, (5, 2)),
            (PieceKind::Pawn, Color::White, (4, 4)),
            (PieceKind::King, Color::Black, (0, 4)),
            (PieceKind::Knight, Color::Black, (2, 6)),
            (PieceKind::Pawn, Color::Black, (1, 0)),
        ]),
        board_with(&[
            (PieceKind::King, Color::White, (7, 6)),
            (PieceKind::Queen, Color::White, (6, 3)),
            (PieceKind::King, Color::Black, (0, 6)),
            (PieceKind::Bishop, Color::Black, (1, 2)),
        ]),
    ];
    for (index, board) in positions.into_iter().enumerate() {
        let original = Game::with_position(board.clone(), Color::White, Color::Black, 3);
        let flipped = Game::with_position(mirrored(&board), Color::Black, Color::White, 3);
        assert!(!original.in_check(Color::White) && !original.in_check(Color::Black));
        let from_white = evaluate(&original, Color::White);
        let from_black = evaluate(&flipped, Color::Black);
        assert_eq!(
            from_white, from_black,
            "position {index}: {from_white} != mirrored {from_black}"
        );
    }
}

/// A depth-1 engine on both sides produces a legal game for several moves.
#[test]
fn self_play_stays_legal() {
    let mut game = Game::new(true, Color::White, 1);
    for _ in 0..6 {
        let before = game.history().len();
        assert!(
            fianchetto_engine::play_ai_move(&mut game),
            "engine should find a move in a fresh middlegame"
        );
        assert_eq!(game.history().len(), before + 1);
        game.board().validate().expect("board stays structurally valid");
    }
}

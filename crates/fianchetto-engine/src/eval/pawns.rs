//! Pawn structure: a pawn-count difference.

use fianchetto_core::{Board, Color, PieceKind};

/// Ten points per pawn of advantage.
pub fn pawn_count_balance(board: &Board, engine_color: Color) -> i32 {
    let count = |color: Color| {
        board
            .pieces_of(color)
            .filter(|piece| piece.kind == PieceKind::Pawn)
            .count() as i32
    };
    (count(engine_color) - count(engine_color.opponent())) * 10
}

//! Endgame detection.

use fianchetto_core::{Board, Color};

/// The game counts as an endgame once both sides are down to at most one
/// major piece (queen or rook). The king piece-square table switches to its
/// endgame variant and the search extends itself when this holds.
pub fn is_endgame(board: &Board) -> bool {
    Color::ALL.iter().all(|&color| {
        board
            .pieces_of(color)
            .filter(|piece| piece.kind.is_major())
            .count()
            <= 1
    })
}

//! Knight jumps.

use crate::board::Board;
use crate::movegen::KNIGHT_OFFSETS;
use crate::piece::Piece;
use crate::square::Square;

/// The eight L-shaped jumps onto empty or enemy-occupied squares.
pub(super) fn targets(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut targets = Vec::new();
    for &(dr, dc) in &KNIGHT_OFFSETS {
        if let Some(to) = piece.position.offset(dr, dc) {
            match board.piece_at(to) {
                Some(other) if other.color == piece.color => {}
                _ => targets.push(to),
            }
        }
    }
    targets
}

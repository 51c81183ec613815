//! Pawn pushes and captures.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Pushes one square (two from the starting row) onto empty squares, plus
/// diagonal captures of enemy pieces or the en-passant target.
pub(super) fn targets(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut targets = Vec::new();
    let from = piece.position;
    let dir = piece.color.forward();

    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            targets.push(one);
            if from.row() == piece.color.pawn_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        targets.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc) {
            match board.piece_at(diag) {
                Some(other) if other.color != piece.color => targets.push(diag),
                None if Some(diag) == board.en_passant_target() => targets.push(diag),
                _ => {}
            }
        }
    }

    targets
}

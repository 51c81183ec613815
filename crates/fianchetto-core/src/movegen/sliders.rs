//! Sliding moves shared by bishops, rooks, and queens.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Slide along each direction, collecting empty squares and stopping on the
/// first blocker — which is collected too when it is an enemy piece.
pub(super) fn targets(board: &Board, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut targets = Vec::new();
    for &(dr, dc) in directions {
        let mut current = piece.position;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_at(next) {
                None => targets.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        targets.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    targets
}

//! King steps and castling.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::KING_OFFSETS;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// One-step moves that do not land next to the enemy king, plus castling
/// destinations when every precondition holds.
pub(super) fn targets(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut targets = Vec::new();
    for &(dr, dc) in &KING_OFFSETS {
        if let Some(to) = piece.position.offset(dr, dc) {
            let own_blocker =
                matches!(board.piece_at(to), Some(other) if other.color == piece.color);
            if !own_blocker && !adjacent_to_enemy_king(board, piece.color, to) {
                targets.push(to);
            }
        }
    }

    // Castling requires an unmoved king that is not currently attacked; the
    // attack scans run in ignore-enemy-king mode throughout.
    if !piece.has_moved && !board.is_under_attack(piece.position, piece.color.opponent(), true) {
        if let Some(to) = castle_target(board, piece, CastleSide::Kingside) {
            targets.push(to);
        }
        if let Some(to) = castle_target(board, piece, CastleSide::Queenside) {
            targets.push(to);
        }
    }

    targets
}

/// Whether `to` touches the enemy king. Keeping the kings apart here means
/// the attack scan never needs to consult the enemy king for legality.
fn adjacent_to_enemy_king(board: &Board, color: Color, to: Square) -> bool {
    match board.king_square(color.opponent()) {
        Some(enemy) => {
            to.row().abs_diff(enemy.row()) <= 1 && to.col().abs_diff(enemy.col()) <= 1
        }
        None => false,
    }
}

#[derive(Clone, Copy)]
enum CastleSide {
    Kingside,
    Queenside,
}

/// The castling destination for `side`, or `None` when any precondition
/// fails: rook missing/moved/wrong color, a piece between king and rook, or
/// an attacked square among the king's start, transit, and destination.
fn castle_target(board: &Board, king: &Piece, side: CastleSide) -> Option<Square> {
    let row = king.position.row() as i8;
    let col = king.position.col() as i8;
    let (corner_col, king_step): (i8, i8) = match side {
        CastleSide::Kingside => (7, 1),
        CastleSide::Queenside => (0, -1),
    };

    let corner = Square::try_new(row, corner_col)?;
    let rook = board.piece_at(corner)?;
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
        return None;
    }

    let mut between = col + king_step;
    while between != corner_col {
        if board.piece_at(Square::try_new(row, between)?).is_some() {
            return None;
        }
        between += king_step;
    }

    let enemy = king.color.opponent();
    for step in 0..3 {
        let crossed = Square::try_new(row, col + step * king_step)?;
        if board.is_square_attacked(crossed, enemy) {
            return None;
        }
    }

    Square::try_new(row, col + 2 * king_step)
}

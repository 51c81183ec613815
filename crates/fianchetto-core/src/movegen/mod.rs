//! Pseudo-legal target generation for the six piece kinds.
//!
//! A pseudo-legal target satisfies piece geometry and board occupancy but
//! may still leave the mover's own king in check; that filtering happens in
//! [`Game::legal_moves`](crate::game::Game::legal_moves).

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// The eight knight jumps.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// The eight one-step king directions.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Orthogonal slide directions (rook).
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Diagonal slide directions (bishop).
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// All eight slide directions (queen).
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// All squares `piece` can reach by its geometry on this board.
pub fn pseudo_legal_targets(board: &Board, piece: &Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawns::targets(board, piece),
        PieceKind::Knight => knights::targets(board, piece),
        PieceKind::Bishop => sliders::targets(board, piece, &BISHOP_DIRECTIONS),
        PieceKind::Rook => sliders::targets(board, piece, &ROOK_DIRECTIONS),
        PieceKind::Queen => sliders::targets(board, piece, &QUEEN_DIRECTIONS),
        PieceKind::King => king::targets(board, piece),
    }
}

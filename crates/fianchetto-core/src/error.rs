//! Error types for move submission and board validation.

use crate::color::Color;
use crate::square::Square;

/// Why a submitted move was rejected.
///
/// Rejection leaves the game untouched; [`Game::play_move`] collapses these
/// into `false`.
///
/// [`Game::play_move`]: crate::game::Game::play_move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source square is empty.
    #[error("no piece on the source square")]
    NoPiece,
    /// The piece on the source square belongs to the side not on move.
    #[error("piece belongs to the side not on move")]
    WrongTurn,
    /// The destination is not among the piece's pseudo-legal targets.
    #[error("destination is not reachable by that piece")]
    IllegalDestination,
    /// Playing the move would leave the mover's own king attacked.
    #[error("move would leave own king attacked")]
    ExposesKing,
}

/// Structural problems in a hand-built position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 {color} king, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A piece's recorded position disagrees with the cell that owns it.
    #[error("piece on {square} records position {recorded}")]
    PositionMismatch {
        /// The cell the piece actually occupies.
        square: Square,
        /// The position the piece claims.
        recorded: Square,
    },
    /// The en-passant target square is not on row 2 or row 5.
    #[error("en passant target {square} lies on row {row}, expected 2 or 5")]
    InvalidEnPassantRow {
        /// The offending target square.
        square: Square,
        /// Its row.
        row: u8,
    },
}

//! The 8×8 board: piece placement, attack queries, and move application.

use std::fmt;

use crate::chess_move::{MoveResult, Promotion, SpecialMove};
use crate::color::Color;
use crate::error::BoardError;
use crate::movegen::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Back-rank piece order, file a through file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement plus the en-passant state that travels with it.
///
/// The grid is a flat 64-cell array indexed row-major from black's back
/// rank; `(row, col)` addressing happens through [`Square`]. Cloning a board
/// deep-copies every piece, so clones share no mutable state with the
/// original — the search relies on this for copy-make.
#[derive(Clone)]
pub struct Board {
    squares: [Option<Piece>; 64],
    /// The square a pawn could be captured on by en passant next ply. Set
    /// only when a pawn has just advanced two squares, cleared by every
    /// other move.
    en_passant_target: Option<Square>,
}

impl Board {
    /// An empty board with no en-passant target.
    pub fn empty() -> Board {
        Board {
            squares: [None; 64],
            en_passant_target: None,
        }
    }

    /// The standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for col in 0..8 {
                board.place(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Square::new(color.pawn_row(), col),
                ));
            }
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.place(Piece::new(
                    kind,
                    color,
                    Square::new(color.back_row(), col as u8),
                ));
            }
        }
        board
    }

    /// The piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Put `piece` on the cell named by its own `position`, replacing
    /// whatever was there. Intended for position setup; play goes through
    /// [`Board::move_piece`].
    pub fn place(&mut self, piece: Piece) {
        self.squares[piece.position.index()] = Some(piece);
    }

    /// Remove and return the piece on `square`.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// The current en-passant target, if a pawn just advanced two squares.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Clear the en-passant target. Undo uses this; the previous target is
    /// not restored (see [`Game::undo_move`]).
    ///
    /// [`Game::undo_move`]: crate::game::Game::undo_move
    pub(crate) fn clear_en_passant_target(&mut self) {
        self.en_passant_target = None;
    }

    /// All pieces of `color` in row-major board order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .copied()
            .filter(move |piece| piece.color == color)
    }

    /// The square of `color`'s king, or `None` on a board without one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.position)
    }

    /// Whether `color`'s king is attacked. A board without that king (only
    /// constructible by hand) reports no check.
    pub fn king_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(square) => self.is_under_attack(square, color.opponent(), false),
            None => false,
        }
    }

    /// Whether any piece of `by_color` attacks `target`.
    ///
    /// Pawns attack their two forward diagonals whether or not anything
    /// stands there; knights their eight L-offsets; sliders any aligned
    /// square with no blocker strictly between; kings their eight
    /// neighbours. `ignore_king` drops the enemy king from the scan — the
    /// castling checks use it so the enemy king cannot veto castling (king
    /// adjacency is already excluded during move generation).
    pub fn is_under_attack(&self, target: Square, by_color: Color, ignore_king: bool) -> bool {
        for piece in self.pieces_of(by_color) {
            if ignore_king && piece.kind == PieceKind::King {
                continue;
            }
            if self.piece_attacks(piece, target) {
                return true;
            }
        }
        false
    }

    /// Attack query in ignore-enemy-king mode, as used by castling.
    #[inline]
    pub fn is_square_attacked(&self, target: Square, by_color: Color) -> bool {
        self.is_under_attack(target, by_color, true)
    }

    fn piece_attacks(&self, piece: Piece, target: Square) -> bool {
        let from = piece.position;
        match piece.kind {
            PieceKind::Pawn => {
                let dir = piece.color.forward();
                from.offset(dir, -1) == Some(target) || from.offset(dir, 1) == Some(target)
            }
            PieceKind::Knight => KNIGHT_OFFSETS
                .iter()
                .any(|&(dr, dc)| from.offset(dr, dc) == Some(target)),
            PieceKind::King => KING_OFFSETS
                .iter()
                .any(|&(dr, dc)| from.offset(dr, dc) == Some(target)),
            PieceKind::Bishop => self.slider_attacks(from, target, false, true),
            PieceKind::Rook => self.slider_attacks(from, target, true, false),
            PieceKind::Queen => self.slider_attacks(from, target, true, true),
        }
    }

    /// Whether a slider on `from` attacks `target`: the squares must be
    /// aligned along a permitted direction with nothing strictly between.
    fn slider_attacks(&self, from: Square, target: Square, orthogonal: bool, diagonal: bool) -> bool {
        let dr = target.row() as i8 - from.row() as i8;
        let dc = target.col() as i8 - from.col() as i8;
        let orth_aligned = orthogonal && (dr == 0) != (dc == 0);
        let diag_aligned = diagonal && dr != 0 && dr.abs() == dc.abs();
        if !orth_aligned && !diag_aligned {
            return false;
        }
        let mut current = from;
        loop {
            current = match current.offset(dr.signum(), dc.signum()) {
                Some(square) => square,
                None => return false,
            };
            if current == target {
                return true;
            }
            if self.piece_at(current).is_some() {
                return false;
            }
        }
    }

    /// Apply a pseudo-legal move, returning `None` when the source square is
    /// empty.
    ///
    /// In order: the captured piece and the en-passant target are
    /// snapshotted and the target cleared; an en-passant capture removes the
    /// enemy pawn beside the destination (tested against the snapshot — the
    /// pawn is on a different square than the destination, so it must go
    /// before the destination is overwritten); a double pawn push sets the
    /// new target to the crossed square; castling relocates the rook to the
    /// square the king crossed; the mover lands on `to`; a pawn reaching the
    /// far rank is replaced by the promotion choice, defaulting to a queen.
    pub fn move_piece(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Promotion>,
    ) -> Option<MoveResult> {
        let mut piece = self.piece_at(from)?;
        let moved_snapshot = piece;
        let mut captured = self.piece_at(to);
        let previous_en_passant = self.en_passant_target;
        self.en_passant_target = None;
        let mut special = SpecialMove::None;

        if piece.kind == PieceKind::Pawn && Some(to) == previous_en_passant {
            let captured_square = Square::new(from.row(), to.col());
            captured = self.remove(captured_square);
            special = SpecialMove::EnPassant;
        }

        if piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            let crossed = Square::new((from.row() + to.row()) / 2, to.col());
            self.en_passant_target = Some(crossed);
        }

        let mut castling_rook = None;
        if piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
            let (corner, crossed) = if to.col() > from.col() {
                (Square::new(from.row(), 7), Square::new(from.row(), to.col() - 1))
            } else {
                (Square::new(from.row(), 0), Square::new(from.row(), to.col() + 1))
            };
            if let Some(mut rook) = self.remove(corner) {
                rook.position = crossed;
                rook.has_moved = true;
                self.place(rook);
                castling_rook = Some((corner, crossed));
                special = SpecialMove::Castling;
            }
        }

        piece.position = to;
        piece.has_moved = true;
        self.squares[to.index()] = Some(piece);
        self.squares[from.index()] = None;

        let mut promoted = None;
        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            let choice = promotion.unwrap_or(Promotion::Queen);
            let replacement = Piece {
                kind: choice.piece_kind(),
                color: piece.color,
                position: to,
                has_moved: true,
            };
            self.squares[to.index()] = Some(replacement);
            promoted = Some(replacement);
            special = SpecialMove::Promotion;
        }

        Some(MoveResult {
            from,
            to,
            moved_piece: moved_snapshot,
            captured_piece: captured,
            promoted,
            castling_rook,
            special,
            previous_en_passant,
        })
    }

    /// Check the structural invariants of the position: every piece's
    /// recorded position matches its cell, each side has exactly one king,
    /// and the en-passant target (if set) is on row 2 or 5.
    pub fn validate(&self) -> Result<(), BoardError> {
        for square in Square::all() {
            if let Some(piece) = self.piece_at(square) {
                if piece.position != square {
                    return Err(BoardError::PositionMismatch {
                        square,
                        recorded: piece.position,
                    });
                }
            }
        }
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|piece| piece.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        if let Some(target) = self.en_passant_target {
            if target.row() != 2 && target.row() != 5 {
                return Err(BoardError::InvalidEnPassantRow {
                    square: target,
                    row: target.row(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => write!(f, " {}", piece.letter())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

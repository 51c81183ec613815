//! Turn state, move legality, history, and undo.

use tracing::trace;

use crate::board::Board;
use crate::chess_move::{Move, MoveRecord, MoveResult, Promotion, SpecialMove};
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen::pseudo_legal_targets;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// A game in progress: the board, whose turn it is, and the move history.
///
/// `ai_opponent`, `ai_color`, and `ai_depth` are configuration carried for
/// the engine and the front end; the game itself never invokes the search.
#[derive(Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    move_count: u32,
    history: Vec<MoveRecord>,
    ai_opponent: bool,
    ai_color: Color,
    ai_depth: u8,
}

impl Game {
    /// A game from the standard starting position, white to move.
    pub fn new(ai_opponent: bool, ai_color: Color, ai_depth: u8) -> Game {
        Game {
            ai_opponent,
            ..Game::with_position(Board::new(), Color::White, ai_color, ai_depth)
        }
    }

    /// A game from an arbitrary position, with no scheduled engine side.
    /// The caller is responsible for the structural invariants
    /// ([`Board::validate`] checks them).
    pub fn with_position(board: Board, turn: Color, ai_color: Color, ai_depth: u8) -> Game {
        Game {
            board,
            turn,
            move_count: 0,
            history: Vec::new(),
            ai_opponent: false,
            ai_color,
            ai_depth,
        }
    }

    /// The current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Full moves completed; increments each time white comes back to move.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether an engine side is scheduled at all. The front end consults
    /// this to decide when to invoke the search.
    #[inline]
    pub fn ai_opponent(&self) -> bool {
        self.ai_opponent
    }

    /// The side the engine plays.
    #[inline]
    pub fn ai_color(&self) -> Color {
        self.ai_color
    }

    /// Configured search depth for the engine.
    #[inline]
    pub fn ai_depth(&self) -> u8 {
        self.ai_depth
    }

    /// The moves played so far.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
        if self.turn == Color::White {
            self.move_count += 1;
        }
    }

    /// Whether `color`'s king is attacked.
    pub fn in_check(&self, color: Color) -> bool {
        self.board.king_in_check(color)
    }

    /// In check with no legal move.
    pub fn in_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_moves(color)
    }

    /// Not in check, but no legal move either.
    pub fn in_stalemate(&self, color: Color) -> bool {
        !self.in_check(color) && !self.has_legal_moves(color)
    }

    /// Whether playing `mv` on `board` would leave `color`'s king attacked.
    fn leaves_king_attacked(board: &Board, mv: Move, color: Color) -> bool {
        let mut clone = board.clone();
        clone.move_piece(mv.from, mv.to, mv.promotion);
        clone.king_in_check(color)
    }

    fn has_legal_moves(&self, color: Color) -> bool {
        for piece in self.board.pieces_of(color) {
            for to in pseudo_legal_targets(&self.board, &piece) {
                let mv = Move::new(piece.position, to);
                if !Self::leaves_king_attacked(&self.board, mv, color) {
                    return true;
                }
            }
        }
        false
    }

    /// Every legal move for `color`, in row-major piece order. A pawn move
    /// onto the far rank expands into four moves, one per promotion choice.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.board.pieces_of(color) {
            for to in pseudo_legal_targets(&self.board, &piece) {
                if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
                    for choice in Promotion::ALL {
                        let mv = Move::promoting(piece.position, to, choice);
                        if !Self::leaves_king_attacked(&self.board, mv, color) {
                            moves.push(mv);
                        }
                    }
                } else {
                    let mv = Move::new(piece.position, to);
                    if !Self::leaves_king_attacked(&self.board, mv, color) {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    /// The legal moves of `color` that land on an occupied square. Feeds
    /// quiescence search; en-passant captures land on an empty square and
    /// are deliberately not part of this set.
    pub fn capture_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.board.pieces_of(color) {
            for to in pseudo_legal_targets(&self.board, &piece) {
                if self.board.piece_at(to).is_none() {
                    continue;
                }
                if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
                    for choice in Promotion::ALL {
                        let mv = Move::promoting(piece.position, to, choice);
                        if !Self::leaves_king_attacked(&self.board, mv, color) {
                            moves.push(mv);
                        }
                    }
                } else {
                    let mv = Move::new(piece.position, to);
                    if !Self::leaves_king_attacked(&self.board, mv, color) {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    /// Validate and play a move for the side to move.
    ///
    /// On success the move is applied, recorded in the history, and the turn
    /// switches. On rejection nothing changes.
    pub fn try_play_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Promotion>,
    ) -> Result<MoveResult, MoveError> {
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPiece)?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn);
        }
        if !pseudo_legal_targets(&self.board, &piece).contains(&to) {
            return Err(MoveError::IllegalDestination);
        }
        let mv = Move {
            from,
            to,
            promotion,
        };
        if Self::leaves_king_attacked(&self.board, mv, self.turn) {
            return Err(MoveError::ExposesKing);
        }
        self.apply_unchecked(mv).ok_or(MoveError::NoPiece)
    }

    /// Boolean facade over [`Game::try_play_move`]: `false` means rejected,
    /// no state change.
    pub fn play_move(&mut self, from: Square, to: Square, promotion: Option<Promotion>) -> bool {
        match self.try_play_move(from, to, promotion) {
            Ok(_) => true,
            Err(reason) => {
                trace!(%from, %to, %reason, "move rejected");
                false
            }
        }
    }

    /// Copy-make for the search: clone the game and apply `mv` without
    /// re-validating it. `mv` must come from [`Game::legal_moves`].
    pub fn make_move(&self, mv: Move) -> Game {
        let mut next = self.clone();
        next.apply_unchecked(mv);
        next
    }

    /// Apply a pseudo-legal move: board application, history record, turn
    /// switch. `None` only when the source square is empty.
    fn apply_unchecked(&mut self, mv: Move) -> Option<MoveResult> {
        let result = self.board.move_piece(mv.from, mv.to, mv.promotion)?;
        self.history.push(MoveRecord {
            from: mv.from,
            to: mv.to,
            captured_piece: result.captured_piece,
            special: result.special,
            promotion_choice: mv.promotion,
        });
        self.switch_turn();
        Some(result)
    }

    /// Take back the last played move.
    ///
    /// Restores piece placement exactly. Two deliberate asymmetries survive
    /// from the original design: the previous en-passant target is not
    /// restored (the record does not carry it), and `has_moved` of the moved
    /// piece is reset only when undoing castling or promotion.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        let MoveRecord {
            from,
            to,
            captured_piece,
            special,
            ..
        } = record;

        let mut moved_color = None;
        if let Some(mut piece) = self.board.remove(to) {
            moved_color = Some(piece.color);
            piece.position = from;
            if matches!(special, SpecialMove::Castling | SpecialMove::Promotion) {
                piece.has_moved = false;
            }
            self.board.place(piece);
        }

        if let Some(mut captured) = captured_piece {
            captured.position = match special {
                // The en-passant victim sat beside the destination.
                SpecialMove::EnPassant => Square::new(from.row(), to.col()),
                _ => to,
            };
            self.board.place(captured);
        }

        if special == SpecialMove::Castling {
            let (crossed_col, corner_col) = if to.col() > from.col() {
                (to.col() - 1, 7)
            } else {
                (to.col() + 1, 0)
            };
            if let Some(mut rook) = self.board.remove(Square::new(from.row(), crossed_col)) {
                rook.position = Square::new(from.row(), corner_col);
                rook.has_moved = false;
                self.board.place(rook);
            }
        }

        if special == SpecialMove::Promotion {
            if let Some(color) = moved_color {
                self.board.place(Piece::new(PieceKind::Pawn, color, from));
            }
        }

        self.board.clear_en_passant_target();

        if self.turn == Color::White {
            self.move_count = self.move_count.saturating_sub(1);
        }
        self.turn = self.turn.opponent();
        true
    }
}

//! A one-recapture exchange heuristic.
//!
//! Much cheaper than a full static exchange evaluation: a capture is
//! favourable when the victim outvalues the attacker, when nothing
//! recaptures, or when the trade is at worst even.

use fianchetto_core::{Board, Square};

use crate::eval::material;

/// Judge the capture `from -> to`. Non-captures are never favourable.
pub fn is_favorable_capture(board: &Board, from: Square, to: Square) -> bool {
    let Some(attacker) = board.piece_at(from) else {
        return false;
    };
    let Some(victim) = board.piece_at(to) else {
        return false;
    };

    let attacker_value = material::value(attacker.kind);
    let victim_value = material::value(victim.kind);
    if victim_value > attacker_value {
        return true;
    }

    // Play the capture on a scratch board and see if the destination is
    // recaptured; an even trade is acceptable, a losing one is not.
    let mut after = board.clone();
    after.move_piece(from, to, None);
    if after.is_under_attack(to, attacker.color.opponent(), false) {
        return victim_value >= attacker_value;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::is_favorable_capture;
    use fianchetto_core::{Board, Color, Piece, PieceKind, Square};

    fn board_with(pieces: &[(PieceKind, Color, (u8, u8))]) -> Board {
        let mut board = Board::empty();
        for &(kind, color, (row, col)) in pieces {
            board.place(Piece::new(kind, color, Square::new(row, col)));
        }
        board
    }

    #[test]
    fn pawn_takes_queen_is_always_good() {
        let board = board_with(&[
            (PieceKind::King, Color::White, (7, 4)),
            (PieceKind::King, Color::Black, (0, 4)),
            (PieceKind::Pawn, Color::White, (4, 4)),
            (PieceKind::Queen, Color::Black, (3, 3)),
            (PieceKind::Pawn, Color::Black, (2, 2)),
        ]);
        assert!(is_favorable_capture(&board, Square::new(4, 4), Square::new(3, 3)));
    }

    #[test]
    fn queen_takes_defended_pawn_is_bad() {
        // Qxd5 runs into c6xd5.
        let board = board_with(&[
            (PieceKind::King, Color::White, (7, 4)),
            (PieceKind::King, Color::Black, (0, 4)),
            (PieceKind::Queen, Color::White, (6, 3)),
            (PieceKind::Pawn, Color::Black, (3, 3)),
            (PieceKind::Pawn, Color::Black, (2, 2)),
        ]);
        assert!(!is_favorable_capture(&board, Square::new(6, 3), Square::new(3, 3)));
    }

    #[test]
    fn undefended_pawn_is_free_for_anyone() {
        let board = board_with(&[
            (PieceKind::King, Color::White, (7, 4)),
            (PieceKind::King, Color::Black, (0, 4)),
            (PieceKind::Queen, Color::White, (6, 3)),
            (PieceKind::Pawn, Color::Black, (3, 3)),
        ]);
        assert!(is_favorable_capture(&board, Square::new(6, 3), Square::new(3, 3)));
    }

    #[test]
    fn even_trade_with_recapture_is_acceptable() {
        // Rook takes rook, recaptured by a pawn: even material, allowed.
        let board = board_with(&[
            (PieceKind::King, Color::White, (7, 4)),
            (PieceKind::King, Color::Black, (0, 4)),
            (PieceKind::Rook, Color::White, (4, 0)),
            (PieceKind::Rook, Color::Black, (4, 6)),
            (PieceKind::Pawn, Color::Black, (3, 7)),
        ]);
        assert!(is_favorable_capture(&board, Square::new(4, 0), Square::new(4, 6)));
    }

    #[test]
    fn non_capture_is_not_favorable() {
        let board = Board::new();
        assert!(!is_favorable_capture(&board, Square::new(6, 4), Square::new(4, 4)));
    }
}

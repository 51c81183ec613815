//! Pin, fork, and skewer recognition for the front end's hint feature.
//!
//! Purely observational: nothing here is invoked during search.

use tracing::debug;

use crate::game::Game;
use crate::movegen::{
    pseudo_legal_targets, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// A piece of the side to move that has pseudo-legal moves but no legal one.
#[derive(Debug, Clone)]
pub struct Pin {
    pub piece: Piece,
    pub square: Square,
}

/// An opponent piece attacking two or more pieces of the side to move.
#[derive(Debug, Clone)]
pub struct Fork {
    pub attacker: Piece,
    pub square: Square,
    pub targets: Vec<(Piece, Square)>,
}

/// An opponent slider lined up through two pieces of the side to move, the
/// nearer one more valuable than the one behind it.
#[derive(Debug, Clone)]
pub struct Skewer {
    pub attacker: Piece,
    pub square: Square,
    pub front: (Piece, Square),
    pub back: (Piece, Square),
}

/// Everything [`Game::detect_tactics`] found in the current position.
#[derive(Debug, Clone, Default)]
pub struct Tactics {
    pub pins: Vec<Pin>,
    pub forks: Vec<Fork>,
    pub skewers: Vec<Skewer>,
}

/// Piece weights used to order skewer targets.
fn skewer_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

impl Game {
    /// Scan the position for pins, forks, and skewers against the side to
    /// move.
    pub fn detect_tactics(&self) -> Tactics {
        let mut tactics = Tactics::default();
        let board = self.board();
        let us = self.turn();
        let them = us.opponent();

        // Pins: our non-king pieces whose every pseudo-legal move would
        // expose our king.
        for piece in board.pieces_of(us) {
            if piece.kind == PieceKind::King {
                continue;
            }
            let targets = pseudo_legal_targets(board, &piece);
            if targets.is_empty() {
                continue;
            }
            let all_expose = targets.iter().all(|&to| {
                let mut clone = board.clone();
                clone.move_piece(piece.position, to, None);
                clone.king_in_check(us)
            });
            if all_expose {
                tactics.pins.push(Pin {
                    piece,
                    square: piece.position,
                });
            }
        }

        for attacker in board.pieces_of(them) {
            // Forks: two or more of our pieces among the attacker's targets.
            let attacked: Vec<(Piece, Square)> = pseudo_legal_targets(board, &attacker)
                .into_iter()
                .filter_map(|to| {
                    board
                        .piece_at(to)
                        .filter(|victim| victim.color == us)
                        .map(|victim| (victim, to))
                })
                .collect();
            if attacked.len() >= 2 {
                tactics.forks.push(Fork {
                    attacker,
                    square: attacker.position,
                    targets: attacked,
                });
            }

            // Skewers: along each slide direction, collect our pieces up to
            // the first foreign blocker; front must outvalue back.
            let directions: &[(i8, i8)] = match attacker.kind {
                PieceKind::Rook => &ROOK_DIRECTIONS,
                PieceKind::Bishop => &BISHOP_DIRECTIONS,
                PieceKind::Queen => &QUEEN_DIRECTIONS,
                _ => continue,
            };
            for &(dr, dc) in directions {
                let mut aligned: Vec<(Piece, Square)> = Vec::new();
                let mut current = attacker.position;
                while let Some(next) = current.offset(dr, dc) {
                    match board.piece_at(next) {
                        Some(piece) if piece.color == us => aligned.push((piece, next)),
                        Some(_) => break,
                        None => {}
                    }
                    current = next;
                }
                if aligned.len() >= 2
                    && skewer_value(aligned[0].0.kind) > skewer_value(aligned[1].0.kind)
                {
                    tactics.skewers.push(Skewer {
                        attacker,
                        square: attacker.position,
                        front: aligned[0],
                        back: aligned[1],
                    });
                }
            }
        }

        debug!(
            pins = tactics.pins.len(),
            forks = tactics.forks.len(),
            skewers = tactics.skewers.len(),
            "tactics scan"
        );
        tactics
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::game::Game;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    fn game_with(board: Board, turn: Color) -> Game {
        Game::with_position(board, turn, Color::Black, 3)
    }

    #[test]
    fn absolute_pin_detected() {
        // White knight on e2 is pinned by the black rook on e8; every knight
        // move exposes the king on e1.
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::new(7, 4)));
        board.place(Piece::new(PieceKind::Knight, Color::White, Square::new(6, 4)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::new(0, 4)));
        board.place(Piece::new(PieceKind::King, Color::Black, Square::new(0, 0)));

        let tactics = game_with(board, Color::White).detect_tactics();
        assert_eq!(tactics.pins.len(), 1);
        assert_eq!(tactics.pins[0].square, Square::new(6, 4));
        assert_eq!(tactics.pins[0].piece.kind, PieceKind::Knight);
    }

    #[test]
    fn knight_fork_detected() {
        // Black knight on d4 forks the white rooks on c2 and e2.
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::new(7, 7)));
        board.place(Piece::new(PieceKind::Rook, Color::White, Square::new(6, 2)));
        board.place(Piece::new(PieceKind::Rook, Color::White, Square::new(6, 4)));
        board.place(Piece::new(PieceKind::Knight, Color::Black, Square::new(4, 3)));
        board.place(Piece::new(PieceKind::King, Color::Black, Square::new(0, 0)));

        let tactics = game_with(board, Color::White).detect_tactics();
        assert_eq!(tactics.forks.len(), 1);
        let fork = &tactics.forks[0];
        assert_eq!(fork.square, Square::new(4, 3));
        assert_eq!(fork.targets.len(), 2);
    }

    #[test]
    fn skewer_requires_front_more_valuable() {
        // Black rook on a4 aims through the white queen on d4 at the rook on
        // g4: queen (9) in front of rook (5) is a skewer.
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::new(7, 7)));
        board.place(Piece::new(PieceKind::Queen, Color::White, Square::new(4, 3)));
        board.place(Piece::new(PieceKind::Rook, Color::White, Square::new(4, 6)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::new(4, 0)));
        board.place(Piece::new(PieceKind::King, Color::Black, Square::new(0, 0)));

        let tactics = game_with(board, Color::White).detect_tactics();
        assert_eq!(tactics.skewers.len(), 1);
        let skewer = &tactics.skewers[0];
        assert_eq!(skewer.front.1, Square::new(4, 3));
        assert_eq!(skewer.back.1, Square::new(4, 6));
    }

    #[test]
    fn no_skewer_when_back_piece_outvalues_front() {
        // Rook in front of queen is not a skewer.
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::new(7, 7)));
        board.place(Piece::new(PieceKind::Rook, Color::White, Square::new(4, 3)));
        board.place(Piece::new(PieceKind::Queen, Color::White, Square::new(4, 6)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::new(4, 0)));
        board.place(Piece::new(PieceKind::King, Color::Black, Square::new(0, 0)));

        let tactics = game_with(board, Color::White).detect_tactics();
        assert!(tactics.skewers.is_empty());
    }

    #[test]
    fn quiet_position_reports_nothing() {
        let game = Game::new(true, Color::Black, 3);
        let tactics = game.detect_tactics();
        assert!(tactics.pins.is_empty());
        assert!(tactics.forks.is_empty());
        assert!(tactics.skewers.is_empty());
    }
}

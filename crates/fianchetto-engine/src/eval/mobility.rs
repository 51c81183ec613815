//! Mobility: legal move count difference.

use fianchetto_core::{Color, Game};

/// Number of legal moves the engine has minus the opponent's count.
///
/// Deliberately coarse — every legal move counts the same — and the most
/// expensive evaluation term, since it runs full legal-move generation for
/// both sides.
pub fn mobility_balance(game: &Game, engine_color: Color) -> i32 {
    let ours = game.legal_moves(engine_color).len() as i32;
    let theirs = game.legal_moves(engine_color.opponent()).len() as i32;
    ours - theirs
}

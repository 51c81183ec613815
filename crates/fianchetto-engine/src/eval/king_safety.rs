//! King safety: a flat check penalty.

use fianchetto_core::{Color, Game};

/// `-30` when the engine is in check, `+20` when the opponent is; `0`
/// otherwise. Asymmetric on purpose — being in check now is worse than the
/// opponent being in check is good.
pub fn king_safety(game: &Game, engine_color: Color) -> i32 {
    if game.in_check(engine_color) {
        -30
    } else if game.in_check(engine_color.opponent()) {
        20
    } else {
        0
    }
}

//! Static evaluation.
//!
//! Scores are `f64` centipawn-ish values signed from the engine's
//! perspective: positive favours the engine, `±`[`MATE_SCORE`] marks a
//! decided game, `0.0` a stalemate.

pub mod king_safety;
pub mod material;
pub mod mobility;
pub mod pawns;
pub mod phase;
pub mod pst;

use fianchetto_core::{Color, Game};

/// Score of a won game; the mated side sees the negation.
pub const MATE_SCORE: f64 = 100_000.0;

const MATERIAL_WEIGHT: f64 = 1.0;
const PLACEMENT_WEIGHT: f64 = 0.1;
const MOBILITY_WEIGHT: f64 = 0.2;
const KING_SAFETY_WEIGHT: f64 = 0.3;
const PAWN_WEIGHT: f64 = 0.1;

/// Evaluate the position from `engine_color`'s point of view.
///
/// Checkmate and stalemate short-circuit; otherwise the score is the
/// weighted sum of material, piece placement, mobility, king safety, and
/// pawn count. Purely static — no look-ahead beyond the mate and mobility
/// probes.
pub fn evaluate(game: &Game, engine_color: Color) -> f64 {
    if game.in_checkmate(engine_color) {
        return -MATE_SCORE;
    }
    if game.in_checkmate(engine_color.opponent()) {
        return MATE_SCORE;
    }
    if game.in_stalemate(game.turn()) {
        return 0.0;
    }

    let material = material::material_balance(game.board(), engine_color) as f64;
    let placement = pst::placement_balance(game.board(), engine_color) as f64;
    let mobility = mobility::mobility_balance(game, engine_color) as f64;
    let king_safety = king_safety::king_safety(game, engine_color) as f64;
    let pawns = pawns::pawn_count_balance(game.board(), engine_color) as f64;

    material * MATERIAL_WEIGHT
        + placement * PLACEMENT_WEIGHT
        + mobility * MOBILITY_WEIGHT
        + king_safety * KING_SAFETY_WEIGHT
        + pawns * PAWN_WEIGHT
}

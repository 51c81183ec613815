//! Iterative-deepening search.

pub mod control;
pub mod heuristics;
pub mod minimax;
pub mod ordering;
pub mod see;
pub mod tt;

use std::collections::HashMap;
use std::time::Duration;

use fianchetto_core::{Color, Game, Move};
use tracing::debug;

use crate::eval::{evaluate, material, phase};
use control::SearchClock;
use heuristics::{HistoryTable, KillerTable};
use minimax::minimax;
use tt::TranspositionTable;

/// Soft wall-clock budget for one `choose_ai_move` call.
const TIME_BUDGET: Duration = Duration::from_secs(5);

/// Scores beyond this are treated as forced mates and stop the deepening
/// loop.
pub const MATE_THRESHOLD: f64 = 90_000.0;

/// Everything one top-level search accumulates. Built fresh on every
/// [`choose_ai_move`] call and dropped on return; nothing carries over
/// between moves.
pub struct SearchState {
    /// Nodes visited, minimax and quiescence together.
    pub nodes: u64,
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub history: HistoryTable,
    /// Best move seen per `(position key, remaining depth)`, feeding the
    /// principal-variation ordering band.
    pub pv: HashMap<(u64, i32), Move>,
    /// The side the scores are signed for.
    pub engine_color: Color,
}

impl SearchState {
    /// Fresh state for a search configured to `depth`. The killer table
    /// covers the deepest ply adaptive deepening can reach.
    pub fn new(engine_color: Color, depth: i32) -> SearchState {
        SearchState {
            nodes: 0,
            tt: TranspositionTable::new(),
            killers: KillerTable::new((depth.max(1) + 4) as usize),
            history: HistoryTable::new(),
            pv: HashMap::new(),
            engine_color,
        }
    }
}

/// Pick a move for the side to move, or `None` when there is none (the
/// caller reads mate or stalemate off the game).
///
/// Iteratively deepens from 1 to the game's configured depth, re-sorting
/// the root moves with each iteration's heuristics. Each iteration searches
/// to an adaptively adjusted depth; the loop stops early on an expired
/// clock or a forced mate.
pub fn choose_ai_move(game: &Game) -> Option<Move> {
    let engine_color = game.turn();
    let configured_depth = i32::from(game.ai_depth().max(1));
    let clock = SearchClock::new(TIME_BUDGET);

    let mut moves = game.legal_moves(engine_color);
    if moves.is_empty() {
        return None;
    }
    if moves.len() == 1 {
        return Some(moves[0]);
    }

    let mut state = SearchState::new(engine_color, configured_depth);
    let mut best_move = None;
    let mut best_score = f64::NEG_INFINITY;
    let mut previous_score = 0.0;

    for iteration in 1..=configured_depth {
        let depth = adaptive_depth(
            game,
            moves.len(),
            iteration,
            configured_depth,
            previous_score,
            engine_color,
        );
        state.pv.clear();
        ordering::sort_moves(game, &state, &mut moves, iteration, 0);

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut iteration_best = None;
        let mut iteration_score = f64::NEG_INFINITY;

        for &mv in &moves {
            let child = game.make_move(mv);
            let score = minimax(&child, depth - 1, alpha, beta, false, 0, &mut state);
            if score > iteration_score {
                iteration_score = score;
                iteration_best = Some(mv);
                state.history.bump(mv, iteration);
            }
            alpha = alpha.max(iteration_score);
        }

        if let Some(mv) = iteration_best {
            best_move = Some(mv);
            best_score = iteration_score;
            previous_score = best_score;
            debug!(
                iteration,
                depth,
                score = best_score,
                best = %mv,
                nodes = state.nodes,
                "iteration complete"
            );
        }

        if clock.expired() || best_score.abs() > MATE_THRESHOLD {
            break;
        }
    }

    debug!(
        nodes = state.nodes,
        tt_entries = state.tt.len(),
        elapsed_ms = clock.elapsed().as_millis() as u64,
        "search finished"
    );
    best_move
}

/// Choose a move and play it. `false` when no move exists or the chosen
/// move fails validation (which would be a bug, not an input error).
pub fn play_ai_move(game: &mut Game) -> bool {
    match choose_ai_move(game) {
        Some(mv) => game.play_move(mv.from, mv.to, mv.promotion),
        None => false,
    }
}

/// Scale the iteration's base depth by position complexity.
///
/// Few legal moves, being in check, an endgame, many available captures, an
/// unstable score, and lopsided material each deepen the search a little;
/// the product is clamped to one below through three above the configured
/// depth.
fn adaptive_depth(
    game: &Game,
    legal_count: usize,
    base_depth: i32,
    configured_depth: i32,
    previous_score: f64,
    engine_color: Color,
) -> i32 {
    let move_count_factor = (10.0 / legal_count.max(1) as f64).clamp(0.5, 1.5);
    let check_factor = if game.in_check(engine_color) { 1.3 } else { 1.0 };
    let endgame_factor = if phase::is_endgame(game.board()) {
        1.3
    } else {
        1.0
    };
    let tactical_factor = if game.capture_moves(engine_color).len() > 3 {
        1.2
    } else {
        1.0
    };
    let current_score = evaluate(game, engine_color);
    let stability_factor = if (current_score - previous_score).abs() > 200.0 {
        1.25
    } else {
        1.0
    };
    let imbalance = f64::from(material::material_imbalance(game.board()));
    let material_factor = 1.0 + (imbalance / 1000.0).min(0.3);

    let target = f64::from(base_depth)
        * move_count_factor
        * check_factor
        * endgame_factor
        * tactical_factor
        * stability_factor
        * material_factor;

    let floor = (configured_depth - 1).max(1);
    let ceiling = configured_depth + 3;
    (target.round() as i32).clamp(floor, ceiling)
}

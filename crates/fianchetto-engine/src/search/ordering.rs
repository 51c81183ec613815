//! Move ordering.
//!
//! Good ordering is what makes alpha-beta prune; scores here only rank
//! moves, they say nothing about the position itself.

use fianchetto_core::{Game, Move};

use crate::eval::material;
use crate::search::see::is_favorable_capture;
use crate::search::tt::position_key;
use crate::search::SearchState;

/// The four central destination squares (d4, d5, e4, e5).
const CENTRAL_SQUARES: [(u8, u8); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

/// History credit is capped so a well-travelled quiet move never outranks
/// tactical bands.
const HISTORY_CAP: i32 = 8_000;

/// Sort `moves` best-first for the node at `(depth, ply)`.
pub(crate) fn sort_moves(
    game: &Game,
    state: &SearchState,
    moves: &mut [Move],
    depth: i32,
    ply: usize,
) {
    let key = position_key(game.board());
    moves.sort_by_cached_key(|&mv| -order_score(game, state, key, mv, depth, ply));
}

/// Stack the ordering bands for one move: principal variation, MVV-LVA
/// captures with an exchange bonus, killers, history, promotions, checks,
/// and small positional nudges.
fn order_score(
    game: &Game,
    state: &SearchState,
    key: u64,
    mv: Move,
    depth: i32,
    ply: usize,
) -> i32 {
    let board = game.board();
    let Some(mover) = board.piece_at(mv.from) else {
        return 0;
    };
    let mut score = 0;

    if state.pv.get(&(key, depth)) == Some(&mv) {
        score += 100_000;
    }

    if let Some(victim) = board.piece_at(mv.to) {
        score += 10_000 + 10 * material::value(victim.kind) - material::value(mover.kind);
        if is_favorable_capture(board, mv.from, mv.to) {
            score += 500;
        }
    }

    if state.killers.is_killer(ply, mv) {
        score += 9_000;
    }

    score += state.history.score(mv).min(HISTORY_CAP);

    if let Some(choice) = mv.promotion {
        score += 8_500 + material::value(choice.piece_kind());
    }

    if gives_check(game, mv) {
        score += 7_000;
    }

    if CENTRAL_SQUARES.contains(&(mv.to.row(), mv.to.col())) {
        score += 100;
    }
    if game.move_count() < 10 && mover.kind.is_minor() && !mover.has_moved {
        score += 500;
    }

    score
}

/// Sort quiescence candidates by tactical merit alone.
pub(crate) fn sort_tactical(game: &Game, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| -tactical_score(game, mv));
}

/// MVV-LVA plus exchange, promotion, and check bonuses.
fn tactical_score(game: &Game, mv: Move) -> i32 {
    let board = game.board();
    let Some(mover) = board.piece_at(mv.from) else {
        return 0;
    };
    let mut score = 0;

    if let Some(victim) = board.piece_at(mv.to) {
        score += 10 * material::value(victim.kind) - material::value(mover.kind);
        if is_favorable_capture(board, mv.from, mv.to) {
            score += 1_000;
        }
    }

    if let Some(choice) = mv.promotion {
        score += 5_000 + material::value(choice.piece_kind());
    }

    if gives_check(game, mv) {
        score += 3_000;
    }

    score
}

/// Does `mv` leave the opponent's king attacked? Played on a scratch board.
fn gives_check(game: &Game, mv: Move) -> bool {
    let board = game.board();
    let Some(mover) = board.piece_at(mv.from) else {
        return false;
    };
    let mut after = board.clone();
    after.move_piece(mv.from, mv.to, mv.promotion);
    after.king_in_check(mover.color.opponent())
}

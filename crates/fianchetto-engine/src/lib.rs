//! Search and evaluation for fianchetto.

pub mod eval;
pub mod search;

pub use eval::{evaluate, MATE_SCORE};
pub use search::{choose_ai_move, play_ai_move, SearchState, MATE_THRESHOLD};

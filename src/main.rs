use anyhow::Result;
use tracing::info;

use fianchetto_core::{Color, Game};
use fianchetto_engine::choose_ai_move;

/// Self-play demo: the engine plays both sides from the starting position
/// until the game is decided or the move cap runs out.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("fianchetto starting");

    let mut game = Game::new(true, Color::Black, 3);
    for ply in 1..=80 {
        let to_move = game.turn();
        if game.in_checkmate(to_move) {
            info!(loser = %to_move, "checkmate");
            break;
        }
        if game.in_stalemate(to_move) {
            info!("stalemate");
            break;
        }

        let Some(mv) = choose_ai_move(&game) else {
            break;
        };
        game.play_move(mv.from, mv.to, mv.promotion);
        info!(ply, side = %to_move, played = %mv, "move");

        let tactics = game.detect_tactics();
        if !tactics.forks.is_empty() || !tactics.skewers.is_empty() {
            info!(
                forks = tactics.forks.len(),
                skewers = tactics.skewers.len(),
                "tactical motifs on the board"
            );
        }
    }

    info!("final position:\n{}", game.board());
    Ok(())
}

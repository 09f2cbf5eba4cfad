use crate::SessionRng;
use crate::debug_log;
use super::board::Board;
use super::error::EngineError;
use super::evaluator::best_move;
use super::types::Player;

/// Picks the bot's cell: with probability `skill` the evaluator's best move,
/// otherwise a uniformly random empty cell. One draw per call.
pub fn choose_bot_move(
    board: &Board,
    player: Player,
    skill: f64,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    if !(0.0..=1.0).contains(&skill) {
        return Err(EngineError::InvalidBotSkill(skill));
    }

    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    if rng.chance(skill) {
        let cell = best_move(board, player)?;
        debug_log!("Bot {} plays best move {}", player, cell);
        Ok(cell)
    } else {
        let cell = rng.pick(&available_moves).ok_or(EngineError::NoLegalMoves)?;
        debug_log!("Bot {} plays random move {}", player, cell);
        Ok(cell)
    }
}

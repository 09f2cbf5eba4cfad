use tictactoe_engine::debug_log;
use tictactoe_engine::tictactoe::{
    Board, EngineError, Player, best_move, distance_to_win, has_fork, is_winner, scored_moves,
};

use crate::AnalyzeArgs;

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let board: Board = args.board.parse()?;
    let player = Player::from(args.player);
    debug_log!("Analyzing board {:?} for {}", args.board, player);
    print!("{}", render_analysis(&board, player)?);
    Ok(())
}

pub fn render_analysis(board: &Board, player: Player) -> Result<String, EngineError> {
    let mut report = board.to_string();

    for side in [Player::X, Player::O] {
        if is_winner(board, side) {
            report.push_str(&format!("{} has already won\n", side));
            return Ok(report);
        }
    }

    let opponent = player.opponent();
    report.push_str(&format!(
        "Distance to win: {} {}, {} {}\n",
        player,
        distance_to_win(board, player),
        opponent,
        distance_to_win(board, opponent)
    ));
    if has_fork(board, opponent) {
        report.push_str(&format!("{} has a fork\n", opponent));
    }

    for (cell, score) in scored_moves(board, player) {
        report.push_str(&format!("  {}: {}\n", cell, score));
    }

    let best = best_move(board, player)?;
    report.push_str(&format!("Best move for {}: {}\n", player, best));
    Ok(report)
}

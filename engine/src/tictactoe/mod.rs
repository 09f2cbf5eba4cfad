mod board;
mod bot_controller;
mod error;
mod evaluator;
mod game_state;
mod lookahead;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, BoardParseError};
pub use bot_controller::choose_bot_move;
pub use error::EngineError;
pub use evaluator::{MoveScore, best_move, score_move, scored_moves};
pub use game_state::GameState;
pub use lookahead::distance_to_win;
pub use types::{Cell, GameMode, GameStatus, Player};
pub use win_detector::{
    WINNING_LINES, WinningLine, has_fork, is_winner, winning_cells, winning_line,
};

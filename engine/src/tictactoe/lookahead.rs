use super::board::Board;
use super::types::Player;
use super::win_detector::is_winner;

/// Distance reported when no win was found within the horizon.
pub const FAR: u8 = 3;

// The search looks at the player's next mark and, from depth 0 only, the
// mark after that. It never goes deeper and never considers replies.
const MAX_DEPTH: u8 = 1;

/// How many of its own marks `player` needs to complete a line: 1 if some
/// empty cell wins now, 2 if some cell leaves a board with an immediate win,
/// otherwise 3.
pub fn distance_to_win(board: &Board, player: Player) -> u8 {
    distance_at_depth(board, player, 0)
}

fn distance_at_depth(board: &Board, player: Player, depth: u8) -> u8 {
    let mut distance = FAR;
    for cell in board.available_moves() {
        let next = board.with_mark(cell, player);
        if is_winner(&next, player) {
            return 1;
        }
        if depth < MAX_DEPTH && distance_at_depth(&next, player, depth + 1) == 1 {
            distance = 2;
        }
    }
    distance
}

use super::board::Board;
use super::error::EngineError;
use super::lookahead::distance_to_win;
use super::types::Player;
use super::win_detector::{has_fork, is_winner};

/// Score of a single candidate move, ordered from worst to best.
///
/// The derived ordering follows declaration order, so `Losing` sorts below
/// every positional score and `Win` above everything else. `value()` gives
/// the numeric form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveScore {
    /// The opponent can complete a line on its next move.
    Losing,
    /// `4 - distance_to_win` after the move, so 1..=3.
    Positional(u8),
    Block,
    Fork,
    Win,
}

impl MoveScore {
    pub const FORK_VALUE: i32 = 20;
    pub const BLOCK_VALUE: i32 = 10;

    pub fn value(self) -> i32 {
        match self {
            MoveScore::Losing => i32::MIN,
            MoveScore::Positional(points) => i32::from(points),
            MoveScore::Block => Self::BLOCK_VALUE,
            MoveScore::Fork => Self::FORK_VALUE,
            MoveScore::Win => i32::MAX,
        }
    }
}

impl std::fmt::Display for MoveScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveScore::Losing => write!(f, "-inf (losing)"),
            MoveScore::Positional(points) => write!(f, "{} (positional)", points),
            MoveScore::Block => write!(f, "{} (block)", Self::BLOCK_VALUE),
            MoveScore::Fork => write!(f, "{} (fork)", Self::FORK_VALUE),
            MoveScore::Win => write!(f, "+inf (win)"),
        }
    }
}

pub fn score_move(board: &Board, player: Player, cell: usize) -> Result<MoveScore, EngineError> {
    let next = board.place(cell, player)?;
    Ok(score_placed(board, &next, player, cell))
}

// `next` is `board` with `player` already at `cell`.
fn score_placed(board: &Board, next: &Board, player: Player, cell: usize) -> MoveScore {
    let opponent = player.opponent();

    if is_winner(next, player) {
        return MoveScore::Win;
    }
    if has_fork(next, player) {
        return MoveScore::Fork;
    }
    if is_winner(&board.with_mark(cell, opponent), opponent) {
        return MoveScore::Block;
    }
    if distance_to_win(next, opponent) == 1 {
        return MoveScore::Losing;
    }
    MoveScore::Positional(4 - distance_to_win(next, player))
}

/// Every legal move with its score, in ascending cell order.
pub fn scored_moves(board: &Board, player: Player) -> Vec<(usize, MoveScore)> {
    board
        .available_moves()
        .into_iter()
        .map(|cell| {
            let next = board.with_mark(cell, player);
            (cell, score_placed(board, &next, player, cell))
        })
        .collect()
}

/// Highest-scoring move. Ties go to the lowest cell index.
pub fn best_move(board: &Board, player: Player) -> Result<usize, EngineError> {
    let mut best: Option<(usize, MoveScore)> = None;
    for (cell, score) in scored_moves(board, player) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((cell, score)),
        }
    }
    best.map(|(cell, _)| cell).ok_or(EngineError::NoLegalMoves)
}

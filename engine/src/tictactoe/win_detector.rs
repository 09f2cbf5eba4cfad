use super::board::Board;
use super::types::{Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub cells: [usize; 3],
}

impl WinningLine {
    const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { cells: [a, b, c] }
    }

    pub fn start(&self) -> usize {
        self.cells[0]
    }

    pub fn end(&self) -> usize {
        self.cells[2]
    }

    fn is_owned_by(&self, board: &Board, player: Player) -> bool {
        self.cells
            .iter()
            .all(|&idx| board.get(idx).and_then(Cell::owner) == Some(player))
    }
}

pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new(0, 1, 2),
    WinningLine::new(3, 4, 5),
    WinningLine::new(6, 7, 8),
    WinningLine::new(0, 3, 6),
    WinningLine::new(1, 4, 7),
    WinningLine::new(2, 5, 8),
    WinningLine::new(0, 4, 8),
    WinningLine::new(2, 4, 6),
];

pub fn is_winner(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

pub fn winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .find(|line| line.is_owned_by(board, player))
        .copied()
}

/// Empty cells where `player` would complete a line right away.
pub fn winning_cells(board: &Board, player: Player) -> Vec<usize> {
    board
        .available_moves()
        .into_iter()
        .filter(|&cell| is_winner(&board.with_mark(cell, player), player))
        .collect()
}

/// True when `player` has two or more immediate winning cells, so a single
/// opposing move cannot cover them all.
pub fn has_fork(board: &Board, player: Player) -> bool {
    winning_cells(board, player).len() > 1
}

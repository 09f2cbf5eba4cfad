use std::str::FromStr;

use super::error::EngineError;
use super::types::{Cell, Player};

pub const BOARD_SIZE: usize = 9;
const BOARD_WIDTH: usize = 3;

/// 3x3 grid stored row-major: cells 0-2 are the top row, 6-8 the bottom row.
///
/// `Board` is a plain value. Placing a mark returns a new board and leaves
/// this one untouched, which is what the evaluator relies on when it
/// tries hypothetical moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, cell: usize) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    /// Checked placement: fails if `cell` is out of range or already owned.
    pub fn place(&self, cell: usize, player: Player) -> Result<Board, EngineError> {
        match self.get(cell) {
            None => Err(EngineError::InvalidMove {
                cell,
                reason: "cell is out of range",
            }),
            Some(Cell::Owner(_)) => Err(EngineError::InvalidMove {
                cell,
                reason: "cell is already marked",
            }),
            Some(Cell::Empty) => Ok(self.with_mark(cell, player)),
        }
    }

    // Callers pass indices taken from `available_moves`.
    pub(crate) fn with_mark(&self, cell: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[cell] = Cell::Owner(player);
        next
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(BOARD_WIDTH) {
            writeln!(f, "{} {} {}", row[0].symbol(), row[1].symbol(), row[2].symbol())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    WrongLength(usize),
    UnknownSymbol(char),
}

impl std::fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardParseError::WrongLength(found) => {
                write!(f, "Board must have {} cells, got {}", BOARD_SIZE, found)
            }
            BoardParseError::UnknownSymbol(c) => write!(f, "Unknown board symbol '{}'", c),
        }
    }
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts `X`, `O` and any of `* _ . -` for an empty cell. Whitespace
    /// is ignored so the rendered form parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Cell::Owner(Player::X)),
                'O' => Ok(Cell::Owner(Player::O)),
                '*' | '_' | '.' | '-' => Ok(Cell::Empty),
                _ => Err(BoardParseError::UnknownSymbol(c)),
            })
            .collect::<Result<Vec<Cell>, _>>()?;

        let cells: [Cell; BOARD_SIZE] = cells
            .try_into()
            .map_err(|cells: Vec<Cell>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Board::from_cells(cells))
    }
}

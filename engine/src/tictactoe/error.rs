#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The cell is out of range or already marked. State is left untouched.
    InvalidMove { cell: usize, reason: &'static str },
    /// Move selection was asked for on a full board. The state machine never
    /// does this; seeing it means a caller broke that contract.
    NoLegalMoves,
    InvalidBotSkill(f64),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidMove { cell, reason } => {
                write!(f, "Invalid move at cell {}: {}", cell, reason)
            }
            EngineError::NoLegalMoves => write!(f, "No legal moves left on the board"),
            EngineError::InvalidBotSkill(skill) => {
                write!(f, "Bot skill must be between 0.0 and 1.0, got {}", skill)
            }
        }
    }
}

impl std::error::Error for EngineError {}

use serde::{Deserialize, Serialize};

use crate::tictactoe::GameMode;
use super::Validate;

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub bot_skill: f64,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayerVsBot,
            bot_skill: 1.0,
            seed: None,
            verbose: false,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.bot_skill) {
            return Err(format!(
                "Bot skill must be between 0.0 and 1.0, got {}",
                self.bot_skill
            ));
        }
        Ok(())
    }
}

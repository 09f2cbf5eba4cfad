use std::io::{self, BufRead, Write};

use tictactoe_engine::config::{ConfigError, ConfigManager, GameConfig, Validate};
use tictactoe_engine::tictactoe::{GameMode, GameState, GameStatus, winning_line};
use tictactoe_engine::{SessionRng, log, logger};

use crate::PlayArgs;

pub fn run(
    args: &PlayArgs,
    log_prefix: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = ConfigManager::from_yaml_file(&args.config);
    let config = apply_overrides(manager.get_config()?, args);
    config.validate().map_err(ConfigError::ValidationError)?;

    logger::init_logger(log_prefix, verbose || config.verbose);

    if args.save_config {
        manager.set_config(&config)?;
        log!("Saved settings to {}", args.config.display());
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut state = GameState::new(config.mode, config.bot_skill, rng)?;
    log!(
        "Starting {:?} game, bot skill {}, seed {}",
        state.mode(),
        state.bot_skill(),
        state.seed()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_game(&mut state, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn apply_overrides(mut config: GameConfig, args: &PlayArgs) -> GameConfig {
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(bot_skill) = args.bot_skill {
        config.bot_skill = bot_skill;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config
}

/// Drives `state` from line-based input until the game ends or the player
/// quits. Returns `None` on quit or end of input.
pub fn play_game<R: BufRead, W: Write>(
    state: &mut GameState,
    mut input: R,
    output: &mut W,
) -> io::Result<Option<GameStatus>> {
    if let Some(cell) = state.last_move() {
        writeln!(output, "Bot opens at {}", cell)?;
    }
    write!(output, "{}", state.board())?;

    while !state.is_ended() {
        write!(output, "{} to move (0-8, q to quit): ", state.current_player())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let Ok(cell) = line.parse::<usize>() else {
            writeln!(output, "Enter a cell index between 0 and 8")?;
            continue;
        };

        match state.play_round(cell) {
            Ok(true) => {
                let bot_cell = state.last_move().filter(|&last| last != cell);
                if let (GameMode::SinglePlayerVsBot, Some(bot_cell)) = (state.mode(), bot_cell) {
                    writeln!(output, "Bot plays {}", bot_cell)?;
                }
                write!(output, "{}", state.board())?;
            }
            Ok(false) => break,
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    let status = state.status();
    match status {
        GameStatus::Won(player) => {
            match winning_line(state.board(), player) {
                Some(line) => writeln!(
                    output,
                    "{} wins ({}-{}-{})",
                    player,
                    line.start(),
                    line.cells[1],
                    line.end()
                )?,
                None => writeln!(output, "{} wins", player)?,
            }
        }
        GameStatus::Draw => writeln!(output, "Draw")?,
        GameStatus::InProgress => {}
    }
    Ok(Some(status))
}

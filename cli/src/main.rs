mod analyze;
mod play;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_engine::config::DEFAULT_CONFIG_PATH;
use tictactoe_engine::tictactoe::{GameMode, Player};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or a heuristic bot")]
struct Args {
    #[arg(long, global = true)]
    use_log_prefix: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),
    /// Score every legal move on a board
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args)]
pub struct PlayArgs {
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Probability in [0, 1] that the bot plays its best move
    #[arg(long)]
    bot_skill: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Nine cells row by row: X, O and * (or _ . -) for empty
    #[arg(long)]
    board: String,

    #[arg(long, value_enum)]
    player: PlayerArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    VsBot,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::VsBot => GameMode::SinglePlayerVsBot,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PlayerArg {
    X,
    O,
}

impl From<PlayerArg> for Player {
    fn from(player: PlayerArg) -> Self {
        match player {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

fn log_prefix(use_log_prefix: bool, name: &str) -> Option<String> {
    use_log_prefix.then(|| name.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Command::Play(play_args) => {
            let prefix = log_prefix(args.use_log_prefix, "Play");
            play::run(&play_args, prefix, args.verbose)
        }
        Command::Analyze(analyze_args) => {
            tictactoe_engine::logger::init_logger(
                log_prefix(args.use_log_prefix, "Analyze"),
                args.verbose,
            );
            analyze::run(&analyze_args)
        }
    }
}

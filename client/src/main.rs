mod command;
mod config;
mod offline;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, Opponent, TicTacToeSession};
use common::{log, logger};

use config::get_config_manager;
use offline::{RunnerSettings, run_simulation, run_tictactoe_game};

#[derive(Parser)]
#[command(
    name = "tictactoe_client",
    version,
    about = "Tic-tac-toe against a friend or the computer"
)]
struct Args {
    /// Config file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Log every move and bot decision
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively in the terminal
    Play(PlayArgs),
    /// Run computer games and print aggregate results
    Simulate(SimulateArgs),
}

#[derive(clap::Args, Default)]
struct PlayArgs {
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Percent of computer turns that use the minimax move
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    difficulty: Option<u8>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    bot_delay_ms: Option<u64>,
}

#[derive(clap::Args)]
struct SimulateArgs {
    #[arg(long, default_value_t = 100)]
    games: u32,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    difficulty: Option<u8>,

    #[arg(long, value_enum, default_value_t = OpponentArg::Random)]
    opponent: OpponentArg,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Pvc => GameMode::PlayerVsComputer,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OpponentArg {
    Random,
    Perfect,
}

impl From<OpponentArg> for Opponent {
    fn from(opponent: OpponentArg) -> Self {
        match opponent {
            OpponentArg::Random => Opponent::Random,
            OpponentArg::Perfect => Opponent::Perfect,
        }
    }
}

fn session_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config);
    let config = config_manager.get_config()?;
    log!("Using config {}", config_manager.location());

    match args.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(play) => {
            let mode = play
                .mode
                .map(GameMode::from)
                .or(config.last_mode)
                .unwrap_or(GameMode::PlayerVsComputer);
            let lobby = config
                .tictactoe
                .with_overrides(play.difficulty, play.bot_delay_ms)?;
            let difficulty = lobby.difficulty()?;
            let settings = RunnerSettings {
                bot_delay: Duration::from_millis(lobby.bot_delay_ms),
            };

            let mut session = TicTacToeSession::new(mode, difficulty, session_rng(play.seed));
            run_tictactoe_game(&mut session, &settings).await?;

            config_manager.update(|config| {
                config.last_mode = Some(session.mode());
                config.tictactoe.difficulty = session.difficulty().percent();
            })?;
        }
        Command::Simulate(simulate) => {
            let difficulty = match simulate.difficulty {
                Some(percent) => Difficulty::new(percent)?,
                None => config.tictactoe.difficulty()?,
            };
            run_simulation(
                difficulty,
                simulate.opponent.into(),
                simulate.games,
                session_rng(simulate.seed),
            )?;
        }
    }

    Ok(())
}

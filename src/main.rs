//! Filetto: a generalized connect-five for humans and simple AIs.
//!
//! ## Usage
//!
//! - `filetto` - Set up and play a game interactively
//! - `filetto play --size 12 --human Ada --ai 2` - Skip the setup prompts
//! - `filetto demo` - Watch AI players play each other
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use filetto::config::GameConfig;
use filetto::constants::DEFAULT_BOARD_SIZE;
use filetto::session::Session;

/// Filetto: a generalized connect-five on an NxN board
#[derive(Parser)]
#[command(name = "filetto")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the console
    Play(PlayArgs),
    /// Watch AI players play each other
    Demo(DemoArgs),
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Board size (NxN)
    #[arg(long)]
    size: Option<usize>,
    /// Name of a human player, repeat for more players
    #[arg(long = "human", value_name = "NAME")]
    humans: Vec<String>,
    /// Number of AI players
    #[arg(long)]
    ai: Option<usize>,
    /// Seed for AI moves
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct DemoArgs {
    /// Board size (NxN)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Number of AI players
    #[arg(long, default_value_t = 2)]
    ai: usize,
    /// Seed for AI moves
    #[arg(long)]
    seed: Option<u64>,
}

impl From<PlayArgs> for GameConfig {
    fn from(args: PlayArgs) -> Self {
        // Naming any player fixes the roster; otherwise it is asked for.
        let fixed = !args.humans.is_empty() || args.ai.is_some();
        GameConfig {
            board_size: args.size,
            humans: fixed.then_some(args.humans),
            ai_players: args.ai,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.command {
        Some(Commands::Play(args)) => GameConfig::from(args),
        Some(Commands::Demo(args)) => GameConfig::ai_only(args.size, args.ai, args.seed),
        None => GameConfig::from(PlayArgs::default()),
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run().context("game session failed")?;
    Ok(())
}

//! Who Says 20 First CLI
//!
//! Commands:
//! - play: Play a single game (interactive if a seat is manual)
//! - match: Play many unattended games and report results
//! - analyze: Show the AI's choice and rewards for every score

mod analyze_cmd;
mod match_cmd;
mod play_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saytwenty")]
#[command(about = "Who Says 20 First, with a dynamic-programming opponent")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a series of games between two player kinds
    Match(match_cmd::MatchArgs),
    /// Print the best move and candidate rewards for every score
    Analyze(analyze_cmd::AnalyzeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args),
        Commands::Analyze(args) => analyze_cmd::run(args),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

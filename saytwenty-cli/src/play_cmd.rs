//! Play command - one game between two actors

use anyhow::{Context, Result};
use clap::Args;

use saytwenty_core::{GameRunner, PlayerKind};

#[derive(Args)]
pub struct PlayArgs {
    /// Actor for player 1 (manual, dynamic, random)
    #[arg(long, default_value = "manual")]
    pub player_one: PlayerKind,

    /// Actor for player 2 (manual, dynamic, random)
    #[arg(long, default_value = "dynamic")]
    pub player_two: PlayerKind,

    /// Seed for random actors
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    tracing::info!("Starting game: {} vs {}", args.player_one, args.player_two);

    let mut runner = GameRunner::new(
        args.player_one.build(args.seed),
        args.player_two.build(args.seed.wrapping_add(1)),
    );
    let outcome = runner.play().context("Game aborted")?;

    println!();
    println!("Game Over!");
    println!("{} Wins! ({} turns)", outcome.winner, outcome.turns);

    Ok(())
}

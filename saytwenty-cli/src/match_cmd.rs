//! Match command - play many games between two player kinds
//!
//! - run(): validate, play, report
//! - report_results(): text or JSON output

use anyhow::{bail, Context, Result};
use clap::Args;

use saytwenty_core::{play_match, MatchConfig, MatchSummary, PlayerKind};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Actor for player 1 (dynamic, random)
    #[arg(long, default_value = "dynamic")]
    pub player_one: PlayerKind,

    /// Actor for player 2 (dynamic, random)
    #[arg(long, default_value = "random")]
    pub player_two: PlayerKind,

    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Base seed for random actors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Alternate seats every game
    #[arg(long)]
    pub swap_seats: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl MatchArgs {
    fn to_config(&self) -> MatchConfig {
        let config = MatchConfig::new(self.player_one, self.player_two)
            .with_games(self.games)
            .with_swap_seats(self.swap_seats);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run match command
pub fn run(args: MatchArgs) -> Result<()> {
    if args.player_one == PlayerKind::Manual || args.player_two == PlayerKind::Manual {
        bail!("Matches run unattended; use `play` for manual players");
    }

    let config = args.to_config();
    tracing::info!(
        "Starting match: {} vs {} ({} games{})",
        config.player_one,
        config.player_two,
        config.games,
        if config.swap_seats { ", swapping seats" } else { "" }
    );

    let summary = play_match(&config).context("Match aborted")?;
    report_results(&summary, &config, args.json)
}

fn report_results(summary: &MatchSummary, config: &MatchConfig, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(summary).context("Failed to serialize results")?;
        println!("{}", out);
    } else {
        print_text_results(summary, config);
    }
    Ok(())
}

// ============================================================================
// FORMATTING
// ============================================================================

fn print_text_results(summary: &MatchSummary, config: &MatchConfig) {
    println!();
    println!("=== Match Results ===");
    println!("Games played: {}", summary.games);
    println!(
        "Player 1 wins: {} ({:.1}%)",
        summary.player_one_wins,
        percent(summary.player_one_wins, summary.games)
    );
    println!(
        "Player 2 wins: {} ({:.1}%)",
        summary.player_two_wins,
        percent(summary.player_two_wins, summary.games)
    );
    println!(
        "{} (listed first) wins: {}, {} (listed second) wins: {}",
        config.player_one, summary.first_kind_wins, config.player_two, summary.second_kind_wins
    );
    println!("Average turns: {:.1}", summary.avg_turns);
}

fn percent(count: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32 * 100.0
    }
}

//! Analyze command - tabulate the AI's decisions

use anyhow::Result;
use clap::Args;

use saytwenty_core::{Advancement, DynamicAI, SearchStats, Turn, TARGET};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Use one AI for every row so later rows reuse earlier cache entries
    #[arg(long)]
    pub shared_cache: bool,
}

/// One line of the table
#[derive(Clone, Copy, Debug)]
struct Row {
    score: u8,
    add_one: f32,
    add_two: f32,
    best: Advancement,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let (rows, stats) = analyze(args.shared_cache);

    println!("{:>5}  {:>12}  {:>12}  {:>4}", "score", "add 1", "add 2", "best");
    for row in &rows {
        println!(
            "{:>5}  {:>12.5e}  {:>12.5e}  {:>4}",
            row.score, row.add_one, row.add_two, row.best
        );
    }

    tracing::debug!(
        "Search work ({} cache): {:?}",
        if args.shared_cache { "shared" } else { "per-row" },
        stats
    );
    Ok(())
}

/// Evaluate every score below the target.
///
/// The returned stats cover every evaluator that was queried: the single
/// shared one, or the sum over the fresh per-row ones.
fn analyze(shared_cache: bool) -> (Vec<Row>, SearchStats) {
    let mut shared = shared_cache.then(DynamicAI::default);
    let mut per_row = SearchStats::default();
    let mut rows = Vec::with_capacity(TARGET as usize);

    for score in 0..TARGET {
        let mut fresh;
        let ai = match shared.as_mut() {
            Some(ai) => ai,
            None => {
                fresh = DynamicAI::default();
                &mut fresh
            }
        };

        let add_one = ai.reward(score + Advancement::One.value(), 0, Turn::Theirs);
        let add_two = ai.reward(score + Advancement::Two.value(), 0, Turn::Theirs);
        let best = ai.choose_move(score);
        rows.push(Row { score, add_one, add_two, best });

        if !shared_cache {
            let stats = ai.stats();
            per_row.nodes += stats.nodes;
            per_row.terminals += stats.terminals;
            per_row.cache_hits += stats.cache_hits;
            per_row.expansions += stats.expansions;
        }
    }

    let stats = shared.map(|ai| ai.stats()).unwrap_or(per_row);
    (rows, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_reflect_evaluators_used() {
        let (rows, fresh) = analyze(false);
        assert_eq!(rows.len(), TARGET as usize);
        assert!(fresh.expansions > 0);

        let (rows, shared) = analyze(true);
        assert_eq!(rows.len(), TARGET as usize);
        assert!(shared.expansions > 0);
        // A warm cache never expands a key twice
        assert!(shared.expansions <= 2 * TARGET as u64);
        assert!(shared.expansions < fresh.expansions);
    }

    #[test]
    fn test_one_below_target_row() {
        for shared_cache in [false, true] {
            let (rows, _) = analyze(shared_cache);
            let last = rows[TARGET as usize - 1];
            assert_eq!(last.score, TARGET - 1);
            assert_eq!(last.best, Advancement::One);
            assert_eq!(last.add_one, 10.0);
            assert_eq!(last.add_two, -100.0);
        }
    }
}

//! Dynamic-programming minimax AI
//!
//! Scores every reachable `(score, turn)` state by exhaustive search, assuming
//! the opponent also plays optimally, and memoizes the result in a
//! [`RewardCache`]. The state space is tiny (at most `2 * (TARGET + 1)` keys),
//! so no pruning is needed once the cache is warm.

use crate::cache::{RewardCache, Turn};
use crate::game::{Advancement, TARGET};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Reward when the opponent faces the target score (we said it)
pub const WIN_REWARD: f32 = 10.0;

/// Reward when we face the target score (they said it)
pub const LOSS_REWARD: f32 = -10.0;

/// Reward for any state past the target
pub const OVERSHOOT_PENALTY: f32 = -100.0;

/// Per-depth discount base; gamma = DISCOUNT^depth
pub const DISCOUNT: f32 = 0.5;

// ============================================================================
// SEARCH STATISTICS
// ============================================================================

/// Counters for the work done by [`DynamicAI::reward`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `reward`
    pub nodes: u64,
    /// Nodes answered by the terminal table
    pub terminals: u64,
    /// Nodes answered by the cache
    pub cache_hits: u64,
    /// Nodes that recursed into both successors
    pub expansions: u64,
}

// ============================================================================
// DYNAMIC PROGRAMMING AI
// ============================================================================

/// Minimax evaluator with a per-agent reward cache
pub struct DynamicAI {
    cache: RewardCache,
    stats: SearchStats,
}

impl Default for DynamicAI {
    fn default() -> Self {
        Self::new(RewardCache::new())
    }
}

impl DynamicAI {
    pub fn new(cache: RewardCache) -> Self {
        Self {
            cache,
            stats: SearchStats::default(),
        }
    }

    /// Classify a state. Returns its reward if it is terminal.
    pub fn evaluate_terminal(score: u8, turn: Turn) -> Option<f32> {
        if score > TARGET {
            Some(OVERSHOOT_PENALTY)
        } else if score == TARGET {
            match turn {
                Turn::Mine => Some(LOSS_REWARD),
                Turn::Theirs => Some(WIN_REWARD),
            }
        } else {
            None
        }
    }

    /// Discounted reward of being in `(score, turn)` after `depth` plies.
    ///
    /// Terminal leaves are returned undiscounted. Everything else is
    /// `DISCOUNT^depth` times the max (our turn) or min (their turn) of the
    /// two successors, and is cached under `(score, turn)`.
    pub fn reward(&mut self, score: u8, depth: u32, turn: Turn) -> f32 {
        self.stats.nodes += 1;

        if let Some(terminal) = Self::evaluate_terminal(score, turn) {
            self.stats.terminals += 1;
            return terminal;
        }

        if let Some(cached) = self.cache.get(score, turn) {
            self.stats.cache_hits += 1;
            return cached;
        }

        self.stats.expansions += 1;
        let gamma = DISCOUNT.powi(depth as i32);

        let one = self.reward(score.saturating_add(1), depth + 1, turn.flip());
        let two = self.reward(score.saturating_add(2), depth + 1, turn.flip());
        let chosen = match turn {
            Turn::Mine => one.max(two),
            Turn::Theirs => one.min(two),
        };

        let reward = gamma * chosen;

        if let Err(e) = self.cache.put(score, turn, reward) {
            tracing::warn!("Reward cache rejected store: {}", e);
            debug_assert!(false, "reward cache too small: {}", e);
        }

        tracing::trace!(
            "reward score={} depth={} turn={:?} gamma={:.5e} chosen={:.5e} reward={:.5e}",
            score,
            depth,
            turn,
            gamma,
            chosen,
            reward
        );

        reward
    }

    /// Best advancement from `score`, with us to move.
    ///
    /// Ties keep [`Advancement::One`]; Two must be strictly better.
    pub fn choose_move(&mut self, score: u8) -> Advancement {
        let mut best = Advancement::One;
        let mut best_reward = f32::NEG_INFINITY;

        for advancement in Advancement::ALL {
            let reward = self.reward(score.saturating_add(advancement.value()), 0, Turn::Theirs);
            tracing::trace!("Add {} reward: {:.5e}", advancement, reward);
            if reward > best_reward {
                best_reward = reward;
                best = advancement;
            }
        }

        tracing::debug!(
            "Best move at score {} is add {} (reward {:.3}, cache {} entries, {:?})",
            score,
            best,
            best_reward,
            self.cache.len(),
            self.stats
        );

        best
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn cache(&self) -> &RewardCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut RewardCache {
        &mut self.cache
    }
}

// ============================================================================
// TESTS
// ============================================================================

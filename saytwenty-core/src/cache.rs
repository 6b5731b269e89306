//! Reward cache for the dynamic-programming evaluator
//!
//! Maps a `(score, turn)` pair to the reward computed for it. Entries are
//! written once per key and stay valid for the life of the process, since
//! the rules and target never change.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::TARGET;

/// Number of key slots needed to cover every score in `[0, TARGET]` for both turns
pub const DEFAULT_CAPACITY: usize = 2 * (TARGET as usize + 1);

// ============================================================================
// KEYS
// ============================================================================

/// Whose move is being evaluated, relative to the evaluating agent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Mine = 0,
    Theirs = 1,
}

impl Turn {
    pub fn flip(self) -> Self {
        match self {
            Turn::Mine => Turn::Theirs,
            Turn::Theirs => Turn::Mine,
        }
    }
}

/// Composite cache key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub score: u8,
    pub turn: Turn,
}

impl CacheKey {
    pub fn new(score: u8, turn: Turn) -> Self {
        Self { score, turn }
    }

    /// Position of this key in the key space.
    ///
    /// Scores are interleaved with the turn bit, so distinct keys never share a slot.
    pub fn slot(self) -> usize {
        self.score as usize * 2 + self.turn as usize
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache slot {slot} for score {score} ({turn:?}) exceeds capacity {capacity}")]
    CapacityExceeded {
        score: u8,
        turn: Turn,
        slot: usize,
        capacity: usize,
    },
}

// ============================================================================
// CACHE
// ============================================================================

/// Fixed-capacity, write-once reward store
#[derive(Clone, Debug)]
pub struct RewardCache {
    entries: FxHashMap<CacheKey, f32>,
    capacity: usize,
}

impl Default for RewardCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity,
        }
    }

    /// Store `reward` for `(score, turn)`
    pub fn put(&mut self, score: u8, turn: Turn, reward: f32) -> Result<(), CacheError> {
        let key = CacheKey::new(score, turn);
        let slot = key.slot();
        if slot >= self.capacity {
            return Err(CacheError::CapacityExceeded {
                score,
                turn,
                slot,
                capacity: self.capacity,
            });
        }
        self.entries.insert(key, reward);
        Ok(())
    }

    /// Look up `(score, turn)`. `None` means the key was never written.
    pub fn get(&self, score: u8, turn: Turn) -> Option<f32> {
        self.entries.get(&CacheKey::new(score, turn)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slots_are_unique_over_key_space() {
        let mut seen = HashSet::new();
        for score in 0..=TARGET {
            for turn in [Turn::Mine, Turn::Theirs] {
                let slot = CacheKey::new(score, turn).slot();
                assert!(seen.insert(slot), "slot {} reused by score {} {:?}", slot, score, turn);
                assert!(slot < DEFAULT_CAPACITY);
            }
        }
        assert_eq!(seen.len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = RewardCache::new();
        assert_eq!(cache.get(5, Turn::Mine), None);
        cache.put(5, Turn::Mine, 2.5).unwrap();
        assert_eq!(cache.get(5, Turn::Mine), Some(2.5));
        assert_eq!(cache.get(5, Turn::Theirs), None);
    }

    #[test]
    fn test_zero_reward_is_present() {
        let mut cache = RewardCache::new();
        cache.put(0, Turn::Theirs, 0.0).unwrap();
        assert_eq!(cache.get(0, Turn::Theirs), Some(0.0));
        assert_eq!(cache.get(0, Turn::Mine), None);
    }

    #[test]
    fn test_turns_do_not_collide() {
        // (2, Mine) and (1, Theirs) share an index under a multiplicative key
        let mut cache = RewardCache::new();
        cache.put(2, Turn::Mine, 1.0).unwrap();
        cache.put(1, Turn::Theirs, -1.0).unwrap();
        assert_eq!(cache.get(2, Turn::Mine), Some(1.0));
        assert_eq!(cache.get(1, Turn::Theirs), Some(-1.0));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_put_beyond_capacity_fails() {
        let mut cache = RewardCache::new();
        let err = cache.put(TARGET + 1, Turn::Mine, 1.0).unwrap_err();
        assert!(matches!(
            err,
            CacheError::CapacityExceeded { slot: 42, capacity: 42, .. }
        ));
        assert!(cache.is_empty());

        let mut small = RewardCache::with_capacity(4);
        assert!(small.put(1, Turn::Theirs, 1.0).is_ok());
        assert!(small.put(2, Turn::Mine, 1.0).is_err());
    }

    #[test]
    fn test_lookup_through_shared_reference() {
        let mut cache = RewardCache::new();
        cache.put(3, Turn::Theirs, -0.5).unwrap();
        let view: &RewardCache = &cache;
        assert_eq!(view.get(3, Turn::Theirs), Some(-0.5));
        assert_eq!(view.get(3, Turn::Mine), None);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_overwrite_same_key() {
        let mut cache = RewardCache::new();
        cache.put(7, Turn::Mine, 1.0).unwrap();
        cache.put(7, Turn::Mine, 1.0).unwrap();
        assert_eq!(cache.len(), 1);
    }
}

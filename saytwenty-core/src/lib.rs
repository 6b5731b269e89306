//! Who Says 20 First - game engine and AI
//!
//! Players take turns adding 1 or 2 to a shared score; whoever lands on 20
//! wins. This crate provides:
//! - Game state and move validation
//! - A write-once reward cache keyed by `(score, turn)`
//! - A dynamic-programming minimax AI built on that cache
//! - Actors (manual, dynamic, random) and a game runner

pub mod game;
pub mod cache;
pub mod ai;
pub mod player;
pub mod config;
pub mod runner;

// Re-exports for convenient access
pub use game::{Advancement, GameError, GameResult, GameState, Player, TARGET};
pub use cache::{CacheError, CacheKey, RewardCache, Turn};
pub use ai::{DynamicAI, SearchStats};
pub use player::{Actor, DynamicPlayer, ManualPlayer, PlayerKind, RandomPlayer};
pub use config::MatchConfig;
pub use runner::{play_match, GameOutcome, GameRunner, MatchSummary};

//! Configuration types for matches

use serde::{Deserialize, Serialize};

use crate::player::PlayerKind;

/// Match configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Actor seated as player one in the first game
    pub player_one: PlayerKind,
    /// Actor seated as player two in the first game
    pub player_two: PlayerKind,
    /// Number of games to play
    pub games: usize,
    /// Base seed for random actors (None = 42)
    pub seed: Option<u64>,
    /// Alternate seats every game
    pub swap_seats: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: PlayerKind::Dynamic,
            player_two: PlayerKind::Random,
            games: 10,
            seed: None,
            swap_seats: false,
        }
    }
}

impl MatchConfig {
    pub fn new(player_one: PlayerKind, player_two: PlayerKind) -> Self {
        Self {
            player_one,
            player_two,
            ..Default::default()
        }
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_swap_seats(mut self, swap_seats: bool) -> Self {
        self.swap_seats = swap_seats;
        self
    }

    /// Seed for the actor in `seat` (0 or 1) of game `game`
    pub fn seat_seed(&self, game: usize, seat: u64) -> u64 {
        self.seed
            .unwrap_or(42)
            .wrapping_add(game as u64 * 2)
            .wrapping_add(seat)
    }

    /// Kinds seated as (player one, player two) for game `game`
    pub fn seating(&self, game: usize) -> (PlayerKind, PlayerKind) {
        if self.swap_seats && game % 2 == 1 {
            (self.player_two, self.player_one)
        } else {
            (self.player_one, self.player_two)
        }
    }
}

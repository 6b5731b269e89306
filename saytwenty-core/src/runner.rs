//! Game runner - drives two actors to the end of a game

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::game::{Advancement, GameError, GameResult, GameState, Player};
use crate::player::Actor;

/// Outcome of a single game
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Player,
    pub turns: u32,
    pub final_score: u8,
    pub history: Vec<(Player, Advancement)>,
}

/// Owns the authoritative game state and asks actors for moves in turn
pub struct GameRunner {
    state: GameState,
    player_one: Box<dyn Actor>,
    player_two: Box<dyn Actor>,
    history: Vec<(Player, Advancement)>,
}

impl GameRunner {
    pub fn new(player_one: Box<dyn Actor>, player_two: Box<dyn Actor>) -> Self {
        tracing::info!("===== WHO SAYS 20 FIRST =====");
        Self {
            state: GameState::new(),
            player_one,
            player_two,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[(Player, Advancement)] {
        &self.history
    }

    /// Let the player to move take one turn
    pub fn spin_once(&mut self) -> Result<GameState, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }

        let mover = self.state.current_player();
        let actor = match mover {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        };
        tracing::info!("Turn: {} ({})", mover, actor.name());

        let advancement = actor.act(self.state)?;
        self.state = self.state.advance(advancement)?;
        self.history.push((mover, advancement));

        tracing::info!("Current score: {}", self.state.score());
        Ok(self.state)
    }

    /// Play until someone reaches the target.
    ///
    /// Terminates because every accepted advancement raises the score.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            let state = self.spin_once()?;
            if let GameResult::Won(winner) = state.result() {
                tracing::info!("Game over! {} wins", winner);
                return Ok(GameOutcome {
                    winner,
                    turns: self.history.len() as u32,
                    final_score: state.score(),
                    history: self.history.clone(),
                });
            }
        }
    }
}

// ============================================================================
// MATCHES
// ============================================================================

/// Aggregated match results
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    /// Wins credited to the configured `player_one` kind, whichever seat it held
    pub first_kind_wins: usize,
    pub second_kind_wins: usize,
    pub avg_turns: f32,
    pub outcomes: Vec<GameOutcome>,
}

/// Play `config.games` games between freshly built actors
pub fn play_match(config: &MatchConfig) -> Result<MatchSummary, GameError> {
    let mut summary = MatchSummary::default();
    let mut total_turns = 0u64;

    for game in 0..config.games {
        let (one, two) = config.seating(game);
        let swapped = (one, two) != (config.player_one, config.player_two)
            && config.player_one != config.player_two;

        let mut runner = GameRunner::new(
            one.build(config.seat_seed(game, 0)),
            two.build(config.seat_seed(game, 1)),
        );
        let outcome = runner.play()?;

        total_turns += outcome.turns as u64;
        match outcome.winner {
            Player::One => summary.player_one_wins += 1,
            Player::Two => summary.player_two_wins += 1,
        }
        let first_kind_won = (outcome.winner == Player::One) != swapped;
        if first_kind_won {
            summary.first_kind_wins += 1;
        } else {
            summary.second_kind_wins += 1;
        }

        tracing::debug!(
            "Game {}: {:?} vs {:?}, {} wins in {} turns",
            game + 1,
            one,
            two,
            outcome.winner,
            outcome.turns
        );
        summary.outcomes.push(outcome);
    }

    summary.games = config.games;
    if config.games > 0 {
        summary.avg_turns = total_turns as f32 / config.games as f32;
    }
    Ok(summary)
}

// ============================================================================
// TESTS
// ============================================================================

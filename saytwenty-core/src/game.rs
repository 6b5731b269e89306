//! Game state and move validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Score that ends the game. Whoever lands on it wins.
pub const TARGET: u8 = 20;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while applying moves or collecting them from actors
#[derive(Debug, Error)]
pub enum GameError {
    #[error("illegal advancement {advancement} at score {score}")]
    IllegalAdvancement { score: u8, advancement: u8 },

    #[error("advancement must be 1 or 2, got {0}")]
    InvalidAdvancement(u8),

    #[error("game is already over")]
    GameOver,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// CORE TYPES
// ============================================================================

/// Seat at the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Amount added to the score on a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advancement {
    One = 1,
    Two = 2,
}

impl Advancement {
    /// Both advancements, in the order the evaluator considers them
    pub const ALL: [Advancement; 2] = [Advancement::One, Advancement::Two];

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Advancement {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Advancement::One),
            2 => Ok(Advancement::Two),
            other => Err(GameError::InvalidAdvancement(other)),
        }
    }
}

impl std::fmt::Display for Advancement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Won(Player),
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Snapshot of a game. Transitions produce a new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    score: u8,
    to_move: Player,
    result: GameResult,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            to_move: Player::One,
            result: GameResult::Ongoing,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn current_player(&self) -> Player {
        self.to_move
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    /// Whether `advancement` can be applied without overshooting the target
    pub fn is_legal(&self, advancement: Advancement) -> bool {
        !self.is_over() && self.score + advancement.value() <= TARGET
    }

    /// Legal advancements from this state
    pub fn legal_advancements(&self) -> Vec<Advancement> {
        Advancement::ALL
            .into_iter()
            .filter(|&a| self.is_legal(a))
            .collect()
    }

    /// Apply an advancement for the player to move.
    ///
    /// Landing exactly on [`TARGET`] wins the game for the mover; otherwise
    /// the turn passes to the opponent.
    pub fn advance(self, advancement: Advancement) -> Result<GameState, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.score + advancement.value() > TARGET {
            return Err(GameError::IllegalAdvancement {
                score: self.score,
                advancement: advancement.value(),
            });
        }

        let score = self.score + advancement.value();
        if score == TARGET {
            Ok(GameState {
                score,
                to_move: self.to_move,
                result: GameResult::Won(self.to_move),
            })
        } else {
            Ok(GameState {
                score,
                to_move: self.to_move.opponent(),
                result: GameResult::Ongoing,
            })
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.result(), GameResult::Ongoing);
        assert_eq!(game.legal_advancements(), vec![Advancement::One, Advancement::Two]);
    }

    #[test]
    fn test_advance_passes_turn() {
        let game = GameState::new().advance(Advancement::Two).unwrap();
        assert_eq!(game.score(), 2);
        assert_eq!(game.current_player(), Player::Two);
        assert!(!game.is_over());
    }

    #[test]
    fn test_reaching_target_wins() {
        let mut game = GameState::new();
        while game.score() < TARGET - 1 {
            game = game.advance(Advancement::One).unwrap();
        }
        let mover = game.current_player();
        let game = game.advance(Advancement::One).unwrap();
        assert_eq!(game.score(), TARGET);
        assert_eq!(game.result(), GameResult::Won(mover));
        assert!(game.legal_advancements().is_empty());
    }

    #[test]
    fn test_overshoot_rejected() {
        let mut game = GameState::new();
        while game.score() < TARGET - 1 {
            game = game.advance(Advancement::One).unwrap();
        }
        assert!(!game.is_legal(Advancement::Two));
        assert_eq!(game.legal_advancements(), vec![Advancement::One]);
        let err = game.advance(Advancement::Two).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalAdvancement { score: 19, advancement: 2 }
        ));
    }

    #[test]
    fn test_advance_after_win_fails() {
        let mut game = GameState::new();
        while !game.is_over() {
            game = game.advance(Advancement::Two).unwrap();
        }
        assert!(matches!(game.advance(Advancement::One), Err(GameError::GameOver)));
    }

    #[test]
    fn test_advancement_from_u8() {
        assert_eq!(Advancement::try_from(1).unwrap(), Advancement::One);
        assert_eq!(Advancement::try_from(2).unwrap(), Advancement::Two);
        assert!(matches!(Advancement::try_from(0), Err(GameError::InvalidAdvancement(0))));
        assert!(matches!(Advancement::try_from(3), Err(GameError::InvalidAdvancement(3))));
    }

    #[test]
    fn test_state_serializes() {
        let game = GameState::new().advance(Advancement::One).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(game, back);
    }
}

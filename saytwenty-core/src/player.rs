//! Actors - anything that can take a turn
//!
//! The runner only ever sees `Box<dyn Actor>`; each implementation decides
//! how to pick an advancement from a snapshot of the game.

use std::io::{self, BufRead, Write};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ai::DynamicAI;
use crate::cache::RewardCache;
use crate::game::{Advancement, GameError, GameState};

/// A participant in the game, called once per turn
pub trait Actor {
    fn name(&self) -> &str;

    /// Pick an advancement for the player to move in `state`
    fn act(&mut self, state: GameState) -> Result<Advancement, GameError>;
}

/// Which actor to seat
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Human at the terminal
    Manual,
    /// Dynamic-programming minimax
    Dynamic,
    /// Uniform random legal moves
    Random,
}

impl Default for PlayerKind {
    fn default() -> Self {
        PlayerKind::Dynamic
    }
}

impl std::str::FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manual" | "human" => Ok(PlayerKind::Manual),
            "dynamic" | "dp" => Ok(PlayerKind::Dynamic),
            "random" => Ok(PlayerKind::Random),
            other => Err(format!("unknown player kind '{}' (expected manual, dynamic or random)", other)),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Manual => write!(f, "manual"),
            PlayerKind::Dynamic => write!(f, "dynamic"),
            PlayerKind::Random => write!(f, "random"),
        }
    }
}

impl PlayerKind {
    /// Build a boxed actor of this kind reading from stdin if it is manual
    pub fn build(self, seed: u64) -> Box<dyn Actor> {
        match self {
            PlayerKind::Manual => Box::new(ManualPlayer::stdio()),
            PlayerKind::Dynamic => Box::new(DynamicPlayer::new(RewardCache::new())),
            PlayerKind::Random => Box::new(RandomPlayer::with_seed(seed)),
        }
    }
}

// ============================================================================
// DYNAMIC PROGRAMMING PLAYER
// ============================================================================

pub struct DynamicPlayer {
    ai: DynamicAI,
}

impl DynamicPlayer {
    /// Attach a fresh cache; it lives as long as the player
    pub fn new(cache: RewardCache) -> Self {
        Self {
            ai: DynamicAI::new(cache),
        }
    }

    pub fn ai(&self) -> &DynamicAI {
        &self.ai
    }
}

impl Actor for DynamicPlayer {
    fn name(&self) -> &str {
        "dynamic"
    }

    fn act(&mut self, state: GameState) -> Result<Advancement, GameError> {
        let advancement = self.ai.choose_move(state.score());
        tracing::info!("DynamicP AI adds: {}", advancement);
        Ok(advancement)
    }
}

// ============================================================================
// MANUAL PLAYER
// ============================================================================

/// Where a manual player reads its moves from
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only for the duration of each read so that two
/// manual players can share the terminal.
pub struct StdinLines(io::Stdin);

impl LineSource for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Prompts for moves until a legal one is entered
pub struct ManualPlayer<R, W> {
    input: R,
    output: W,
}

impl ManualPlayer<StdinLines, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(StdinLines(io::stdin()), io::stdout())
    }
}

impl<R: LineSource, W: Write> ManualPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn parse(line: &str, state: &GameState) -> Option<Advancement> {
        let advancement = line.trim().parse::<u8>().ok()?;
        let advancement = Advancement::try_from(advancement).ok()?;
        state.is_legal(advancement).then_some(advancement)
    }
}

impl<R: LineSource, W: Write> Actor for ManualPlayer<R, W> {
    fn name(&self) -> &str {
        "manual"
    }

    fn act(&mut self, state: GameState) -> Result<Advancement, GameError> {
        loop {
            write!(self.output, "Add 1 or 2? : ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }

            match Self::parse(&line, &state) {
                Some(advancement) => return Ok(advancement),
                None => writeln!(self.output, "Input Not Allowed, Can Only Be 1 or 2!")?,
            }
        }
    }
}

// ============================================================================
// RANDOM PLAYER
// ============================================================================

pub struct RandomPlayer {
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Actor for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn act(&mut self, state: GameState) -> Result<Advancement, GameError> {
        state
            .legal_advancements()
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::GameOver)
    }
}

// ============================================================================
// TESTS
// ============================================================================

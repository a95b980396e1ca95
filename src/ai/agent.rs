use crate::config::AiConfig;
use crate::game::GameState;

use super::random::{RandomSource, SeededRandom};
use super::search::DEFAULT_SEARCH_DEPTH;
use super::strategy::{get_move_with_depth, Difficulty};

/// Universal interface for anything that picks a column.
pub trait Agent {
    /// Select a column for the player to move, `None` if there is nothing to play.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// The difficulty-tiered computer opponent.
pub struct AiOpponent {
    difficulty: Difficulty,
    depth: u32,
    rng: Box<dyn RandomSource + Send>,
    name: String,
}

impl AiOpponent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_random(difficulty, DEFAULT_SEARCH_DEPTH, SeededRandom::from_entropy())
    }

    pub fn with_random(
        difficulty: Difficulty,
        depth: u32,
        rng: impl RandomSource + Send + 'static,
    ) -> Self {
        AiOpponent {
            difficulty,
            depth,
            rng: Box::new(rng),
            name: format!("AI ({difficulty})"),
        }
    }

    /// Build from configuration; a configured seed makes the opponent deterministic.
    pub fn from_config(config: &AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        Self::with_random(config.difficulty, config.search_depth, rng)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Agent for AiOpponent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        get_move_with_depth(
            state.board(),
            state.current_player(),
            self.difficulty,
            self.depth,
            self.rng.as_mut(),
        )
    }

    fn name(&self) -> &str {
        &self.name
    }
}

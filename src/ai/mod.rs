//! The computer opponent: heuristic evaluation, alpha-beta search, and the
//! difficulty tiers that choose between them.

mod agent;
pub mod eval;
mod random;
pub mod search;
pub mod strategy;

pub use agent::{Agent, AiOpponent};
pub use eval::{score, Heuristic, WindowHeuristic};
pub use random::{choose, RandomSource, SeededRandom};
pub use search::{hard_move, search, Searcher, DEFAULT_SEARCH_DEPTH, MOVE_ORDER, WIN_SCORE};
pub use strategy::{get_move, get_move_with_depth, Difficulty};

#[cfg(test)]
pub(crate) use random::ScriptedRandom;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::random::{choose, RandomSource};
use super::search::{center_first, hard_move, DEFAULT_SEARCH_DEPTH};
use crate::game::{Board, Player};

/// How hard the AI opponent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal column.
    Easy,
    /// Win, block, fork, then prefer the center.
    Medium,
    /// Minimax with alpha-beta pruning.
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected 'easy', 'medium', or 'hard')"
            )),
        }
    }
}

/// Pick a column for `ai` at `difficulty` with the default search depth.
///
/// Returns `None` only when the board has no legal column.
pub fn get_move(
    board: &Board,
    ai: Player,
    difficulty: Difficulty,
    rng: &mut dyn RandomSource,
) -> Option<usize> {
    get_move_with_depth(board, ai, difficulty, DEFAULT_SEARCH_DEPTH, rng)
}

/// Like [`get_move`], with an explicit depth for the Hard tier.
pub fn get_move_with_depth(
    board: &Board,
    ai: Player,
    difficulty: Difficulty,
    depth: u32,
    rng: &mut dyn RandomSource,
) -> Option<usize> {
    let column = match difficulty {
        Difficulty::Easy => easy_move(board, rng),
        Difficulty::Medium => medium_move(board, ai, rng),
        Difficulty::Hard => hard_move(board, ai, depth),
    };
    debug!(%difficulty, player = ai.name(), ?column, "ai move");
    column
}

pub fn easy_move(board: &Board, rng: &mut dyn RandomSource) -> Option<usize> {
    choose(&board.legal_columns(), rng)
}

pub fn medium_move(board: &Board, ai: Player, rng: &mut dyn RandomSource) -> Option<usize> {
    let legal = board.legal_columns();
    if legal.is_empty() {
        return None;
    }

    if let Some(&col) = winning_columns(board, ai).first() {
        trace!(col, "medium: win");
        return Some(col);
    }
    if let Some(&col) = winning_columns(board, ai.other()).first() {
        trace!(col, "medium: block");
        return Some(col);
    }
    if let Some(col) = fork_column(board, ai) {
        trace!(col, "medium: double threat");
        return Some(col);
    }
    if let Some(&col) = center_first(&legal).first() {
        trace!(col, "medium: center preference");
        return Some(col);
    }
    choose(&legal, rng)
}

/// Legal columns where `player` completes a line immediately, ascending.
pub fn winning_columns(board: &Board, player: Player) -> Vec<usize> {
    board
        .legal_columns()
        .into_iter()
        .filter(|&col| {
            board
                .drop_row(col)
                .zip(board.drop(col, player))
                .is_some_and(|(row, next)| next.wins_at(row, col))
        })
        .collect()
}

/// First column after which `player` threatens to win in two different columns.
pub fn fork_column(board: &Board, player: Player) -> Option<usize> {
    board.legal_columns().into_iter().find(|&col| {
        board
            .drop(col, player)
            .is_some_and(|next| winning_columns(&next, player).len() >= 2)
    })
}

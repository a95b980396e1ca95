use tracing::debug;

use super::eval::{Heuristic, WindowHeuristic};
use super::strategy::winning_columns;
use crate::game::{Board, Player, CENTER, COLS};

/// Base score of a decided game; remaining depth is added on top.
pub const WIN_SCORE: i32 = 100_000;

/// Plies searched below each root move.
pub const DEFAULT_SEARCH_DEPTH: u32 = 5;

/// Window bound for a full-width search.
pub const INFINITY: i32 = i32::MAX;

/// Column ordering: center-first for better alpha-beta pruning.
pub const MOVE_ORDER: [usize; COLS] = center_out_order();

const fn center_out_order() -> [usize; COLS] {
    let mut order = [CENTER; COLS];
    let mut i = 1;
    let mut offset = 1;
    while i < COLS {
        if offset <= CENTER {
            order[i] = CENTER - offset;
            i += 1;
        }
        if i < COLS && CENTER + offset < COLS {
            order[i] = CENTER + offset;
            i += 1;
        }
        offset += 1;
    }
    order
}

/// Reorder `columns` by ascending distance from the center, left side first on ties.
pub(crate) fn center_first(columns: &[usize]) -> Vec<usize> {
    MOVE_ORDER
        .iter()
        .copied()
        .filter(|col| columns.contains(col))
        .collect()
}

/// Depth-bounded minimax with alpha-beta pruning.
///
/// The searcher keeps no state between calls apart from a node counter
/// used for diagnostics.
pub struct Searcher<H = WindowHeuristic> {
    heuristic: H,
    nodes: u64,
}

impl Searcher<WindowHeuristic> {
    pub fn new() -> Self {
        Self::with_heuristic(WindowHeuristic)
    }
}

impl Default for Searcher<WindowHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Heuristic> Searcher<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Searcher { heuristic, nodes: 0 }
    }

    /// Nodes visited since construction.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score `board` from `ai`'s point of view, `maximizing` if `ai` is to move.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        ai: Player,
    ) -> i32 {
        let winner = board.winner().map(|(player, _)| player);
        let mut scratch = *board;
        self.alphabeta(&mut scratch, depth, alpha, beta, maximizing, ai, winner)
    }

    /// Pick the column for `ai`, searching `depth` plies below each root move.
    pub fn best_move(&mut self, board: &Board, ai: Player, depth: u32) -> Option<usize> {
        let start_nodes = self.nodes;
        let mut best: Option<(usize, i32)> = None;

        // A lone opponent threat is blocked even when every move loses.
        let threats = winning_columns(board, ai.other());
        let block = match threats.as_slice() {
            [col] => Some(*col),
            _ => None,
        };

        for &col in &MOVE_ORDER {
            let Some(row) = board.drop_row(col) else {
                continue;
            };
            let Some(child) = board.drop(col, ai) else {
                continue;
            };
            if child.wins_at(row, col) {
                debug!(column = col, "hard move: immediate win");
                return Some(col);
            }

            let score = self.search(&child, depth, -INFINITY, INFINITY, false, ai);
            // Ties keep the earlier, more central column unless `col` blocks.
            let replaces = match best {
                None => true,
                Some((_, best_score)) => score > best_score || (score == best_score && block == Some(col)),
            };
            if replaces {
                best = Some((col, score));
            }
        }

        if let Some((column, score)) = best {
            debug!(
                column,
                score,
                depth,
                nodes = self.nodes - start_nodes,
                "hard move selected"
            );
        }
        best.map(|(col, _)| col)
    }

    /// `winner` is the owner of a line completed by the move that led here.
    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai: Player,
        winner: Option<Player>,
    ) -> i32 {
        self.nodes += 1;

        // Terminal scores take priority over the depth cutoff.
        match winner {
            Some(player) if player == ai => return WIN_SCORE + depth as i32,
            Some(_) => return -WIN_SCORE - depth as i32,
            None => {}
        }
        if depth == 0 || board.is_full() {
            return self.heuristic.evaluate(board, ai);
        }

        let mover = if maximizing { ai } else { ai.other() };
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for &col in &MOVE_ORDER {
            let Some(row) = board.place(col, mover) else {
                continue;
            };
            let child_winner = board.wins_at(row, col).then_some(mover);
            let value = self.alphabeta(board, depth - 1, alpha, beta, !maximizing, ai, child_winner);
            board.clear_top(col);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

/// Minimax score of `board` for `ai` with the default heuristic.
pub fn search(board: &Board, depth: u32, alpha: i32, beta: i32, maximizing: bool, ai: Player) -> i32 {
    Searcher::new().search(board, depth, alpha, beta, maximizing, ai)
}

/// Hard-tier move: immediate win if one exists, otherwise the best-scoring column.
pub fn hard_move(board: &Board, ai: Player, depth: u32) -> Option<usize> {
    Searcher::new().best_move(board, ai, depth)
}

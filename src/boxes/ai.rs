//! Chain-claiming opponent for the boxes game.
//!
//! The strongest tier captures whatever is available, then plays lines that
//! hand nothing over, and once none are left gives away the smallest chain.
//! Double-cross play (declining the last two boxes of a chain) is not modelled.

use tracing::debug;

use super::board::{BoxesBoard, Line};
use crate::ai::{choose, Difficulty, RandomSource};
use crate::game::Player;

/// Lines that close at least one box right now.
pub fn capturing_lines(board: &BoxesBoard) -> Vec<Line> {
    board
        .legal_lines()
        .into_iter()
        .filter(|line| {
            line.adjacent_boxes()
                .into_iter()
                .any(|(row, col)| board.sides(row, col) == 3)
        })
        .collect()
}

/// Lines that leave no box with three sides.
pub fn safe_lines(board: &BoxesBoard) -> Vec<Line> {
    board
        .legal_lines()
        .into_iter()
        .filter(|line| {
            line.adjacent_boxes()
                .into_iter()
                .all(|(row, col)| board.sides(row, col) < 2)
        })
        .collect()
}

/// Boxes the opponent collects by greedily capturing after `player` draws `line`.
pub fn sacrifice_cost(board: &BoxesBoard, line: Line, player: Player) -> usize {
    let Some((mut board, _)) = board.draw(line, player) else {
        return 0;
    };
    let opponent = player.other();
    let mut given = 0;
    while let Some(&capture) = capturing_lines(&board).first() {
        let Some((next, claimed)) = board.draw(capture, opponent) else {
            break;
        };
        given += claimed;
        board = next;
    }
    given
}

/// Pick a line for `player`, `None` once the board is complete.
pub fn boxes_move(
    board: &BoxesBoard,
    player: Player,
    difficulty: Difficulty,
    rng: &mut dyn RandomSource,
) -> Option<Line> {
    let line = match difficulty {
        Difficulty::Easy => choose(&board.legal_lines(), rng),
        Difficulty::Medium => capturing_lines(board)
            .first()
            .copied()
            .or_else(|| choose(&safe_lines(board), rng))
            .or_else(|| choose(&board.legal_lines(), rng)),
        Difficulty::Hard => capturing_lines(board)
            .first()
            .copied()
            .or_else(|| safe_lines(board).first().copied())
            .or_else(|| smallest_sacrifice(board, player)),
    };
    debug!(%difficulty, player = player.name(), line = ?line, "boxes move");
    line
}

/// The legal line giving away the fewest boxes, first in line order on ties.
fn smallest_sacrifice(board: &BoxesBoard, player: Player) -> Option<Line> {
    board
        .legal_lines()
        .into_iter()
        .map(|line| (sacrifice_cost(board, line, player), line))
        .min_by_key(|&(cost, _)| cost)
        .map(|(_, line)| line)
}

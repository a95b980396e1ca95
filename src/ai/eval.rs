use crate::game::{Board, Cell, Player, CENTER, COLS, DIRECTIONS, ROWS, WIN_LENGTH};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: center-column bias plus a scan of every 4-cell window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (4, _, _) => 100,
            (3, _, 1) => 5,
            (2, _, 2) => 2,
            (_, 3, 1) => -4,
            _ => 0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        score(board, player)
    }
}

/// Score `board` for `player`. Higher is better for `player`.
///
/// The score is not antisymmetric: `score(b, p)` is not `-score(b, p.other())`.
pub fn score(board: &Board, player: Player) -> i32 {
    let own_cell = player.to_cell();

    let mut total: i32 = (0..ROWS)
        .filter(|&row| board.get(row, CENTER) == own_cell)
        .map(|_| 3)
        .sum();

    for &(dr, dc) in &DIRECTIONS {
        for row in 0..ROWS as isize {
            for col in 0..COLS as isize {
                let end_row = row + dr * (WIN_LENGTH as isize - 1);
                let end_col = col + dc * (WIN_LENGTH as isize - 1);
                if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
                    continue;
                }

                let (mut own, mut opp, mut empty) = (0, 0, 0);
                for i in 0..WIN_LENGTH as isize {
                    match board.get((row + dr * i) as usize, (col + dc * i) as usize) {
                        Cell::Empty => empty += 1,
                        c if c == own_cell => own += 1,
                        _ => opp += 1,
                    }
                }
                total += WindowHeuristic::score_window(own, opp, empty);
            }
        }
    }

    total
}

use std::fmt;

use crate::game::Player;

/// Boxes per row and per column (6 × 6 dots).
pub const BOX_ROWS: usize = 5;
pub const BOX_COLS: usize = 5;

/// Total number of lines on the grid.
pub const LINE_COUNT: usize = (BOX_ROWS + 1) * BOX_COLS + BOX_ROWS * (BOX_COLS + 1);

/// A line between two adjacent dots.
///
/// `Horizontal { row, col }` is the top edge of box (row, col), with `row` up to
/// `BOX_ROWS` for the bottom border. `Vertical { row, col }` is the left edge of
/// box (row, col), with `col` up to `BOX_COLS` for the right border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Horizontal { row: usize, col: usize },
    Vertical { row: usize, col: usize },
}

impl Line {
    pub fn is_valid(self) -> bool {
        match self {
            Line::Horizontal { row, col } => row <= BOX_ROWS && col < BOX_COLS,
            Line::Vertical { row, col } => row < BOX_ROWS && col <= BOX_COLS,
        }
    }

    /// The one or two boxes this line borders.
    pub fn adjacent_boxes(self) -> Vec<(usize, usize)> {
        let mut boxes = Vec::with_capacity(2);
        match self {
            Line::Horizontal { row, col } => {
                if row > 0 {
                    boxes.push((row - 1, col));
                }
                if row < BOX_ROWS {
                    boxes.push((row, col));
                }
            }
            Line::Vertical { row, col } => {
                if col > 0 {
                    boxes.push((row, col - 1));
                }
                if col < BOX_COLS {
                    boxes.push((row, col));
                }
            }
        }
        boxes
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Horizontal { row, col } => write!(f, "h({row},{col})"),
            Line::Vertical { row, col } => write!(f, "v({row},{col})"),
        }
    }
}

/// Grid of drawn lines and claimed boxes. Transitions return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxesBoard {
    horizontal: [[bool; BOX_COLS]; BOX_ROWS + 1],
    vertical: [[bool; BOX_COLS + 1]; BOX_ROWS],
    owners: [[Option<Player>; BOX_COLS]; BOX_ROWS],
}

impl BoxesBoard {
    pub fn new() -> Self {
        BoxesBoard {
            horizontal: [[false; BOX_COLS]; BOX_ROWS + 1],
            vertical: [[false; BOX_COLS + 1]; BOX_ROWS],
            owners: [[None; BOX_COLS]; BOX_ROWS],
        }
    }

    /// Whether `line` is on the board and already drawn.
    pub fn is_drawn(&self, line: Line) -> bool {
        if !line.is_valid() {
            return false;
        }
        match line {
            Line::Horizontal { row, col } => self.horizontal[row][col],
            Line::Vertical { row, col } => self.vertical[row][col],
        }
    }

    /// Undrawn lines: horizontal row-major, then vertical row-major.
    pub fn legal_lines(&self) -> Vec<Line> {
        let horizontal = (0..=BOX_ROWS)
            .flat_map(|row| (0..BOX_COLS).map(move |col| Line::Horizontal { row, col }));
        let vertical = (0..BOX_ROWS)
            .flat_map(|row| (0..=BOX_COLS).map(move |col| Line::Vertical { row, col }));
        horizontal
            .chain(vertical)
            .filter(|&line| !self.is_drawn(line))
            .collect()
    }

    /// Number of drawn sides of box (row, col).
    pub fn sides(&self, row: usize, col: usize) -> usize {
        [
            self.horizontal[row][col],
            self.horizontal[row + 1][col],
            self.vertical[row][col],
            self.vertical[row][col + 1],
        ]
        .iter()
        .filter(|&&drawn| drawn)
        .count()
    }

    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        self.owners[row][col]
    }

    /// Boxes claimed by `player`.
    pub fn score(&self, player: Player) -> usize {
        self.owners
            .iter()
            .flatten()
            .filter(|&&owner| owner == Some(player))
            .count()
    }

    /// Every line drawn.
    pub fn is_complete(&self) -> bool {
        self.horizontal.iter().flatten().all(|&d| d) && self.vertical.iter().flatten().all(|&d| d)
    }

    /// Draw `line` for `player`, returning the new board and how many boxes it closed.
    pub fn draw(&self, line: Line, player: Player) -> Option<(BoxesBoard, usize)> {
        if !line.is_valid() || self.is_drawn(line) {
            return None;
        }

        let mut next = *self;
        match line {
            Line::Horizontal { row, col } => next.horizontal[row][col] = true,
            Line::Vertical { row, col } => next.vertical[row][col] = true,
        }

        let mut claimed = 0;
        for (row, col) in line.adjacent_boxes() {
            if next.sides(row, col) == 4 && next.owners[row][col].is_none() {
                next.owners[row][col] = Some(player);
                claimed += 1;
            }
        }
        Some((next, claimed))
    }
}

impl Default for BoxesBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(row: usize, col: usize) -> Line {
        Line::Horizontal { row, col }
    }

    fn v(row: usize, col: usize) -> Line {
        Line::Vertical { row, col }
    }

    #[test]
    fn new_board_has_every_line_open() {
        let board = BoxesBoard::new();
        assert_eq!(board.legal_lines().len(), LINE_COUNT);
        assert_eq!(LINE_COUNT, 60);
        assert_eq!(board.legal_lines()[0], h(0, 0));
        assert_eq!(board.legal_lines()[30], v(0, 0));
    }

    #[test]
    fn fourth_side_claims_box() {
        let mut board = BoxesBoard::new();
        for line in [h(0, 0), v(0, 0), h(1, 0)] {
            let (next, claimed) = board.draw(line, Player::One).unwrap();
            assert_eq!(claimed, 0);
            board = next;
        }
        assert_eq!(board.sides(0, 0), 3);

        let (board, claimed) = board.draw(v(0, 1), Player::Two).unwrap();
        assert_eq!(claimed, 1);
        assert_eq!(board.owner(0, 0), Some(Player::Two));
        assert_eq!(board.score(Player::Two), 1);
        assert_eq!(board.score(Player::One), 0);
    }

    #[test]
    fn shared_line_claims_two_boxes() {
        let mut board = BoxesBoard::new();
        for line in [h(0, 0), v(0, 0), h(1, 0), h(0, 1), h(1, 1), v(0, 2)] {
            board = board.draw(line, Player::One).unwrap().0;
        }
        let (board, claimed) = board.draw(v(0, 1), Player::Two).unwrap();
        assert_eq!(claimed, 2);
        assert_eq!(board.score(Player::Two), 2);
    }

    #[test]
    fn rejects_duplicate_and_out_of_range_lines() {
        let board = BoxesBoard::new().draw(h(2, 2), Player::One).unwrap().0;
        assert!(board.is_drawn(h(2, 2)));
        assert!(board.draw(h(2, 2), Player::Two).is_none());
        assert!(board.draw(h(BOX_ROWS + 1, 0), Player::One).is_none());
        assert!(board.draw(v(0, BOX_COLS + 1), Player::One).is_none());
        assert!(!board.is_drawn(v(BOX_ROWS, 0)));
    }

    #[test]
    fn border_lines_touch_one_box() {
        assert_eq!(h(0, 3).adjacent_boxes(), vec![(0, 3)]);
        assert_eq!(h(BOX_ROWS, 3).adjacent_boxes(), vec![(BOX_ROWS - 1, 3)]);
        assert_eq!(v(2, 1).adjacent_boxes(), vec![(2, 0), (2, 1)]);
        assert_eq!(v(2, 0).to_string(), "v(2,0)");
    }

    #[test]
    fn drawing_everything_completes_board() {
        let mut board = BoxesBoard::new();
        let mut total = 0;
        for line in BoxesBoard::new().legal_lines() {
            let (next, claimed) = board.draw(line, Player::One).unwrap();
            total += claimed;
            board = next;
        }
        assert!(board.is_complete());
        assert_eq!(total, BOX_ROWS * BOX_COLS);
        assert!(board.legal_lines().is_empty());
    }
}

use std::fmt;
use std::str::FromStr;

use super::player::Player;
use crate::error::BoardParseError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Index of the center column.
pub const CENTER: usize = COLS / 2;

/// Row/column steps for the four line axes: horizontal, vertical, `\` and `/`.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }
}

/// Four `(row, col)` coordinates, ordered from the start of the run.
pub type WinningLine = [(usize, usize); WIN_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Parse a board from its rows, top row first.
    ///
    /// `.` is empty, `X` is [`Player::One`] and `O` is [`Player::Two`].
    /// Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row,
                    width: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::One,
                    'O' | 'o' => Cell::Two,
                    other => return Err(BoardParseError::UnknownSymbol { row, col, symbol: other }),
                };
            }
        }

        // Pieces must rest on something.
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.cells[row][col] != Cell::Empty && board.cells[row + 1][col] == Cell::Empty {
                    return Err(BoardParseError::Floating { row, col });
                }
            }
        }

        Ok(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether a piece can be dropped into `col`.
    pub fn can_drop(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// The row a piece dropped into `col` would land on.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        if !self.can_drop(col) {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Return a copy of the board with `player`'s piece dropped into `col`.
    pub fn drop(&self, col: usize, player: Player) -> Option<Board> {
        let mut next = *self;
        next.place(col, player)?;
        Some(next)
    }

    /// All columns that accept a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.can_drop(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.can_drop(col))
    }

    /// Find a completed line anywhere on the board.
    pub fn winner(&self) -> Option<(Player, WinningLine)> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let Some(player) = self.cells[row][col].player() else {
                    continue;
                };
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.run_through(row, col, dr, dc) {
                        return Some((player, line));
                    }
                }
            }
        }
        None
    }

    /// No winner and no legal column left.
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.is_full()
    }

    /// Place a piece in place, returning the landing row.
    pub(crate) fn place(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.drop_row(col)?;
        self.cells[row][col] = player.to_cell();
        Some(row)
    }

    /// Remove the topmost piece of `col`. Undoes a [`Board::place`].
    pub(crate) fn clear_top(&mut self, col: usize) {
        if let Some(row) = (0..ROWS).find(|&row| self.cells[row][col] != Cell::Empty) {
            self.cells[row][col] = Cell::Empty;
        }
    }

    /// Whether the piece at (row, col) is part of a completed line.
    pub(crate) fn wins_at(&self, row: usize, col: usize) -> bool {
        if self.cells[row][col] == Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_through(row, col, dr, dc).is_some())
    }

    /// Walk back to the start of the run through (row, col) along (dr, dc),
    /// then forward; returns the first four cells if the run is long enough.
    fn run_through(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<WinningLine> {
        let cell = self.cells[row][col];
        let (mut r, mut c) = (row as isize, col as isize);
        while self.cell_at(r - dr, c - dc) == Some(cell) {
            r -= dr;
            c -= dc;
        }

        let mut line = [(0, 0); WIN_LENGTH];
        for (i, slot) in line.iter_mut().enumerate() {
            let (lr, lc) = (r + dr * i as isize, c + dc * i as isize);
            if self.cell_at(lr, lc) != Some(cell) {
                return None;
            }
            *slot = (lr as usize, lc as usize);
        }
        Some(line)
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row >= ROWS as isize || col >= COLS as isize {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Rows separated by newlines or `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        Board::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_returns_new_board() {
        let board = Board::new();

        let next = board.drop(3, Player::One).unwrap();
        assert_eq!(next.get(5, 3), Cell::One);
        // Input board is untouched
        assert_eq!(board.get(5, 3), Cell::Empty);

        let next = next.drop(3, Player::Two).unwrap();
        assert_eq!(next.get(4, 3), Cell::Two);
        assert_eq!(next.drop_row(3), Some(3));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            board = board.drop(0, player).unwrap();
        }

        assert!(!board.can_drop(0));
        assert_eq!(board.drop_row(0), None);
        assert_eq!(board.drop(0, Player::One), None);
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let board = Board::new();
        assert!(!board.can_drop(COLS));
        assert_eq!(board.drop(COLS, Player::One), None);
    }

    #[test]
    fn test_horizontal_win_any_fill_order() {
        // Fill the same four cells with each one placed last.
        for last in 0..4 {
            let mut board = Board::new();
            for col in (0..4).filter(|&c| c != last) {
                board = board.drop(col + 1, Player::One).unwrap();
            }
            assert!(board.winner().is_none());
            board = board.drop(last + 1, Player::One).unwrap();
            let (player, line) = board.winner().unwrap();
            assert_eq!(player, Player::One);
            assert_eq!(line, [(5, 1), (5, 2), (5, 3), (5, 4)]);
        }
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board = board.drop(6, Player::Two).unwrap();
        }
        let (player, line) = board.winner().unwrap();
        assert_eq!(player, Player::Two);
        assert_eq!(line, [(2, 6), (3, 6), (4, 6), (5, 6)]);
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "X......",
            "OX.....",
            "OOX....",
            "OOOX...",
        ])
        .unwrap();
        let (player, line) = board.winner().unwrap();
        assert_eq!(player, Player::One);
        assert_eq!(line, [(2, 0), (3, 1), (4, 2), (5, 3)]);
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "......O",
            ".....OX",
            "....OXX",
            "...OXXX",
        ])
        .unwrap();
        let (player, line) = board.winner().unwrap();
        assert_eq!(player, Player::Two);
        assert_eq!(line, [(5, 3), (4, 4), (3, 5), (2, 6)]);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board = board.drop(col, Player::One).unwrap();
        }
        assert!(board.winner().is_none());
        assert!(!board.wins_at(5, 1));
    }

    #[test]
    fn test_wins_at_matches_full_scan() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "OOO....",
            "XXXX...",
        ])
        .unwrap();
        for col in 0..4 {
            assert!(board.wins_at(5, col));
        }
        assert!(!board.wins_at(4, 0));
        assert!(!board.wins_at(0, 0));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows(&[
            "XXOXXOX",
            "OOXOOXO",
            "XXOXXOX",
            "OOXOOXO",
            "XXOXXOX",
            "OOXOOXO",
        ])
        .unwrap();
        assert!(board.winner().is_none());
        assert!(board.legal_columns().is_empty());
        assert!(board.is_draw());
    }

    #[test]
    fn test_winner_and_draw_are_exclusive() {
        let board = Board::from_rows(&[
            "XXOXXOX",
            "OOXOOXO",
            "XXOXXOX",
            "OOXOOXO",
            "XXOXXOX",
            "XXXXOXO",
        ])
        .unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner().map(|(p, _)| p), Some(Player::One));
        assert!(!board.is_draw());
    }

    #[test]
    fn test_place_and_clear_top_roundtrip() {
        let original = Board::new().drop(2, Player::Two).unwrap();
        let mut board = original;
        assert_eq!(board.place(2, Player::One), Some(4));
        board.clear_top(2);
        assert_eq!(board, original);
    }

    #[test]
    fn test_parse_rejects_bad_boards() {
        assert!(matches!(
            Board::from_rows(&["......."]),
            Err(BoardParseError::RowCount(1))
        ));
        let floating = [".......", ".......", ".......", "...X...", ".......", "......."];
        assert!(matches!(
            Board::from_rows(&floating),
            Err(BoardParseError::Floating { row: 3, col: 3 })
        ));
        let unknown = [".......", ".......", ".......", ".......", ".......", "...Z..."];
        assert!(matches!(
            Board::from_rows(&unknown),
            Err(BoardParseError::UnknownSymbol { symbol: 'Z', .. })
        ));
    }

    #[test]
    fn test_display_parses_back() {
        let board = Board::new()
            .drop(3, Player::One)
            .and_then(|b| b.drop(3, Player::Two))
            .and_then(|b| b.drop(0, Player::One))
            .unwrap();
        let parsed: Board = board.to_string().parse().unwrap();
        assert_eq!(parsed, board);
    }
}

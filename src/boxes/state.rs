use super::board::{BoxesBoard, Line};
use crate::error::MoveError;
use crate::game::Player;

/// A boxes game in progress. Closing a box earns another turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxesState {
    board: BoxesBoard,
    current_player: Player,
}

impl BoxesState {
    pub fn initial() -> Self {
        BoxesState {
            board: BoxesBoard::new(),
            current_player: Player::One,
        }
    }

    pub fn board(&self) -> &BoxesBoard {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_complete()
    }

    /// The player with more boxes once every line is drawn; `None` on a tie or
    /// while the game is running.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_terminal() {
            return None;
        }
        let one = self.board.score(Player::One);
        let two = self.board.score(Player::Two);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn apply(&self, line: Line) -> Result<BoxesState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let (board, claimed) = self
            .board
            .draw(line, self.current_player)
            .ok_or_else(|| MoveError::InvalidLine(line.to_string()))?;

        let current_player = if claimed > 0 {
            self.current_player
        } else {
            self.current_player.other()
        };
        Ok(BoxesState {
            board,
            current_player,
        })
    }
}

impl Default for BoxesState {
    fn default() -> Self {
        Self::initial()
    }
}

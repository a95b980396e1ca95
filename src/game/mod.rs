//! Core Connect Four game logic: board representation, player types, and game
//! state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, WinningLine, CENTER, COLS, ROWS, WIN_LENGTH};
pub(crate) use board::DIRECTIONS;
pub use player::Player;
pub use state::{GameOutcome, GameState};

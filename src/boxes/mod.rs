//! The boxes-claiming game (dots and boxes) and its chain-strategy opponent.

pub mod ai;
mod board;
mod state;

pub use ai::boxes_move;
pub use board::{BoxesBoard, Line, BOX_COLS, BOX_ROWS, LINE_COUNT};
pub use state::BoxesState;

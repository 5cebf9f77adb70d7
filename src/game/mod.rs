//! Core Connect Four game logic: board representation, player types, win
//! detection, and the match state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
pub use player::Player;
pub use state::{GameState, MatchStatus, MoveRecord};
pub use win::{has_winner, Direction, WinningLine};

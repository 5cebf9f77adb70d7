//! Four-in-a-row detection.
//!
//! Every cell owned by the player is treated as the origin of a potential run
//! and probed in four directions. Runs extending left or up are found from
//! their other end, so these four cover all alignments.

use tracing::instrument;

use super::board::{Board, Cell};
use super::player::Player;
use crate::error::GameError;

/// Length of a winning run.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same row, increasing column
    Right,
    /// Same column, increasing row
    Down,
    /// `\`
    DownRight,
    /// `/`
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// (row, column) step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// A run of four discs, listed from its origin outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub direction: Direction,
    pub cells: [(usize, usize); RUN_LENGTH],
}

impl WinningLine {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Check whether `player` has four in a row anywhere on the board
pub fn has_winner(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Cell-valued variant of [`has_winner`]; an empty cell names no player
pub fn has_winner_cell(board: &Board, cell: Cell) -> Result<bool, GameError> {
    let player = Player::try_from(cell)?;
    Ok(has_winner(board, player))
}

/// Return the first winning run found for `player`, scanning row by row
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    let target = player.to_cell();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) != Some(target) {
                continue;
            }
            for direction in Direction::ALL {
                if let Some(cells) = run_from(board, row, col, direction, target) {
                    return Some(WinningLine {
                        player,
                        direction,
                        cells,
                    });
                }
            }
        }
    }
    None
}

/// The player with four in a row, if any. Player one is checked first.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::One, Player::Two]
        .into_iter()
        .find(|&player| has_winner(board, player))
}

fn run_from(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    target: Cell,
) -> Option<[(usize, usize); RUN_LENGTH]> {
    let (dr, dc) = direction.delta();
    let mut cells = [(row, col); RUN_LENGTH];
    for (step, slot) in cells.iter_mut().enumerate().skip(1) {
        let r = row.checked_add_signed(dr * step as isize)?;
        let c = col.checked_add_signed(dc * step as isize)?;
        if board.get(r, c)? != target {
            return None;
        }
        *slot = (r, c);
    }
    Some(cells)
}

use std::fmt;

use super::player::Player;
use crate::error::{GameError, MoveRejection};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Smallest side length on which four in a row can exist.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }
}

/// Row-major grid of cells. Row 0 is the top, row `rows - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(GameError::InvalidConfiguration { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GameError::InvalidConfiguration { rows, cols })?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Create an empty 6x7 board
    pub fn standard() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.get(row, col).ok_or(GameError::OutOfBounds {
            row,
            column: col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Non-failing lookup; `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Whether a disc can be dropped into `col`
    pub fn can_drop(&self, col: usize) -> bool {
        col < self.cols && self.cells[col].is_empty()
    }

    /// Row the next disc dropped into `col` would occupy
    pub fn landing_row(&self, col: usize) -> Result<usize, GameError> {
        if col >= self.cols {
            return Err(MoveRejection::ColumnOutOfRange {
                column: col,
                cols: self.cols,
            }
            .into());
        }

        // Discs stack contiguously from the bottom, so the landing row sits
        // directly above the column's current height.
        let height = self.column_height(col);
        if height == self.rows {
            return Err(MoveRejection::ColumnFull { column: col }.into());
        }
        Ok(self.rows - 1 - height)
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        let row = self.landing_row(col)?;
        self.cells[row * self.cols + col] = player.to_cell();
        Ok(row)
    }

    /// Same as [`Board::drop`], for callers holding a raw cell value
    pub fn drop_cell(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        let player = Player::try_from(cell)?;
        self.drop(col, player)
    }

    /// Number of discs in a column
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.cols {
            return 0;
        }
        (0..self.rows)
            .rev()
            .take_while(|&row| !self.cells[row * self.cols + col].is_empty())
            .count()
    }

    /// Columns that still accept a disc, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.can_drop(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.can_drop(col))
    }

    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Copy of the board with its columns reversed
    pub fn mirrored(&self) -> Board {
        let cells = self
            .cells
            .chunks(self.cols)
            .flat_map(|row| row.iter().rev().copied())
            .collect();
        Board {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// One line per row, `0` for empty and `1`/`2` for the players' discs.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                let digit = match cell {
                    Cell::Empty => '0',
                    Cell::PlayerOne => '1',
                    Cell::PlayerTwo => '2',
                };
                write!(f, "{digit}")?;
            }
        }
        Ok(())
    }
}

use tracing::{debug, info};

use super::board::Board;
use super::player::Player;
use super::win::{self, WinningLine};
use crate::config::AppConfig;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl MatchStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

/// What an accepted drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: MatchStatus,
    move_count: usize,
}

impl GameState {
    /// Start a match on an empty `rows` x `cols` board
    pub fn new(rows: usize, cols: usize, first: Player) -> Result<Self, GameError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            current_player: first,
            status: MatchStatus::InProgress,
            move_count: 0,
        })
    }

    /// Standard 6x7 match, player one starts
    pub fn standard() -> Self {
        GameState {
            board: Board::standard(),
            current_player: Player::One,
            status: MatchStatus::InProgress,
            move_count: 0,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, GameError> {
        Self::new(config.board.rows, config.board.cols, config.players.first)
    }

    /// Player whose turn it is. Unchanged once the match is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full); empty once the match is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// The run that decided the match, if it was won
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            MatchStatus::Won(player) => win::winning_line(&self.board, player),
            _ => None,
        }
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, GameError> {
        let mut next = self.clone();
        next.play(column)?;
        Ok(next)
    }

    /// Drop the current player's disc into `column` and advance the match
    pub fn play(&mut self, column: usize) -> Result<MoveRecord, GameError> {
        if self.is_terminal() {
            return Err(GameError::MatchOver);
        }

        let player = self.current_player;
        let row = self.board.drop(column, player)?;
        self.move_count += 1;
        debug!(
            ?player,
            column,
            row,
            move_count = self.move_count,
            "disc dropped\n{}",
            self.board
        );

        if win::has_winner(&self.board, player) {
            self.status = MatchStatus::Won(player);
            info!(?player, moves = self.move_count, "match won");
        } else if self.board.is_full() {
            self.status = MatchStatus::Draw;
            info!(moves = self.move_count, "match drawn");
        } else {
            self.current_player = player.other();
        }

        Ok(MoveRecord {
            player,
            column,
            row,
            status: self.status,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

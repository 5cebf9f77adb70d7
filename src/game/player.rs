use super::board::Cell;
use crate::error::{GameError, MoveRejection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        player.to_cell()
    }
}

impl TryFrom<Cell> for Player {
    type Error = GameError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::PlayerOne => Ok(Player::One),
            Cell::PlayerTwo => Ok(Player::Two),
            Cell::Empty => Err(MoveRejection::EmptyPlayer.into()),
        }
    }
}

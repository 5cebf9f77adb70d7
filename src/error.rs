use std::path::PathBuf;

/// Why a drop was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("column {column} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("an empty cell cannot be played as a disc")]
    EmptyPlayer,
}

/// Errors raised by the board, the win detector and the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),

    #[error("cell ({row}, {column}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        cols: usize,
    },

    #[error("a {rows}x{cols} board cannot hold four in a row (minimum is 4x4)")]
    InvalidConfiguration { rows: usize, cols: usize },

    #[error("the match is over")]
    MatchOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Game(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = GameError::from(MoveRejection::ColumnFull { column: 3 });
        assert_eq!(err.to_string(), "invalid move: column 3 is full");

        let err = GameError::from(MoveRejection::ColumnOutOfRange { column: 9, cols: 7 });
        assert_eq!(
            err.to_string(),
            "invalid move: column 9 is out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = GameError::OutOfBounds {
            row: 6,
            column: 0,
            rows: 6,
            cols: 7,
        };
        assert_eq!(err.to_string(), "cell (6, 0) is outside the 6x7 board");
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = GameError::InvalidConfiguration { rows: 3, cols: 7 };
        assert_eq!(
            err.to_string(),
            "a 3x7 board cannot hold four in a row (minimum is 4x4)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("players.one.name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: players.one.name must not be empty"
        );

        let err = ConfigError::from(GameError::InvalidConfiguration { rows: 2, cols: 2 });
        assert_eq!(
            err.to_string(),
            "a 2x2 board cannot hold four in a row (minimum is 4x4)"
        );
    }
}

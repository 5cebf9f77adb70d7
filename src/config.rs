use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Board, Player, DEFAULT_COLS, DEFAULT_ROWS};

/// Largest side length the terminal board can lay out.
pub const MAX_DIMENSION: usize = 32;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: Player,
    pub one: PlayerStyle,
    pub two: PlayerStyle,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: Player::One,
            one: PlayerStyle {
                name: "Red".into(),
                color: DiscColor::Red,
            },
            two: PlayerStyle {
                name: "Yellow".into(),
                color: DiscColor::Yellow,
            },
        }
    }
}

impl PlayersConfig {
    pub fn style(&self, player: Player) -> &PlayerStyle {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

/// How a player is shown to the people at the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStyle {
    pub name: String,
    pub color: DiscColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscColor {
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
    White,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows > MAX_DIMENSION || self.board.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows and board.cols must be <= {MAX_DIMENSION}"
            )));
        }
        Board::new(self.board.rows, self.board.cols)?;

        let (one, two) = (&self.players.one, &self.players.two);
        if one.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one.name must not be empty".into(),
            ));
        }
        if two.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two.name must not be empty".into(),
            ));
        }
        if one.name == two.name {
            return Err(ConfigError::Validation(
                "players.one.name and players.two.name must differ".into(),
            ));
        }
        if one.color == two.color {
            return Err(ConfigError::Validation(
                "players.one.color and players.two.color must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.players.first, Player::One);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
cols = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.cols, 9);
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.players.one.name, "Red");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_players_section() {
        let toml_str = r#"
[players]
first = "two"
one = { name = "Alice", color = "blue" }
two = { name = "Bob", color = "green" }
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.players.first, Player::Two);
        assert_eq!(config.players.style(Player::One).name, "Alice");
        assert_eq!(config.players.style(Player::Two).color, DiscColor::Green);
    }

    #[test]
    fn test_unknown_color_fails_to_parse() {
        let toml_str = r#"
[players]
one = { name = "Alice", color = "mauve" }
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.board.rows = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Game(GameError::InvalidConfiguration { rows: 3, cols: 7 }))
        ));
    }

    #[test]
    fn test_validation_rejects_huge_board() {
        let mut config = AppConfig::default();
        config.board.cols = MAX_DIMENSION + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.players.two.name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_names() {
        let mut config = AppConfig::default();
        config.players.two.name = "Red".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_colors() {
        let mut config = AppConfig::default();
        config.players.two.color = DiscColor::Red;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 8
cols = 8
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.cols, 8);
        // Others are defaults
        assert_eq!(config.players, PlayersConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 2\n").unwrap();
        assert!(AppConfig::load(&path).is_err());

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            AppConfig::load(&missing),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}

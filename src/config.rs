use std::path::Path;

use crate::error::ConfigError;
use crate::game::Board;

/// Board art configuration. Each row is one line of the grid: `#` wall,
/// ` ` floor, digits mark agent spawns.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub art: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            art: vec![
                "#   0                #".to_string(),
                "#             1      #".to_string(),
            ],
        }
    }
}

/// Live-mode UI configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Idle-tick delay in milliseconds; an elapsed tick steps all agents
    /// with Stay.
    pub tick_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { tick_delay_ms: 200 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            ui: UiConfig::default(),
        }
    }
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::parse(&self.board.art)?;
        if self.ui.tick_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_delay_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board.art.len(), 2);
        assert_eq!(config.ui.tick_delay_ms, 200);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            tick_delay_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.tick_delay_ms, 50);
        // Board falls back to the default corridor
        assert_eq!(config.board.art.len(), 2);
    }

    #[test]
    fn test_zero_tick_delay_rejected() {
        let mut config = AppConfig::default();
        config.ui.tick_delay_ms = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: ui.tick_delay_ms must be > 0"
        );
    }

    #[test]
    fn test_bad_board_art_rejected() {
        let mut config = AppConfig::default();
        config.board.art = vec!["#  #".to_string()];
        assert!(config.validate().is_err());
    }
}

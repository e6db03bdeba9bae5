use std::path::PathBuf;

/// Errors that can occur while parsing board art.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board art is empty")]
    EmptyArt,

    #[error("board art row {row} has width {got}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unrecognized character '{ch}' at row {row}, column {col}")]
    UnknownCharacter { ch: char, row: usize, col: usize },

    #[error("duplicate agent marker '{ch}'")]
    DuplicateMarker { ch: char },

    #[error("board art contains no agent markers")]
    NoAgents,

    #[error("agent markers must cover 0..n without gaps, found {found:?}")]
    NonContiguousMarkers { found: Vec<usize> },
}

/// Errors that can occur while stepping an episode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("episode is already over")]
    EpisodeOver,

    #[error("action batch has {got} entries, agent index {index} is out of range")]
    ActionBatchTooShort { index: usize, got: usize },
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

    #[error("invalid board art: {0}")]
    Board(#[from] BoardError),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::RaggedRows {
            row: 1,
            expected: 22,
            got: 20,
        };
        assert_eq!(
            err.to_string(),
            "board art row 1 has width 20, expected 22"
        );
    }

    #[test]
    fn test_step_error_display() {
        let err = StepError::ActionBatchTooShort { index: 1, got: 1 };
        assert_eq!(
            err.to_string(),
            "action batch has 1 entries, agent index 1 is out of range"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.tick_delay_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.tick_delay_ms must be > 0"
        );
    }

    #[test]
    fn test_config_error_wraps_board_error() {
        let err = ConfigError::from(BoardError::NoAgents);
        assert_eq!(
            err.to_string(),
            "invalid board art: board art contains no agent markers"
        );
    }
}

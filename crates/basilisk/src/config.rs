//! # Game Configuration
//!
//! Loaded once at startup from an optional TOML file; every field
//! falls back to the built-in defaults. Validation happens after
//! loading so a bad file fails fast with a diagnostic instead of a
//! broken board.

use std::path::Path;

use serde::Deserialize;

use basilisk_shared::constants;

use crate::error::{GameError, GameResult};

/// Tuning for the snake's backing queue, in records.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct QueueTuning {
    /// Capacity increment when the snake outgrows its buffer.
    pub grow_step: usize,
    /// Evicted-record slack that triggers compaction.
    pub shrink_at: usize,
}

impl Default for QueueTuning {
    fn default() -> Self {
        Self {
            grow_step: constants::SNAKE_GROW_STEP,
            shrink_at: constants::SNAKE_SHRINK_AT,
        }
    }
}

/// Full game configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board width in columns, border included.
    pub board_width: i16,
    /// Board height in rows, border included.
    pub board_height: i16,
    /// Milliseconds between automatic snake steps.
    pub tick_ms: u64,
    /// Snake length that wins the session.
    pub win_length: usize,
    /// Snake queue tuning.
    pub queue: QueueTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: constants::BOARD_WIDTH,
            board_height: constants::BOARD_HEIGHT,
            tick_ms: constants::TICK_MS,
            win_length: constants::WIN_LENGTH,
            queue: QueueTuning::default(),
        }
    }
}

impl GameConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file is not an error: the defaults apply. A present
    /// but malformed or invalid file is fatal.
    pub fn load(path: &Path) -> GameResult<Self> {
        let config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            let parsed: Self = toml::from_str(&raw)?;
            tracing::info!(path = %path.display(), "configuration loaded");
            parsed
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks that the board is playable.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] when the board is too
    /// small, the tick is zero, or the win length cannot fit in the
    /// playable interior.
    pub fn validate(&self) -> GameResult<()> {
        if self.board_width <= 8 {
            return Err(GameError::InvalidConfig(format!(
                "board_width must be greater than 8, got {}",
                self.board_width
            )));
        }
        if self.board_height <= 8 {
            return Err(GameError::InvalidConfig(format!(
                "board_height must be greater than 8, got {}",
                self.board_height
            )));
        }
        if self.tick_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick_ms must be non-zero".to_string(),
            ));
        }

        let playable = self.playable_cells();
        if self.win_length <= 3 || self.win_length >= playable {
            return Err(GameError::InvalidConfig(format!(
                "win_length must be in 4..{playable}, got {}",
                self.win_length
            )));
        }
        Ok(())
    }

    /// Number of cells in the playable interior.
    ///
    /// The playable interior is rows `2..=height-2` by columns
    /// `2..=width-2`: the border ring and the cells flush against it
    /// are lethal.
    #[must_use]
    pub fn playable_cells(&self) -> usize {
        let rows = usize::from(self.board_height as u16).saturating_sub(3);
        let cols = usize::from(self.board_width as u16).saturating_sub(3);
        rows * cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_width, 64);
        assert_eq!(config.board_height, 16);
    }

    #[test]
    fn test_rejects_tiny_board() {
        let config = GameConfig {
            board_width: 8,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_unwinnable_length() {
        let config = GameConfig {
            win_length: 3,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            win_length: 10_000,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parses_partial_toml() {
        let parsed: GameConfig =
            toml::from_str("tick_ms = 120\n[queue]\ngrow_step = 8\n").expect("parse");
        assert_eq!(parsed.tick_ms, 120);
        assert_eq!(parsed.queue.grow_step, 8);
        // Untouched fields keep their defaults.
        assert_eq!(parsed.board_width, 64);
        assert_eq!(parsed.queue.shrink_at, 16);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            GameConfig::load(Path::new("/nonexistent/basilisk.toml")).expect("defaults");
        assert_eq!(config.win_length, GameConfig::default().win_length);
    }
}

//! # Game Error Types
//!
//! All errors that can end a session abnormally.

use thiserror::Error;

/// Errors that can occur outside normal game flow.
#[derive(Error, Debug)]
pub enum GameError {
    /// The configuration file was readable but semantically invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be parsed.
    #[error("malformed configuration file: {0}")]
    MalformedConfig(#[from] toml::de::Error),

    /// Writing to or configuring the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// The keyboard stream shut down while a consumer still needed it.
    #[error("keyboard stream disconnected")]
    InputClosed,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

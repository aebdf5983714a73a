//! Error types for playback management
//!
//! Queue navigation itself never fails; these cover host-facing input such
//! as persisted preferences and configuration.

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Persisted playback mode name is not recognized
    #[error("Unknown playback mode: {0}")]
    UnknownMode(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

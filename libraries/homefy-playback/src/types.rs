//! Core types for playback management

use crate::error::{PlaybackError, Result};
use crate::mode::PlaybackMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of tracks remembered for "previous"
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// Default window in which a second play/pause press skips ahead
pub const DEFAULT_DOUBLE_PRESS_THRESHOLD_MS: u64 = 500;

/// Player state as seen by the host controller
///
/// The queue engine only knows whether a track is assigned; pausing is a
/// concern of the audio output, so it lives here and not in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// No track assigned
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for the playback engine and controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 100)
    pub history_size: usize,

    /// Mode active before the user cycles it (default: Random)
    pub initial_mode: PlaybackMode,

    /// Fixed seed for random mode; `None` seeds from the OS
    pub seed: Option<u64>,

    /// Second play/pause press within this window skips to the next track
    /// (default: 500 ms, 0 disables)
    pub double_press_threshold_ms: u64,
}

impl PlaybackConfig {
    /// Check values a host may have loaded from a preference file
    pub fn validate(&self) -> Result<()> {
        if self.history_size == 0 {
            return Err(PlaybackError::InvalidConfig(
                "history_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Double-press window as a `Duration`
    pub fn double_press_threshold(&self) -> Duration {
        Duration::from_millis(self.double_press_threshold_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            initial_mode: PlaybackMode::Random,
            seed: None,
            double_press_threshold_ms: DEFAULT_DOUBLE_PRESS_THRESHOLD_MS,
        }
    }
}

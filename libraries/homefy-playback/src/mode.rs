//! Playback modes
//!
//! Each mode decides what a new play request puts in the upcoming queue and
//! which track `next()`/`previous()` move to. The rules are plain functions
//! of the state the engine hands in; the engine stores whatever they return.

use crate::error::PlaybackError;
use crate::history::History;
use crate::request::PlayRequest;
use homefy_core::Track;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// How the engine picks the following track
///
/// Declaration order is the cycle order used by
/// [`cycle`](PlaybackMode::cycle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// Play the context once, then stop advancing
    Normal,

    /// Loop the whole context
    Repeat,

    /// Loop the current track
    RepeatSingle,

    /// Pick any track of the last request
    #[default]
    Random,
}

impl PlaybackMode {
    /// All modes in cycle order
    pub const ALL: [PlaybackMode; 4] = [
        PlaybackMode::Normal,
        PlaybackMode::Repeat,
        PlaybackMode::RepeatSingle,
        PlaybackMode::Random,
    ];

    /// Next mode in cycle order, wrapping after `Random`
    pub fn cycle(self) -> Self {
        match self {
            PlaybackMode::Normal => PlaybackMode::Repeat,
            PlaybackMode::Repeat => PlaybackMode::RepeatSingle,
            PlaybackMode::RepeatSingle => PlaybackMode::Random,
            PlaybackMode::Random => PlaybackMode::Normal,
        }
    }

    /// Stable name used for persisted preferences
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackMode::Normal => "normal",
            PlaybackMode::Repeat => "repeat",
            PlaybackMode::RepeatSingle => "repeat_single",
            PlaybackMode::Random => "random",
        }
    }

    /// Seed `upcoming` for a fresh play request
    ///
    /// `upcoming` is expected to be empty. Sequential modes take the rotated
    /// context minus the target, which is already playing.
    pub(crate) fn on_play_request(self, request: &PlayRequest, upcoming: &mut VecDeque<Track>) {
        match self {
            PlaybackMode::Normal | PlaybackMode::Repeat => {
                request.fill(upcoming);
                if upcoming.front() == Some(request.target()) {
                    upcoming.pop_front();
                }
            }
            PlaybackMode::RepeatSingle | PlaybackMode::Random => {}
        }
    }

    /// Candidate to follow `current`, or `None` when there is nothing left
    pub(crate) fn next_track<R: Rng>(
        self,
        current: &Track,
        upcoming: &mut VecDeque<Track>,
        request: &PlayRequest,
        rng: &mut R,
    ) -> Option<Track> {
        match self {
            PlaybackMode::Normal => upcoming.pop_front(),
            PlaybackMode::Repeat => {
                if let Some(track) = upcoming.pop_front() {
                    return Some(track);
                }
                // Start the request over: the target plays again and the
                // rest of the context is queued behind it.
                upcoming.clear();
                self.on_play_request(request, upcoming);
                Some(request.target().clone())
            }
            PlaybackMode::RepeatSingle => Some(current.clone()),
            PlaybackMode::Random => Some(request.pick_any(rng).clone()),
        }
    }

    /// Whether stepping back keeps the current track queued to play again
    pub(crate) fn requeues_on_previous(self) -> bool {
        !matches!(self, PlaybackMode::RepeatSingle)
    }

    /// Track to step back to, or `None` when there is no history
    pub(crate) fn previous_track(self, current: &Track, history: &mut History) -> Option<Track> {
        match self {
            PlaybackMode::RepeatSingle => Some(current.clone()),
            PlaybackMode::Normal | PlaybackMode::Repeat | PlaybackMode::Random => history.pop(),
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaybackMode {
    type Err = PlaybackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| PlaybackError::UnknownMode(s.to_string()))
    }
}

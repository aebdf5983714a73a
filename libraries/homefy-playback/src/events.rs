//! Playback Events
//!
//! The engine records one event per observable change and the host drains
//! them. Observers register with the host controller, never with the
//! engine.

use crate::mode::PlaybackMode;
use homefy_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A track was assigned for playback
    ///
    /// Also emitted when the same track is assigned again (repeat single),
    /// which tells the audio output to restart it.
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the track that was current before, if any
        previous_track_id: Option<TrackId>,
    },

    /// No track is assigned any more
    Stopped,

    /// User queue changed
    QueueChanged {
        /// Tracks waiting in the user queue
        length: usize,
    },

    /// Active playback mode changed
    ModeChanged { mode: PlaybackMode },

    /// Audio output paused by the controller
    Paused,

    /// Audio output resumed by the controller
    Resumed,
}

/// Receiver of playback events
///
/// Closures taking `&PlaybackEvent` implement this directly.
pub trait PlaybackObserver {
    fn on_event(&mut self, event: &PlaybackEvent);
}

impl<F> PlaybackObserver for F
where
    F: FnMut(&PlaybackEvent),
{
    fn on_event(&mut self, event: &PlaybackEvent) {
        self(event);
    }
}

/// Handle returned on subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

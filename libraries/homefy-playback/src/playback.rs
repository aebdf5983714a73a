//! Playback queue engine
//!
//! Owns the current track, the two-tier queue, history and the active mode,
//! and moves between tracks on `next()`/`previous()`.

use crate::{
    error::Result,
    events::PlaybackEvent,
    history::History,
    mode::PlaybackMode,
    queue::Queue,
    request::PlayRequest,
    types::PlaybackConfig,
};
use homefy_core::Track;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Playback queue engine
///
/// Single-owner, synchronous state machine with two states: stopped
/// (no current track) and playing a track. Every operation is total: a
/// missing next or previous track shows up as "nothing changed" or as a
/// stop, never as an error. Pausing belongs to the audio output and is not
/// modelled here.
///
/// The engine is not synchronized; hosts driving it from several threads
/// must serialize access themselves.
#[derive(Debug)]
pub struct Playback<R = StdRng> {
    current: Option<Track>,
    queue: Queue,
    history: History,
    mode: PlaybackMode,
    last_request: Option<PlayRequest>,
    rng: R,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl Playback<StdRng> {
    /// Create an engine seeded from `config.seed`, or from the OS
    pub fn new(config: PlaybackConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Validate `config` before creating the engine
    pub fn try_new(config: PlaybackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl Default for Playback<StdRng> {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl<R: Rng> Playback<R> {
    /// Create an engine drawing random picks from `rng`
    ///
    /// `config.seed` is ignored; the caller owns seeding.
    pub fn with_rng(config: PlaybackConfig, rng: R) -> Self {
        Self {
            current: None,
            queue: Queue::new(),
            history: History::new(config.history_size),
            mode: config.initial_mode,
            last_request: None,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Play `track`, continuing through `context`
    ///
    /// Replaces the upcoming queue according to the active mode and drops
    /// anything the user had queued. History is kept.
    pub fn play_song(&mut self, track: Track, context: Vec<Track>) {
        let request = PlayRequest::new(track, context);
        debug!(
            track_id = %request.target().id(),
            context_len = request.context().len(),
            mode = %self.mode,
            "New play request"
        );

        self.queue.clear();
        self.mode.on_play_request(&request, self.queue.upcoming_mut());

        let previous = self.current.replace(request.target().clone());
        self.emit_track_changed(request.target(), previous.as_ref());
        self.last_request = Some(request);
    }

    /// Play a track without a browsing context
    pub fn play_single(&mut self, track: Track) {
        self.play_song(track, Vec::new());
    }

    /// Stop playback
    ///
    /// Clears the current track but keeps queues, history and the last
    /// request.
    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.pending_events.push(PlaybackEvent::Stopped);
        }
    }

    /// Advance to the next track
    ///
    /// User-queued tracks come first, then whatever the active mode picks.
    /// When the mode has nothing left (normal mode at the end of its
    /// context) nothing changes: the last track stays current and history
    /// is not touched.
    pub fn next(&mut self) {
        let Some(current) = self.current.clone() else {
            trace!("next() without a current track");
            return;
        };

        let candidate = match self.queue.pop_user() {
            Some(track) => Some(track),
            None => match &self.last_request {
                Some(request) => self.mode.next_track(
                    &current,
                    self.queue.upcoming_mut(),
                    request,
                    &mut self.rng,
                ),
                None => None,
            },
        };

        let Some(next) = candidate else {
            debug!(track_id = %current.id(), mode = %self.mode, "Nothing left to play, staying on current track");
            return;
        };

        if self.history.push_unless_latest(&current) {
            trace!(track_id = %current.id(), history_len = self.history.len(), "Added to history");
        }
        trace!(from = %current.id(), to = %next.id(), "Advancing");

        self.emit_track_changed(&next, Some(&current));
        self.current = Some(next);
    }

    /// Step back to the previously played track
    ///
    /// The current track is queued to play again next, so stepping back and
    /// then forward returns to it. With no history left playback stops.
    /// Repeat-single mode stays on the current track and leaves queues and
    /// history alone.
    pub fn previous(&mut self) {
        let Some(current) = self.current.clone() else {
            trace!("previous() without a current track");
            return;
        };

        if self.mode.requeues_on_previous() && self.queue.requeue(current.clone()) {
            self.emit_queue_changed();
        }

        match self.mode.previous_track(&current, &mut self.history) {
            Some(previous) => {
                self.emit_track_changed(&previous, Some(&current));
                self.current = Some(previous);
            }
            None => {
                debug!(track_id = %current.id(), "No history left, stopping");
                self.current = None;
                self.pending_events.push(PlaybackEvent::Stopped);
            }
        }
    }

    // ===== Queue Management =====

    /// Queue tracks to play before anything queued earlier
    ///
    /// The list keeps its order: its first track plays on the next
    /// `next()`.
    pub fn queue_songs(&mut self, tracks: Vec<Track>) {
        if tracks.is_empty() {
            return;
        }
        debug!(count = tracks.len(), "Queueing tracks");
        self.queue.prepend_user(tracks);
        self.emit_queue_changed();
    }

    /// Queue a single track to play next
    pub fn queue_song(&mut self, track: Track) {
        self.queue_songs(vec![track]);
    }

    // ===== Playback Mode =====

    /// Switch to the next mode in cycle order and return it
    ///
    /// Current track, upcoming queue, history and the last request are left
    /// as they are; only later `next()`/`previous()` calls change behavior.
    pub fn cycle_playback_mode(&mut self) -> PlaybackMode {
        let mode = self.mode.cycle();
        self.set_playback_mode(mode);
        mode
    }

    /// Select a mode directly, e.g. when restoring a saved preference
    pub fn set_playback_mode(&mut self, mode: PlaybackMode) {
        if self.mode == mode {
            return;
        }
        debug!(from = %self.mode, to = %mode, "Playback mode changed");
        self.mode = mode;
        self.pending_events.push(PlaybackEvent::ModeChanged { mode });
    }

    // ===== State Queries =====

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Track currently assigned for playback
    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Whether a track is assigned
    pub fn has_playback(&self) -> bool {
        self.current.is_some()
    }

    /// Previously played tracks, oldest first
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Tracks the active mode has scheduled, next first
    pub fn upcoming(&self) -> &VecDeque<Track> {
        self.queue.upcoming()
    }

    /// Tracks queued by the user, next first
    pub fn user_queue(&self) -> &VecDeque<Track> {
        self.queue.user()
    }

    /// Most recent play request
    pub fn last_request(&self) -> Option<&PlayRequest> {
        self.last_request.as_ref()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_track_changed(&mut self, track: &Track, previous: Option<&Track>) {
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: track.id().clone(),
            previous_track_id: previous.map(|t| t.id().clone()),
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.user().len(),
        });
    }
}

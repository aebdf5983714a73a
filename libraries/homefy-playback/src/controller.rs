//! Host-side playback controller
//!
//! Wraps the queue engine with what the UI and the audio output need on top
//! of it: play/pause state, the observer list, and the audio callbacks.

use crate::{
    events::{ObserverId, PlaybackEvent, PlaybackObserver},
    mode::PlaybackMode,
    playback::Playback,
    types::{PlaybackConfig, PlayerState},
};
use homefy_core::Track;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Owns one engine and fans its events out to registered observers
///
/// UI callbacks and audio-completion callbacks both go through here. After
/// every call the engine's events are delivered to each observer in
/// registration order.
pub struct PlaybackController<R = StdRng> {
    engine: Playback<R>,
    observers: Vec<(ObserverId, Box<dyn PlaybackObserver>)>,
    next_observer_id: u64,
    state: PlayerState,
    last_play_press: Option<Instant>,
    double_press_threshold: Duration,
}

impl PlaybackController<StdRng> {
    /// Create a controller with a fresh engine
    pub fn new(config: PlaybackConfig) -> Self {
        let threshold = config.double_press_threshold();
        Self::from_engine(Playback::new(config), threshold)
    }
}

impl Default for PlaybackController<StdRng> {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl<R: Rng> PlaybackController<R> {
    /// Wrap an existing engine
    pub fn from_engine(engine: Playback<R>, double_press_threshold: Duration) -> Self {
        let state = if engine.has_playback() {
            PlayerState::Playing
        } else {
            PlayerState::Stopped
        };

        Self {
            engine,
            observers: Vec::new(),
            next_observer_id: 0,
            state,
            last_play_press: None,
            double_press_threshold,
        }
    }

    // ===== Observers =====

    /// Register an observer for all future events
    pub fn subscribe(&mut self, observer: impl PlaybackObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns whether it was registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ===== Playback Control =====

    /// Play `track`, continuing through `context` if one is given
    pub fn play(&mut self, track: Track, context: Option<Vec<Track>>) {
        match context {
            Some(context) => self.engine.play_song(track, context),
            None => self.engine.play_single(track),
        }
        self.state = PlayerState::Playing;
        self.publish(None);
    }

    /// Play/pause button
    ///
    /// Ignored while stopped. A second press within the double-press window
    /// skips to the next track instead of toggling.
    pub fn pause_resume(&mut self, now: Instant) {
        if !self.engine.has_playback() {
            return;
        }

        if let Some(last) = self.last_play_press {
            if now.saturating_duration_since(last) < self.double_press_threshold {
                debug!("Double press on play/pause, skipping to next track");
                self.next();
                return;
            }
        }
        self.last_play_press = Some(now);

        let event = match self.state {
            PlayerState::Playing => {
                self.state = PlayerState::Paused;
                PlaybackEvent::Paused
            }
            PlayerState::Paused | PlayerState::Stopped => {
                self.state = PlayerState::Playing;
                PlaybackEvent::Resumed
            }
        };
        self.publish(Some(event));
    }

    /// Skip to the next track
    pub fn next(&mut self) {
        self.engine.next();
        self.sync_state();
        self.publish(None);
    }

    /// Go back to the previous track
    pub fn previous(&mut self) {
        self.engine.previous();
        self.sync_state();
        self.publish(None);
    }

    /// Stop playback
    pub fn stop(&mut self) {
        self.engine.stop();
        self.state = PlayerState::Stopped;
        self.publish(None);
    }

    /// Queue tracks to play next
    pub fn queue(&mut self, tracks: Vec<Track>) {
        self.engine.queue_songs(tracks);
        self.publish(None);
    }

    /// Queue one track to play next
    pub fn queue_track(&mut self, track: Track) {
        self.engine.queue_song(track);
        self.publish(None);
    }

    /// Cycle the playback mode, returning the new one for display
    pub fn cycle_playback_mode(&mut self) -> PlaybackMode {
        let mode = self.engine.cycle_playback_mode();
        self.publish(None);
        mode
    }

    /// Restore a saved playback mode
    pub fn set_playback_mode(&mut self, mode: PlaybackMode) {
        self.engine.set_playback_mode(mode);
        self.publish(None);
    }

    // ===== Audio Output Callbacks =====

    /// The audio output finished the current track
    ///
    /// If the engine has nothing left to play the output stops, while the
    /// engine keeps the finished track as current.
    pub fn on_track_completed(&mut self) {
        self.engine.next();
        let events = self.engine.drain_events();
        let advanced = events
            .iter()
            .any(|event| matches!(event, PlaybackEvent::TrackChanged { .. }));

        self.dispatch(&events);
        if !advanced && self.state != PlayerState::Stopped {
            debug!("End of playback reached");
            self.state = PlayerState::Stopped;
            self.dispatch(&[PlaybackEvent::Stopped]);
        }
    }

    /// The audio output could not play the current track
    pub fn on_track_failed(&mut self, reason: &str) {
        warn!(
            track_id = ?self.engine.current().map(|t| t.id().as_str()),
            reason,
            "Track failed to play, skipping"
        );
        self.next();
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlayerState::Paused
    }

    /// Track shown as "now playing"
    pub fn now_playing(&self) -> Option<&Track> {
        self.engine.current()
    }

    /// Read-only access to the queue engine
    pub fn engine(&self) -> &Playback<R> {
        &self.engine
    }

    fn sync_state(&mut self) {
        if self.engine.has_playback() {
            // Skipping always starts the new track
            self.state = PlayerState::Playing;
        } else {
            self.state = PlayerState::Stopped;
        }
    }

    /// Deliver engine events, then `extra`, to every observer
    fn publish(&mut self, extra: Option<PlaybackEvent>) {
        let mut events = self.engine.drain_events();
        events.extend(extra);
        self.dispatch(&events);
    }

    fn dispatch(&mut self, events: &[PlaybackEvent]) {
        for event in events {
            for (_, observer) in &mut self.observers {
                observer.on_event(event);
            }
        }
    }
}

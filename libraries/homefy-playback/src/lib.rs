//! Homefy - Playback Queue Engine
//!
//! Platform-agnostic playback queue management for Homefy.
//!
//! This crate provides:
//! - Play requests that continue forward from the selected track
//! - Two-tier queue (user queue + upcoming)
//! - Bounded playback history for "previous"
//! - Playback modes (Normal, Repeat, RepeatSingle, Random)
//! - Event buffering and an observer-dispatching host controller
//!
//! # Architecture
//!
//! `homefy-playback` does no I/O:
//! - No audio decoding or output
//! - No network access
//! - No persistence
//!
//! The host owns one [`PlaybackController`] (or a bare [`Playback`]) and
//! passes it to whatever needs playback control.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use homefy_core::Track;
//! use homefy_playback::{Playback, PlaybackConfig, PlaybackMode};
//!
//! let album: Vec<Track> = (1..=3)
//!     .map(|n| {
//!         Track::builder(format!("s{}", n), format!("Song {}", n))
//!             .track_number(n)
//!             .build()
//!             .unwrap()
//!     })
//!     .collect();
//!
//! let mut playback = Playback::new(PlaybackConfig {
//!     initial_mode: PlaybackMode::Normal,
//!     ..Default::default()
//! });
//!
//! // User taps the second song of the album
//! playback.play_song(album[1].clone(), album.clone());
//! assert_eq!(playback.current().unwrap().id().as_str(), "s2");
//!
//! playback.next();
//! assert_eq!(playback.current().unwrap().id().as_str(), "s3");
//!
//! // Earlier tracks wrap around to the end
//! playback.next();
//! assert_eq!(playback.current().unwrap().id().as_str(), "s1");
//! ```
//!
//! # Example: Observers
//!
//! ```rust
//! use homefy_core::Track;
//! use homefy_playback::{PlaybackController, PlaybackEvent};
//!
//! let mut controller = PlaybackController::default();
//! controller.subscribe(|event: &PlaybackEvent| {
//!     if let PlaybackEvent::TrackChanged { track_id, .. } = event {
//!         println!("now playing {}", track_id);
//!     }
//! });
//!
//! let track = Track::builder("t1", "Single").build().unwrap();
//! controller.play(track, None);
//! ```

mod controller;
mod error;
mod events;
mod history;
mod mode;
mod playback;
mod queue;
mod request;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{ObserverId, PlaybackEvent, PlaybackObserver};
pub use history::History;
pub use mode::PlaybackMode;
pub use playback::Playback;
pub use request::PlayRequest;
pub use types::{PlaybackConfig, PlayerState};

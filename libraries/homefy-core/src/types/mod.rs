/// Domain types for Homefy
mod audio;
mod ids;
mod track;

pub use audio::AudioFormat;
pub use ids::TrackId;
pub use track::{
    format_seconds, tracks_from_json, Track, TrackBuilder, UNKNOWN_GENRE, UNKNOWN_TRACK_NUMBER,
};

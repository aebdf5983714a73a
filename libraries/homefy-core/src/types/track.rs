/// Track domain type
use crate::error::{CoreError, Result};
use crate::types::{AudioFormat, TrackId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Track number reported for tracks without album ordering
pub const UNKNOWN_TRACK_NUMBER: i32 = -1;

/// Genre reported when the catalog has none
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Playable catalog track
///
/// Tracks are built once from catalog data and never change afterwards.
/// Identity is the catalog id alone: two values with the same id are the
/// same track, whatever their metadata says.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TrackRecord", into = "TrackRecord")]
pub struct Track {
    id: TrackId,
    title: String,
    artist: String,
    album: String,
    track_number: i32,
    /// Whole seconds, never zero
    length: u64,
    genre: String,
    bitrate: u32,
    sample_rate: u32,
    channels: String,
    format: String,
}

impl Track {
    /// Start building a track from its catalog id and title
    pub fn builder(id: impl Into<String>, title: impl Into<String>) -> TrackBuilder {
        TrackBuilder::new(id.into(), title.into())
    }

    /// Parse a single track from catalog JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn id(&self) -> &TrackId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    /// Position on the album, `-1` when unknown
    pub fn track_number(&self) -> i32 {
        self.track_number
    }

    /// Whether the catalog knows the album position
    pub fn has_track_number(&self) -> bool {
        self.track_number > 0
    }

    /// Length in whole seconds (at least 1)
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Length as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.length)
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Bitrate in kbps as reported by the catalog
    pub fn bitrate(&self) -> u32 {
        self.bitrate
    }

    /// Sample rate in Hz as reported by the catalog
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> &str {
        &self.channels
    }

    /// Raw codec description from the catalog
    pub fn format_description(&self) -> &str {
        &self.format
    }

    /// Detected container/codec family
    pub fn audio_format(&self) -> Option<AudioFormat> {
        AudioFormat::from_description(&self.format)
    }

    /// MIME type for the platform player, if the codec is recognized
    pub fn mime_type(&self) -> Option<&'static str> {
        self.audio_format().map(AudioFormat::mime_type)
    }

    /// Download file extension, if the codec is recognized
    pub fn file_extension(&self) -> Option<&'static str> {
        self.audio_format().map(AudioFormat::extension)
    }

    /// Length rendered as `MM:SS`
    pub fn formatted_length(&self) -> String {
        format_seconds(self.length)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Library listing order: album, track number, artist, title
///
/// The id is the final tie-break so that ordering stays consistent with
/// equality; a catalog never reports two metadata sets for one id.
impl Ord for Track {
    fn cmp(&self, other: &Self) -> Ordering {
        self.album
            .cmp(&other.album)
            .then(self.track_number.cmp(&other.track_number))
            .then_with(|| self.artist.cmp(&other.artist))
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Track {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Render whole seconds as `MM:SS`
///
/// Minutes are not wrapped into hours: 3725 seconds is `62:05`.
pub fn format_seconds(seconds: u64) -> String {
    let minutes = seconds / 60;
    format!("{:02}:{:02}", minutes, seconds - minutes * 60)
}

/// Parse a catalog listing (a JSON array of tracks)
pub fn tracks_from_json(json: &str) -> Result<Vec<Track>> {
    Ok(serde_json::from_str(json)?)
}

/// Builder for [`Track`]
///
/// Fields not set fall back to the catalog defaults: unknown track number,
/// `"Unknown"` genre, one second length.
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    record: TrackRecord,
}

impl TrackBuilder {
    fn new(id: String, title: String) -> Self {
        Self {
            record: TrackRecord {
                id,
                track: UNKNOWN_TRACK_NUMBER,
                title,
                artist: String::new(),
                album: String::new(),
                genre: UNKNOWN_GENRE.to_string(),
                length: 1,
                bitrate: 0,
                samplerate: 0,
                channels: String::new(),
                format: String::new(),
            },
        }
    }

    #[must_use]
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.record.artist = artist.into();
        self
    }

    #[must_use]
    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.record.album = album.into();
        self
    }

    #[must_use]
    pub fn track_number(mut self, track_number: i32) -> Self {
        self.record.track = track_number;
        self
    }

    /// Length in seconds; zero is raised to one
    #[must_use]
    pub fn length(mut self, seconds: u64) -> Self {
        self.record.length = seconds;
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.record.genre = genre.into();
        self
    }

    #[must_use]
    pub fn bitrate(mut self, kbps: u32) -> Self {
        self.record.bitrate = kbps;
        self
    }

    #[must_use]
    pub fn sample_rate(mut self, hz: u32) -> Self {
        self.record.samplerate = hz;
        self
    }

    #[must_use]
    pub fn channels(mut self, channels: impl Into<String>) -> Self {
        self.record.channels = channels.into();
        self
    }

    /// Codec description as the catalog reports it (e.g. `"FLAC"`)
    #[must_use]
    pub fn format(mut self, description: impl Into<String>) -> Self {
        self.record.format = description.into();
        self
    }

    /// Validate and build the track
    pub fn build(self) -> Result<Track> {
        Track::try_from(self.record)
    }
}

/// Wire shape of a track in the catalog JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrackRecord {
    id: String,
    #[serde(default = "unknown_track_number")]
    track: i32,
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    album: String,
    #[serde(default = "unknown_genre")]
    genre: String,
    #[serde(default)]
    length: u64,
    #[serde(default)]
    bitrate: u32,
    #[serde(default)]
    samplerate: u32,
    #[serde(default)]
    channels: String,
    #[serde(rename = "type", default)]
    format: String,
}

fn unknown_track_number() -> i32 {
    UNKNOWN_TRACK_NUMBER
}

fn unknown_genre() -> String {
    UNKNOWN_GENRE.to_string()
}

impl TryFrom<TrackRecord> for Track {
    type Error = CoreError;

    fn try_from(record: TrackRecord) -> Result<Self> {
        if record.id.is_empty() {
            return Err(CoreError::invalid_input("track id must not be empty"));
        }

        Ok(Self {
            id: TrackId::new(record.id),
            title: record.title,
            artist: record.artist,
            album: record.album,
            track_number: record.track,
            length: record.length.max(1),
            genre: record.genre,
            bitrate: record.bitrate,
            sample_rate: record.samplerate,
            channels: record.channels,
            format: record.format,
        })
    }
}

impl From<Track> for TrackRecord {
    fn from(track: Track) -> Self {
        Self {
            id: track.id.as_str().to_string(),
            track: track.track_number,
            title: track.title,
            artist: track.artist,
            album: track.album,
            genre: track.genre,
            length: track.length,
            bitrate: track.bitrate,
            samplerate: track.sample_rate,
            channels: track.channels,
            format: track.format,
        }
    }
}

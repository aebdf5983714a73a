/// Audio-related types
use serde::{Deserialize, Serialize};

/// Container/codec family of a catalog track
///
/// The catalog reports a free-form codec description such as
/// `"MPEG-1 Layer 3"` or `"FLAC 16 bits"`; only its prefix is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mpeg,
    Aac,
    Flac,
    Wma,
    Wav,
    Ogg,
}

impl AudioFormat {
    /// Recognized description prefixes, checked in order
    const PREFIXES: [(&'static str, AudioFormat); 6] = [
        ("MPEG-", AudioFormat::Mpeg),
        ("AAC", AudioFormat::Aac),
        ("FLAC", AudioFormat::Flac),
        ("ASF", AudioFormat::Wma),
        ("WAV", AudioFormat::Wav),
        ("Ogg", AudioFormat::Ogg),
    ];

    /// Detect the format from the catalog's codec description
    pub fn from_description(description: &str) -> Option<Self> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| description.starts_with(prefix))
            .map(|(_, format)| *format)
    }

    /// MIME type handed to the platform media player
    pub fn mime_type(self) -> &'static str {
        match self {
            AudioFormat::Mpeg => "audio/mpeg",
            AudioFormat::Aac => "audio/mp4",
            AudioFormat::Flac => "audio/flac",
            AudioFormat::Wma => "audio/x-ms-wma",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Ogg => "audio/ogg",
        }
    }

    /// File extension used when a track is downloaded
    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Mpeg => "mp3",
            AudioFormat::Aac => "m4a",
            AudioFormat::Flac => "flac",
            AudioFormat::Wma => "wma",
            AudioFormat::Wav => "wav",
            AudioFormat::Ogg => "ogg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_prefixes() {
        assert_eq!(
            AudioFormat::from_description("MPEG-1 Layer 3"),
            Some(AudioFormat::Mpeg)
        );
        assert_eq!(
            AudioFormat::from_description("FLAC 24 bits"),
            Some(AudioFormat::Flac)
        );
        assert_eq!(
            AudioFormat::from_description("ASF (audio)"),
            Some(AudioFormat::Wma)
        );
        assert_eq!(
            AudioFormat::from_description("Ogg Vorbis"),
            Some(AudioFormat::Ogg)
        );
    }

    #[test]
    fn unknown_description_has_no_format() {
        assert_eq!(AudioFormat::from_description("Opus"), None);
        assert_eq!(AudioFormat::from_description(""), None);
        // Prefix match is case sensitive, like the catalog output
        assert_eq!(AudioFormat::from_description("flac"), None);
    }

    #[test]
    fn mime_and_extension_agree() {
        assert_eq!(AudioFormat::Aac.mime_type(), "audio/mp4");
        assert_eq!(AudioFormat::Aac.extension(), "m4a");
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(AudioFormat::Wav.extension(), "wav");
    }
}

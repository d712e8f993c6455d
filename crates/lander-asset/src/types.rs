//! Asset type definitions

use thiserror::Error;

/// The two independent asset namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Audio,
}

/// Audio encodings the game ships, in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    OggVorbis,
    Mpeg,
}

impl AudioFormat {
    /// Probe order used by [`crate::detect_audio_support`]
    pub const PREFERENCE: [AudioFormat; 2] = [AudioFormat::OggVorbis, AudioFormat::Mpeg];

    /// MIME type handed to the host's capability query
    pub fn mime(&self) -> &'static str {
        match self {
            AudioFormat::OggVorbis => "audio/ogg; codecs=\"vorbis\"",
            AudioFormat::Mpeg => "audio/mpeg",
        }
    }

    /// File extension appended to audio base sources, dot included
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::OggVorbis => ".ogg",
            AudioFormat::Mpeg => ".mp3",
        }
    }
}

/// A load-completion signal for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub kind: AssetKind,
    pub key: String,
}

/// Loaded/total counters for one asset kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn is_complete(&self) -> bool {
        self.loaded == self.total
    }
}

/// Why an asset was not registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("{kind:?} asset '{key}' is already registered")]
    AlreadyRegistered { kind: AssetKind, key: String },

    #[error("no supported audio codec, '{key}' skipped")]
    UnsupportedCodec { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_order() {
        assert_eq!(AudioFormat::PREFERENCE[0], AudioFormat::OggVorbis);
        assert_eq!(AudioFormat::PREFERENCE[1], AudioFormat::Mpeg);
        assert_eq!(AudioFormat::OggVorbis.extension(), ".ogg");
        assert_eq!(AudioFormat::Mpeg.extension(), ".mp3");
    }

    #[test]
    fn test_empty_progress_is_complete() {
        assert!(LoadProgress::default().is_complete());
        assert!(!LoadProgress { loaded: 1, total: 2 }.is_complete());
    }
}

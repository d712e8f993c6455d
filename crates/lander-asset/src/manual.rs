//! Host that completes loads only when told to
//!
//! Payloads are the source strings themselves. Used by tests and by the
//! headless runner, where nothing needs real pixels or samples.

use crate::handle::AssetSlot;
use crate::host::{mime_essence, AssetHost};

/// An asset host driven entirely by explicit `complete_*` calls
#[derive(Debug, Default)]
pub struct ManualHost {
    codecs: Vec<String>,
    images: Vec<(String, AssetSlot<String>)>,
    sounds: Vec<(String, AssetSlot<String>)>,
}

impl ManualHost {
    /// A host that reports support for the given MIME essences
    pub fn with_codecs(codecs: &[&str]) -> Self {
        Self {
            codecs: codecs.iter().map(|c| mime_essence(c)).collect(),
            ..Self::default()
        }
    }

    /// A host that can play Ogg Vorbis and MPEG audio
    pub fn new() -> Self {
        Self::with_codecs(&["audio/ogg", "audio/mpeg"])
    }

    /// Sources of images that have been requested
    pub fn image_sources(&self) -> Vec<&str> {
        self.images.iter().map(|(s, _)| s.as_str()).collect()
    }

    /// Sources of audio that has been requested
    pub fn audio_sources(&self) -> Vec<&str> {
        self.sounds.iter().map(|(s, _)| s.as_str()).collect()
    }

    /// Deliver the image requested from `source`. Returns false if unknown or already delivered.
    pub fn complete_image(&self, source: &str) -> bool {
        Self::complete(&self.images, source)
    }

    /// Deliver the audio requested from `source`. Returns false if unknown or already delivered.
    pub fn complete_audio(&self, source: &str) -> bool {
        Self::complete(&self.sounds, source)
    }

    /// Deliver everything requested so far, returning how many were newly delivered
    pub fn complete_all(&self) -> usize {
        self.images
            .iter()
            .chain(self.sounds.iter())
            .filter(|(source, slot)| slot.complete(source.clone()))
            .count()
    }

    fn complete(slots: &[(String, AssetSlot<String>)], source: &str) -> bool {
        slots
            .iter()
            .find(|(s, _)| s == source)
            .map(|(s, slot)| slot.complete(s.clone()))
            .unwrap_or(false)
    }
}

impl AssetHost for ManualHost {
    type Image = String;
    type Audio = String;

    fn can_play_type(&self, mime: &str) -> bool {
        let essence = mime_essence(mime);
        self.codecs.iter().any(|c| *c == essence)
    }

    fn load_image(&mut self, source: &str, slot: AssetSlot<String>) {
        self.images.push((source.to_string(), slot));
    }

    fn load_audio(&mut self, source: &str, slot: AssetSlot<String>) {
        self.sounds.push((source.to_string(), slot));
    }
}

//! The platform side of asset loading

use crate::handle::AssetSlot;
use crate::types::AudioFormat;

/// Decodes images, buffers audio, and reports codec support.
///
/// Implementations start work in `load_*` and later call
/// [`AssetSlot::complete`], at most once per slot, from any thread.
/// A load that fails is simply never completed.
pub trait AssetHost {
    type Image: Send + Sync + 'static;
    type Audio: Send + Sync + 'static;

    /// Whether audio of the given MIME type can be played
    fn can_play_type(&self, mime: &str) -> bool;

    /// Begin decoding the image at `source`
    fn load_image(&mut self, source: &str, slot: AssetSlot<Self::Image>);

    /// Begin buffering the audio at `source` until it can play through
    fn load_audio(&mut self, source: &str, slot: AssetSlot<Self::Audio>);
}

/// Pick the first playable format in preference order
pub fn detect_audio_support<H: AssetHost + ?Sized>(host: &H) -> Option<AudioFormat> {
    AudioFormat::PREFERENCE
        .into_iter()
        .find(|format| host.can_play_type(format.mime()))
}

/// The `type/subtype` part of a MIME string, lowercased, parameters dropped
pub fn mime_essence(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

//! Host that decodes assets from disk on worker threads

use crate::handle::AssetSlot;
use crate::host::{mime_essence, AssetHost};
use image::RgbaImage;
use kira::sound::static_sound::StaticSoundData;
use std::path::{Path, PathBuf};
use std::thread;

/// Audio containers the Kira build in this workspace can decode
const PLAYABLE_AUDIO: &[&str] = &["audio/ogg"];

/// Loads images with `image` and audio with Kira, one thread per asset
#[derive(Debug, Clone)]
pub struct ThreadedHost {
    root: PathBuf,
}

impl ThreadedHost {
    /// Resolve asset sources relative to `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn spawn<T, F>(&self, kind: &str, source: &str, slot: AssetSlot<T>, decode: F)
    where
        T: Send + Sync + 'static,
        F: FnOnce(&Path) -> Result<T, String> + Send + 'static,
    {
        let path = self.root.join(source);
        let key = slot.key().to_string();
        let spawned = thread::Builder::new()
            .name(format!("load-{kind}-{key}"))
            .spawn(move || match decode(&path) {
                Ok(payload) => {
                    log::debug!("decoded {}", path.display());
                    slot.complete(payload);
                }
                // A failed load never completes; the render gate stays closed
                Err(e) => log::warn!("failed to load '{}': {}", path.display(), e),
            });
        if let Err(e) = spawned {
            log::warn!("could not start loader thread for '{key}': {e}");
        }
    }
}

impl AssetHost for ThreadedHost {
    type Image = RgbaImage;
    type Audio = StaticSoundData;

    fn can_play_type(&self, mime: &str) -> bool {
        let essence = mime_essence(mime);
        PLAYABLE_AUDIO.iter().any(|m| *m == essence)
    }

    fn load_image(&mut self, source: &str, slot: AssetSlot<RgbaImage>) {
        self.spawn("image", source, slot, |path| {
            image::open(path)
                .map(|img| img.to_rgba8())
                .map_err(|e| e.to_string())
        });
    }

    fn load_audio(&mut self, source: &str, slot: AssetSlot<StaticSoundData>) {
        self.spawn("audio", source, slot, |path| {
            StaticSoundData::from_file(path).map_err(|e| e.to_string())
        });
    }
}

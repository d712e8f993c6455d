//! Resource loader: registration, completion counting, and the load-gate
//!
//! Completions arrive on a queue that the game drains once per tick with
//! [`ResourceLoader::poll_completions`]. Each tracked asset carries its own
//! `counted` flag, so a completion delivered twice is only counted once.

use crate::handle::{AssetHandle, AssetSlot};
use crate::host::{detect_audio_support, AssetHost};
use crate::types::{AssetKind, AudioFormat, Completion, LoadProgress, RegisterError};
use crossbeam::channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;

struct TrackedAsset<T> {
    handle: AssetHandle<T>,
    counted: bool,
}

/// Tracks image and audio loads and reports when all of them have arrived
pub struct ResourceLoader<H: AssetHost> {
    host: H,
    audio_format: Option<AudioFormat>,
    images: HashMap<String, TrackedAsset<H::Image>>,
    sounds: HashMap<String, TrackedAsset<H::Audio>>,
    image_progress: LoadProgress,
    audio_progress: LoadProgress,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
    was_fully_loaded: bool,
}

impl<H: AssetHost> ResourceLoader<H> {
    /// Create a loader and probe the host's audio support once
    pub fn new(host: H) -> Self {
        let audio_format = detect_audio_support(&host);
        match audio_format {
            Some(format) => log::debug!("audio format: {format:?}"),
            None => log::warn!("no supported audio codec, sounds disabled"),
        }

        let (completion_tx, completion_rx) = unbounded();
        Self {
            host,
            audio_format,
            images: HashMap::new(),
            sounds: HashMap::new(),
            image_progress: LoadProgress::default(),
            audio_progress: LoadProgress::default(),
            completion_tx,
            completion_rx,
            was_fully_loaded: true,
        }
    }

    /// Audio encoding detected at construction, if any
    pub fn audio_format(&self) -> Option<AudioFormat> {
        self.audio_format
    }

    /// Queue an image for loading
    pub fn register_image(
        &mut self,
        key: &str,
        source: &str,
    ) -> Result<AssetHandle<H::Image>, RegisterError> {
        if self.images.contains_key(key) {
            return Err(RegisterError::AlreadyRegistered {
                kind: AssetKind::Image,
                key: key.to_string(),
            });
        }

        let handle = AssetHandle::new();
        self.images.insert(
            key.to_string(),
            TrackedAsset {
                handle: handle.clone(),
                counted: false,
            },
        );
        self.image_progress.total += 1;
        self.was_fully_loaded = false;

        let slot = AssetSlot::new(
            handle.clone(),
            AssetKind::Image,
            key.to_string(),
            self.completion_tx.clone(),
        );
        log::debug!("loading image '{key}' from {source}");
        self.host.load_image(source, slot);

        Ok(handle)
    }

    /// Queue a sound for loading; the detected extension is appended to `base_source`.
    ///
    /// Without a supported codec nothing is created or counted, so missing
    /// audio never holds the load-gate shut.
    pub fn register_audio(
        &mut self,
        key: &str,
        base_source: &str,
    ) -> Result<AssetHandle<H::Audio>, RegisterError> {
        if self.sounds.contains_key(key) {
            return Err(RegisterError::AlreadyRegistered {
                kind: AssetKind::Audio,
                key: key.to_string(),
            });
        }
        let Some(format) = self.audio_format else {
            return Err(RegisterError::UnsupportedCodec {
                key: key.to_string(),
            });
        };

        let handle = AssetHandle::new();
        self.sounds.insert(
            key.to_string(),
            TrackedAsset {
                handle: handle.clone(),
                counted: false,
            },
        );
        self.audio_progress.total += 1;
        self.was_fully_loaded = false;

        let source = format!("{base_source}{}", format.extension());
        let slot = AssetSlot::new(
            handle.clone(),
            AssetKind::Audio,
            key.to_string(),
            self.completion_tx.clone(),
        );
        log::debug!("loading audio '{key}' from {source}");
        self.host.load_audio(&source, slot);

        Ok(handle)
    }

    /// Look up a registered image
    pub fn image(&self, key: &str) -> Option<AssetHandle<H::Image>> {
        self.images.get(key).map(|a| a.handle.clone())
    }

    /// Look up a registered sound
    pub fn audio(&self, key: &str) -> Option<AssetHandle<H::Audio>> {
        self.sounds.get(key).map(|a| a.handle.clone())
    }

    /// Drain pending completions into the counters. Returns how many assets became loaded.
    pub fn poll_completions(&mut self) -> usize {
        let mut newly_loaded = 0;

        while let Ok(completion) = self.completion_rx.try_recv() {
            let (assets, progress) = match completion.kind {
                AssetKind::Image => (
                    &mut self.images as &mut dyn CountedSet,
                    &mut self.image_progress,
                ),
                AssetKind::Audio => (
                    &mut self.sounds as &mut dyn CountedSet,
                    &mut self.audio_progress,
                ),
            };

            if assets.mark_counted(&completion.key) {
                progress.loaded += 1;
                newly_loaded += 1;
                log::debug!(
                    "{:?} '{}' loaded ({}/{})",
                    completion.kind,
                    completion.key,
                    progress.loaded,
                    progress.total
                );
            }
        }

        if !self.was_fully_loaded && self.is_fully_loaded() {
            log::info!(
                "all assets loaded: {} images, {} sounds",
                self.image_progress.total,
                self.audio_progress.total
            );
            self.was_fully_loaded = true;
        }

        newly_loaded
    }

    /// True when every registered asset has been counted as loaded
    pub fn is_fully_loaded(&self) -> bool {
        self.image_progress.is_complete() && self.audio_progress.is_complete()
    }

    pub fn image_progress(&self) -> LoadProgress {
        self.image_progress
    }

    pub fn audio_progress(&self) -> LoadProgress {
        self.audio_progress
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

/// Type-erased view over one kind's asset map, for completion bookkeeping
trait CountedSet {
    /// Flip the asset's counted flag. Returns false if unknown or already counted.
    fn mark_counted(&mut self, key: &str) -> bool;
}

impl<T> CountedSet for HashMap<String, TrackedAsset<T>> {
    fn mark_counted(&mut self, key: &str) -> bool {
        match self.get_mut(key) {
            Some(asset) if !asset.counted => {
                asset.counted = true;
                true
            }
            _ => false,
        }
    }
}

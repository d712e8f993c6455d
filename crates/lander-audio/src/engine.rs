//! Audio engine wrapping Kira's AudioManager
//!
//! Degrades gracefully when no audio device is available: the engine
//! reports itself unavailable and hands out no cue players.

use crate::cue::CuePlayer;
use kira::backend::Backend;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::{AudioManager, AudioManagerSettings, DefaultBackend, Tween};
use lander_asset::AssetHandle;
use std::cell::RefCell;
use std::rc::Rc;

type SharedManager<B> = Rc<RefCell<AudioManager<B>>>;

/// Owns the Kira audio manager shared by all cue players
pub struct AudioEngine<B: Backend = DefaultBackend> {
    manager: Option<SharedManager<B>>,
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine {
    /// Open the default output device
    pub fn new() -> Self {
        // Try to create the audio manager; gracefully fail if no device
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| log::warn!("no audio device available ({e}), running silent"))
            .ok();

        match manager {
            Some(manager) => Self::from_manager(manager),
            None => Self::disabled(),
        }
    }
}

impl<B: Backend> AudioEngine<B> {
    pub fn from_manager(manager: AudioManager<B>) -> Self {
        Self {
            manager: Some(Rc::new(RefCell::new(manager))),
        }
    }

    /// An engine that never produces sound
    pub fn disabled() -> Self {
        Self { manager: None }
    }

    /// Whether audio is actually available
    pub fn is_available(&self) -> bool {
        self.manager.is_some()
    }

    /// A player for `sound`, or `None` when running silent
    pub fn cue_player(
        &self,
        sound: AssetHandle<StaticSoundData>,
        looping: bool,
    ) -> Option<KiraCuePlayer<B>> {
        let manager = self.manager.as_ref()?;
        Some(KiraCuePlayer {
            manager: Rc::clone(manager),
            sound,
            looping,
            playing: None,
        })
    }
}

/// Plays one sound through Kira, resuming from the paused position.
///
/// Reports itself not ready until the sound has been buffered, so an
/// [`AudioCue`](crate::AudioCue) holds off its first `play` until then.
pub struct KiraCuePlayer<B: Backend = DefaultBackend> {
    manager: SharedManager<B>,
    sound: AssetHandle<StaticSoundData>,
    looping: bool,
    playing: Option<StaticSoundHandle>,
}

impl<B: Backend> KiraCuePlayer<B> {
    /// Whether a Kira sound instance exists yet
    pub fn has_started(&self) -> bool {
        self.playing.is_some()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl<B: Backend> CuePlayer for KiraCuePlayer<B> {
    fn play(&mut self) {
        if let Some(handle) = &mut self.playing {
            handle.resume(Tween::default());
            return;
        }

        let Some(data) = self.sound.get() else {
            log::debug!("cue sound not buffered yet");
            return;
        };

        let mut data = data.clone();
        if self.looping {
            data = data.loop_region(..);
        }

        match self.manager.borrow_mut().play(data) {
            Ok(handle) => self.playing = Some(handle),
            Err(e) => log::warn!("failed to play cue: {e}"),
        }
    }

    fn pause(&mut self) {
        if let Some(handle) = &mut self.playing {
            handle.pause(Tween::default());
        }
    }

    fn is_ready(&self) -> bool {
        self.sound.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioCue;
    use kira::backend::mock::MockBackend;
    use kira::sound::static_sound::StaticSoundSettings;
    use kira::Frame;
    use lander_asset::{AssetHost, AssetSlot, ResourceLoader};
    use std::sync::Arc;

    /// Holds audio slots until the test delivers them
    #[derive(Default)]
    struct HeldHost {
        sounds: Vec<AssetSlot<StaticSoundData>>,
    }

    impl AssetHost for HeldHost {
        type Image = ();
        type Audio = StaticSoundData;

        fn can_play_type(&self, mime: &str) -> bool {
            mime.starts_with("audio/ogg")
        }

        fn load_image(&mut self, _source: &str, _slot: AssetSlot<()>) {}

        fn load_audio(&mut self, _source: &str, slot: AssetSlot<StaticSoundData>) {
            self.sounds.push(slot);
        }
    }

    fn silence() -> StaticSoundData {
        StaticSoundData {
            sample_rate: 48_000,
            frames: Arc::from(vec![Frame::ZERO; 64]),
            settings: StaticSoundSettings::default(),
            slice: None,
        }
    }

    fn mock_engine() -> AudioEngine<MockBackend> {
        let manager = AudioManager::<MockBackend>::new(AudioManagerSettings::default()).unwrap();
        AudioEngine::from_manager(manager)
    }

    #[test]
    fn test_disabled_engine_has_no_players() {
        let engine = AudioEngine::<MockBackend>::disabled();
        assert!(!engine.is_available());
        assert!(engine.cue_player(AssetHandle::default(), true).is_none());
    }

    #[test]
    fn test_engine_graceful_degradation() {
        // CI machines typically have no audio device
        let engine = AudioEngine::new();
        let player = engine.cue_player(AssetHandle::default(), true);
        assert_eq!(player.is_some(), engine.is_available());

        if let Some(player) = player {
            assert!(!player.is_ready());
            assert!(!player.has_started());
        }
    }

    #[test]
    fn test_held_thrust_starts_sound_once_buffered() {
        let mut loader = ResourceLoader::new(HeldHost::default());
        let sound = loader.register_audio("rocket-thrust", "sound/rocket").unwrap();

        let engine = mock_engine();
        let player = engine.cue_player(sound, true).unwrap();
        assert!(player.is_looping());
        let mut cue = AudioCue::new(player);

        // Thrust held while the sound is still loading
        for _ in 0..10 {
            assert_eq!(cue.update(true), None);
        }
        assert!(!cue.is_playing());
        assert!(!cue.player().has_started());

        assert!(loader.host().sounds[0].complete(silence()));
        cue.update(true);
        assert!(cue.is_playing());
        assert!(cue.player().has_started());
    }

    #[test]
    fn test_pause_and_resume_keep_one_instance() {
        let mut loader = ResourceLoader::new(HeldHost::default());
        let sound = loader.register_audio("rocket-thrust", "sound/rocket").unwrap();
        loader.host().sounds[0].complete(silence());

        let engine = mock_engine();
        let mut player = engine.cue_player(sound, true).unwrap();
        assert!(player.is_ready());

        player.play();
        assert!(player.has_started());
        player.pause();
        player.play();
        assert!(player.has_started());
    }
}

//! Play/pause state machine for a looped sound
//!
//! The cue plays while any control is active and pauses when none is. Host
//! calls happen only on an actual transition. A player whose sound has not
//! arrived yet is left alone, so the first tick after it arrives with a
//! control held starts it.

/// Host side of a cue
pub trait CuePlayer {
    /// Start or resume playback
    fn play(&mut self);
    /// Pause playback, keeping the position
    fn pause(&mut self);
    /// Whether the sound is buffered and `play` can take effect
    fn is_ready(&self) -> bool {
        true
    }
}

impl<P: CuePlayer + ?Sized> CuePlayer for Box<P> {
    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// A transition the cue made this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueTransition {
    Started,
    Paused,
}

/// A sound that follows actor intent
pub struct AudioCue<P> {
    player: P,
    playing: bool,
}

impl<P: CuePlayer> AudioCue<P> {
    /// A paused cue
    pub fn new(player: P) -> Self {
        Self {
            player,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Sync playback with intent, calling the host only on a change
    pub fn update(&mut self, any_active: bool) -> Option<CueTransition> {
        if !self.player.is_ready() {
            return None;
        }
        match (self.playing, any_active) {
            (false, true) => {
                self.player.play();
                self.playing = true;
                log::debug!("cue started");
                Some(CueTransition::Started)
            }
            (true, false) => {
                self.player.pause();
                self.playing = false;
                log::debug!("cue paused");
                Some(CueTransition::Paused)
            }
            _ => None,
        }
    }
}

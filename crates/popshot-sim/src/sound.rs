//! Sound instance ledger.
//!
//! The frontend owns actual audio playback; the sim only decides which
//! cues exist and when. Every positional cue instance is allocated here,
//! addressed by `SoundId` in the audio event stream, and released exactly
//! once when its owner is done with it. Background music is fire-and-forget
//! (`MusicStart`/`MusicStop`) and never enters the ledger.

use glam::Vec3;
use log::warn;
use popshot_core::enums::SoundCue;
use popshot_core::events::{AudioEvent, SoundId};

#[derive(Debug, Default)]
pub struct SoundLedger {
    next_id: u32,
    live: Vec<SoundId>,
}

impl SoundLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves an instance without starting playback. Owners that restart
    /// the same cue many times (a weapon's fire sound) allocate once and
    /// replay, so the frontend can keep one voice per owner.
    pub fn allocate(&mut self) -> SoundId {
        self.next_id += 1;
        let id = SoundId(self.next_id);
        self.live.push(id);
        id
    }

    /// Allocates an instance and starts it in one step.
    pub fn play(
        &mut self,
        cue: SoundCue,
        looped: bool,
        position: Option<Vec3>,
        events: &mut Vec<AudioEvent>,
    ) -> SoundId {
        let sound = self.allocate();
        events.push(AudioEvent::Play {
            sound,
            cue,
            looped,
            position,
        });
        sound
    }

    /// Restarts an already-allocated instance from the beginning.
    pub fn replay(
        &self,
        sound: SoundId,
        cue: SoundCue,
        position: Option<Vec3>,
        events: &mut Vec<AudioEvent>,
    ) {
        if !self.is_live(sound) {
            warn!("replay of released sound {:?}", sound);
            return;
        }
        events.push(AudioEvent::Play {
            sound,
            cue,
            looped: false,
            position,
        });
    }

    pub fn stop(&self, sound: SoundId, events: &mut Vec<AudioEvent>) {
        if !self.is_live(sound) {
            warn!("stop of released sound {:?}", sound);
            return;
        }
        events.push(AudioEvent::Stop { sound });
    }

    /// Frees an instance. Releasing twice is an ownership bug; the second
    /// release is dropped so the frontend never sees a dangling id.
    pub fn release(&mut self, sound: SoundId, events: &mut Vec<AudioEvent>) {
        match self.live.iter().position(|s| *s == sound) {
            Some(index) => {
                self.live.remove(index);
                events.push(AudioEvent::Release { sound });
            }
            None => warn!("sound released twice: {:?}", sound),
        }
    }

    pub fn is_live(&self, sound: SoundId) -> bool {
        self.live.contains(&sound)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Releases anything still live. Teardown calls this after the known
    /// owners have released their instances; leftovers mean an ownership
    /// bug somewhere upstream.
    pub fn drain(&mut self, events: &mut Vec<AudioEvent>) {
        if !self.live.is_empty() {
            warn!("{} sound instance(s) leaked at teardown", self.live.len());
        }
        for sound in self.live.drain(..) {
            events.push(AudioEvent::Release { sound });
        }
    }
}

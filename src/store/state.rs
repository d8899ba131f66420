use super::{Readable, Writable};
use crate::tonal::{
    octave_descriptors, pitch_frequencies, pitch_names, Octave, Pitch, OCTAVE_COUNT,
    PITCH_CLASS_COUNT,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque reference to an active audio session.
///
/// Minted by whichever backend opens the session; the store only holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioContextHandle {
    id: u64,
    sample_rate: u32,
    channels: u16,
}

impl AudioContextHandle {
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            sample_rate,
            channels,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }
}

/// All shared state for the pitch UI, passed explicitly to each consumer.
///
/// Clones share the same cells.
#[derive(Clone)]
pub struct AppStore {
    pub audio_ctx: Writable<Option<AudioContextHandle>>,
    pub pitches: Readable<&'static [f64; PITCH_CLASS_COUNT]>,
    pub pitch_names: Readable<&'static [&'static str; PITCH_CLASS_COUNT]>,
    pub octaves: Readable<&'static [Octave; OCTAVE_COUNT]>,
    pub all_pitches: Writable<Vec<Pitch>>,
    pub show_pitch_selector: Writable<bool>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pitch_frequencies(&self) -> &'static [f64; PITCH_CLASS_COUNT] {
        self.pitches.get()
    }

    pub fn pitch_names(&self) -> &'static [&'static str; PITCH_CLASS_COUNT] {
        self.pitch_names.get()
    }

    pub fn octave_descriptors(&self) -> &'static [Octave; OCTAVE_COUNT] {
        self.octaves.get()
    }

    pub fn audio_context(&self) -> Option<AudioContextHandle> {
        self.audio_ctx.get()
    }

    pub fn set_audio_context(&self, handle: Option<AudioContextHandle>) {
        match &handle {
            Some(h) => log::debug!("Audio context set: id {} ({} Hz)", h.id, h.sample_rate),
            None => log::debug!("Audio context cleared"),
        }
        self.audio_ctx.set(handle);
    }

    pub fn all_pitches(&self) -> Vec<Pitch> {
        self.all_pitches.get()
    }

    pub fn set_all_pitches(&self, pitches: Vec<Pitch>) {
        log::debug!("All pitches replaced ({} entries)", pitches.len());
        self.all_pitches.set(pitches);
    }

    pub fn show_pitch_selector(&self) -> bool {
        self.show_pitch_selector.get()
    }

    pub fn set_show_pitch_selector(&self, show: bool) {
        self.show_pitch_selector.set(show);
    }

    /// Flip the selector visibility and return the new state.
    pub fn toggle_pitch_selector(&self) -> bool {
        self.show_pitch_selector.update(|show| !show);
        self.show_pitch_selector()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            audio_ctx: Writable::new_always_notify(None),
            pitches: Readable::new(pitch_frequencies()),
            pitch_names: Readable::new(pitch_names()),
            octaves: Readable::new(octave_descriptors()),
            all_pitches: Writable::new_always_notify(Vec::new()),
            show_pitch_selector: Writable::new(false),
        }
    }
}

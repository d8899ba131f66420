use crate::store::AppStore;
use crate::tonal::{catalog, octave_by_label, Pitch};
use serde::Serialize;

/// Input coming from the keyboard, MIDI or the web UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectorEvent {
    ToggleSelector,
    SelectOctave(u8),
    SelectPitchClass(usize),
    MidiNoteOn(u8),
    MidiNoteOff(u8),
    Release,
}

/// What the audio preview should do after an event.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "pitch")]
pub enum ToneCommand {
    Play(Pitch),
    Silence,
    Unchanged,
}

/// Pitch-selector view model: tracks the current selection and drives the
/// shared store in response to user input.
#[derive(Debug, Clone)]
pub struct PitchSelector {
    octave: u8,
    pitch_class: Option<usize>,
    midi_note: Option<u8>,
}

impl PitchSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    pub fn pitch_class(&self) -> Option<usize> {
        self.pitch_class
    }

    /// The currently selected pitch, if a pitch class has been chosen.
    pub fn selected(&self) -> Option<Pitch> {
        self.pitch_class
            .and_then(|pc| catalog::pitch_at(self.octave, pc).ok())
    }

    pub fn apply(&mut self, store: &AppStore, event: SelectorEvent) -> ToneCommand {
        match event {
            SelectorEvent::ToggleSelector => {
                let visible = store.toggle_pitch_selector();
                log::info!(
                    "Pitch selector {}",
                    if visible { "shown" } else { "hidden" }
                );
                if visible {
                    Self::ensure_catalog(store);
                    ToneCommand::Unchanged
                } else {
                    self.pitch_class = None;
                    ToneCommand::Silence
                }
            }
            SelectorEvent::SelectOctave(label) => {
                if !store.show_pitch_selector() {
                    return ToneCommand::Unchanged;
                }
                if octave_by_label(label).is_none() {
                    log::warn!("Ignoring unknown octave {}", label);
                    return ToneCommand::Unchanged;
                }
                self.octave = label;
                match self.selected() {
                    Some(pitch) => ToneCommand::Play(pitch),
                    None => ToneCommand::Unchanged,
                }
            }
            SelectorEvent::SelectPitchClass(pitch_class) => {
                if !store.show_pitch_selector() {
                    return ToneCommand::Unchanged;
                }
                match catalog::pitch_at(self.octave, pitch_class) {
                    Ok(pitch) => {
                        self.pitch_class = Some(pitch_class);
                        log::info!("Selected {}", pitch);
                        ToneCommand::Play(pitch)
                    }
                    Err(e) => {
                        log::warn!("Selection rejected: {}", e);
                        ToneCommand::Unchanged
                    }
                }
            }
            SelectorEvent::MidiNoteOn(note) => match catalog::from_midi(note) {
                Some(pitch) => {
                    Self::ensure_catalog(store);
                    self.midi_note = Some(note);
                    ToneCommand::Play(pitch)
                }
                None => {
                    log::debug!("MIDI note {} has no table entry", note);
                    ToneCommand::Unchanged
                }
            },
            SelectorEvent::MidiNoteOff(note) => {
                if self.midi_note == Some(note) {
                    self.midi_note = None;
                    ToneCommand::Silence
                } else {
                    ToneCommand::Unchanged
                }
            }
            SelectorEvent::Release => {
                self.pitch_class = None;
                self.midi_note = None;
                ToneCommand::Silence
            }
        }
    }

    // Consumers own the derivation; fill the shared slot once on first use.
    fn ensure_catalog(store: &AppStore) {
        if store.all_pitches.with(|pitches| pitches.is_empty()) {
            store.set_all_pitches(catalog::all_pitches());
        }
    }
}

impl Default for PitchSelector {
    fn default() -> Self {
        Self {
            octave: 4,
            pitch_class: None,
            midi_note: None,
        }
    }
}

//! Derivation of concrete pitches from the static tables.
//!
//! The store itself never computes anything; the pitch selector and the
//! runtimes call into here and write the results back into the store.

use super::tables::{octave_by_label, OCTAVES, PITCH_CLASS_COUNT, PITCH_FREQUENCIES, PITCH_NAMES};
use super::{Octave, Pitch};
use crate::error::TonalError;

/// Build the pitch for a pitch class in the octave with the given label.
pub fn pitch_at(octave_label: u8, pitch_class: usize) -> Result<Pitch, TonalError> {
    let octave = octave_by_label(octave_label).ok_or(TonalError::UnknownOctave(octave_label))?;
    if pitch_class >= PITCH_CLASS_COUNT {
        return Err(TonalError::PitchClassOutOfRange(pitch_class));
    }
    Ok(Pitch::new(
        PITCH_NAMES[pitch_class],
        octave,
        PITCH_FREQUENCIES[pitch_class],
    ))
}

/// Every pitch class in every octave, octave-major (C0, C#/Db0, ... B9).
pub fn all_pitches() -> Vec<Pitch> {
    OCTAVES
        .iter()
        .flat_map(|octave| {
            PITCH_NAMES
                .iter()
                .zip(PITCH_FREQUENCIES.iter())
                .map(move |(name, freq)| Pitch::new(*name, *octave, *freq))
        })
        .collect()
}

/// Resolve a pitch-class index from `"C#"`, `"Db"` or the full `"C#/Db"` form.
pub fn pitch_class_index(name: &str) -> Result<usize, TonalError> {
    let name = name.trim();
    PITCH_NAMES
        .iter()
        .position(|candidate| *candidate == name || candidate.split('/').any(|part| part == name))
        .ok_or_else(|| TonalError::UnknownPitchName(name.to_string()))
}

/// Map a MIDI note number onto the tables.
///
/// MIDI octave `n / 12 - 1` lines up with octave labels 1..=9. Label 0 shares
/// its multiplier with label 1, so notes below C1 have no distinct entry and
/// return `None`, as do notes above B9.
pub fn from_midi(note: u8) -> Option<Pitch> {
    let label = (note / 12).checked_sub(1)?;
    if label == 0 {
        return None;
    }
    pitch_at(label, (note % 12) as usize).ok()
}

/// The catalog pitch closest to `frequency`, measured in semitones.
pub fn nearest(frequency: f64) -> Option<Pitch> {
    if frequency.is_nan() || frequency <= 0.0 {
        return None;
    }
    distinct_octaves()
        .flat_map(|octave| {
            PITCH_NAMES
                .iter()
                .zip(PITCH_FREQUENCIES.iter())
                .map(move |(name, freq)| Pitch::new(*name, octave, *freq))
        })
        .min_by(|a, b| {
            let da = (a.frequency / frequency).log2().abs();
            let db = (b.frequency / frequency).log2().abs();
            da.total_cmp(&db)
        })
}

// Where two octaves share a multiplier the later label wins, so label 0
// gives way to label 1 as in `from_midi`.
fn distinct_octaves() -> impl Iterator<Item = Octave> {
    OCTAVES
        .iter()
        .enumerate()
        .filter(|(i, o)| {
            OCTAVES[*i + 1..]
                .iter()
                .all(|later| later.multiplier != o.multiplier)
        })
        .map(|(_, o)| *o)
}

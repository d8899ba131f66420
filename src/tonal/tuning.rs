//! Tuning configuration and table validation.

use super::tables::PITCH_CLASS_COUNT;
use super::Octave;
use crate::error::TonalError;
use serde::{Deserialize, Serialize};

/// Octave (scientific numbering) that the base table is anchored at.
pub const BASE_OCTAVE: u8 = 1;

const A_INDEX: usize = 9;

/// Reference pitch for regenerating the base octave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Frequency of A in `reference_octave`, in Hz.
    pub reference_frequency: f64,
    pub reference_octave: u8,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            reference_frequency: 440.0,
            reference_octave: 4,
        }
    }
}

impl TuningConfig {
    pub fn from_json(json: &str) -> Result<Self, TonalError> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("Loaded tuning config: {:?}", config);
        Ok(config)
    }
}

/// Regenerate the C..B base octave from a reference A.
pub fn equal_tempered_frequencies(
    config: &TuningConfig,
) -> Result<[f64; PITCH_CLASS_COUNT], TonalError> {
    if config.reference_frequency.is_nan() || config.reference_frequency <= 0.0 {
        return Err(TonalError::InvalidReference(config.reference_frequency));
    }
    let octave_shift = config.reference_octave as f64 - BASE_OCTAVE as f64;
    let base_a = config.reference_frequency / octave_shift.exp2();

    let mut frequencies = [0.0; PITCH_CLASS_COUNT];
    for (i, freq) in frequencies.iter_mut().enumerate() {
        let semitones = i as f64 - A_INDEX as f64;
        *freq = base_a * (semitones / 12.0).exp2();
    }
    Ok(frequencies)
}

/// Check that a set of tables is internally consistent.
///
/// The built-in tables always pass; this exists for callers assembling
/// their own tables.
pub fn validate_tables(
    frequencies: &[f64],
    names: &[&str],
    octaves: &[Octave],
) -> Result<(), TonalError> {
    if frequencies.len() != names.len() {
        return Err(TonalError::TableLengthMismatch {
            frequencies: frequencies.len(),
            names: names.len(),
        });
    }

    let mut previous = 0.0;
    for (index, &freq) in frequencies.iter().enumerate() {
        if freq.is_nan() || freq <= previous {
            return Err(TonalError::NonIncreasingFrequency { index });
        }
        previous = freq;
    }

    for (position, octave) in octaves.iter().enumerate() {
        if octave.multiplier == 0 {
            return Err(TonalError::ZeroMultiplier {
                label: octave.label,
            });
        }
        if position > 0 && octave.label <= octaves[position - 1].label {
            return Err(TonalError::OctaveLabelOrder {
                label: octave.label,
                position,
            });
        }
    }
    Ok(())
}

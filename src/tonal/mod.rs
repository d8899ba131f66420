//! Musical pitch reference data: the chromatic base octave, pitch-class
//! names and octave multipliers, plus the helpers consumers use to derive
//! concrete pitches from them.

pub mod catalog;
mod octave;
mod pitch;
mod tables;
pub mod tuning;

pub use self::octave::Octave;
pub use self::pitch::Pitch;
pub use self::tables::{
    octave_by_label, octave_descriptors, pitch_frequencies, pitch_names, OCTAVES, OCTAVE_COUNT,
    PITCH_CLASS_COUNT, PITCH_FREQUENCIES, PITCH_NAMES,
};

use super::octave::Octave;

pub const PITCH_CLASS_COUNT: usize = 12;
pub const OCTAVE_COUNT: usize = 10;

/// One equal-tempered chromatic octave, C1 through B1 (A1 = 55 Hz, so A4 = 440 Hz).
pub const PITCH_FREQUENCIES: [f64; PITCH_CLASS_COUNT] = [
    32.70319566257483,  // C
    34.64782887210902,  // C#/Db
    36.70809598967594,  // D
    38.89087296526011,  // D#/Eb
    41.20344461410874,  // E
    43.653528929125486, // F
    46.24930283895431,  // F#/Gb
    48.999429497718666, // G
    51.91308719749314,  // G#/Ab
    55.0,               // A
    58.27047018976124,  // A#/Bb
    61.7354126570155,   // B
];

/// Pitch-class names, index-aligned with [`PITCH_FREQUENCIES`].
pub const PITCH_NAMES: [&str; PITCH_CLASS_COUNT] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

// Labels 0 and 1 share a multiplier of 1. Kept as shipped until the
// intended value for octave 0 is confirmed.
pub const OCTAVES: [Octave; OCTAVE_COUNT] = [
    Octave::new(0, 1),
    Octave::new(1, 1),
    Octave::new(2, 2),
    Octave::new(3, 4),
    Octave::new(4, 8),
    Octave::new(5, 16),
    Octave::new(6, 32),
    Octave::new(7, 64),
    Octave::new(8, 128),
    Octave::new(9, 256),
];

pub fn pitch_frequencies() -> &'static [f64; PITCH_CLASS_COUNT] {
    &PITCH_FREQUENCIES
}

pub fn pitch_names() -> &'static [&'static str; PITCH_CLASS_COUNT] {
    &PITCH_NAMES
}

pub fn octave_descriptors() -> &'static [Octave; OCTAVE_COUNT] {
    &OCTAVES
}

/// Look up the descriptor for an octave label.
pub fn octave_by_label(label: u8) -> Option<Octave> {
    OCTAVES.iter().copied().find(|o| o.label == label)
}

use serde::{Deserialize, Serialize};

/// An octave label and the factor that scales base-octave frequencies into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Octave {
    pub label: u8,
    pub multiplier: u32,
}

impl Octave {
    pub const fn new(label: u8, multiplier: u32) -> Self {
        Self { label, multiplier }
    }

    /// Scale a base-octave frequency into this octave.
    pub fn apply(&self, base_frequency: f64) -> f64 {
        base_frequency * self.multiplier as f64
    }
}

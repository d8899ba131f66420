use crate::tonal::Octave;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete pitch: a pitch class placed in a specific octave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub name: String,
    pub octave: u8,
    pub frequency: f64,
}

impl Pitch {
    pub fn new(name: impl Into<String>, octave: Octave, base_frequency: f64) -> Self {
        Self {
            name: name.into(),
            octave: octave.label,
            frequency: octave.apply(base_frequency),
        }
    }

    /// Display label such as `"A2"` or `"C#/Db4"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.name, self.octave)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} Hz)", self.label(), self.frequency)
    }
}

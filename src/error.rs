//! Error types for the tonal tables and the native audio backend.

use thiserror::Error;

/// Errors raised while looking up, generating or validating pitch tables.
#[derive(Debug, Error)]
pub enum TonalError {
    /// Frequency and name tables are index-aligned and must have equal length.
    #[error("table length mismatch: {frequencies} frequencies, {names} names")]
    TableLengthMismatch { frequencies: usize, names: usize },

    /// Frequencies must be positive and strictly increasing.
    #[error("pitch frequency at index {index} is not positive or not above its predecessor")]
    NonIncreasingFrequency { index: usize },

    /// Octave labels must be unique and ascending.
    #[error("octave label {label} at position {position} breaks ascending order")]
    OctaveLabelOrder { label: u8, position: usize },

    #[error("octave {label} has a zero multiplier")]
    ZeroMultiplier { label: u8 },

    #[error("unknown octave label {0}")]
    UnknownOctave(u8),

    #[error("pitch class index {0} out of range")]
    PitchClassOutOfRange(usize),

    #[error("unknown pitch name {0:?}")]
    UnknownPitchName(String),

    #[error("reference frequency must be positive, got {0}")]
    InvalidReference(f64),

    /// Tuning configuration could not be parsed.
    #[error("invalid tuning configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors raised by the native output backend.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no output device available")]
    NoOutputDevice,

    #[error("failed to enumerate devices: {0}")]
    Devices(#[from] cpal::DevicesError),

    #[error("failed to query output config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("failed to pause output stream: {0}")]
    PauseStream(#[from] cpal::PauseStreamError),

    #[error("unsupported sample format {0:?}")]
    UnsupportedSampleFormat(cpal::SampleFormat),
}

/// Errors raised by audio backends that have no device layer (tests, wasm).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio backend unavailable: {0}")]
    Unavailable(String),
}

#[cfg(not(target_arch = "wasm32"))]
mod cpal_backend;
#[cfg(not(target_arch = "wasm32"))]
pub use self::cpal_backend::CpalBackend;

use crate::error::AudioError;
use crate::store::{AppStore, AudioContextHandle};

/// An output device that can host an audio session and preview a tone.
pub trait AudioBackend {
    fn start(&mut self) -> Result<AudioContextHandle, AudioError>;
    fn stop(&mut self);
    /// Sound a continuous tone at `frequency` Hz, or silence with `None`.
    fn set_tone(&mut self, frequency: Option<f64>);
}

/// Owns a backend and keeps the store's audio context slot in step with it.
///
/// The session only ever clears a handle it published itself.
pub struct AudioSession<B: AudioBackend> {
    backend: B,
    store: AppStore,
    handle: Option<AudioContextHandle>,
}

impl<B: AudioBackend> AudioSession<B> {
    pub fn new(backend: B, store: AppStore) -> Self {
        Self {
            backend,
            store,
            handle: None,
        }
    }

    /// Start the backend and publish its handle. A session that is already
    /// open returns its existing handle.
    pub fn open(&mut self) -> Result<AudioContextHandle, AudioError> {
        if let Some(handle) = &self.handle {
            return Ok(handle.clone());
        }
        if let Some(previous) = self.store.audio_context() {
            log::warn!("Replacing audio context {} held by another consumer", previous.id());
        }
        let handle = self.backend.start()?;
        log::info!(
            "Audio session {} open ({} ch @ {} Hz)",
            handle.id(),
            handle.channels(),
            handle.sample_rate()
        );
        self.handle = Some(handle.clone());
        self.store.set_audio_context(Some(handle.clone()));
        Ok(handle)
    }

    pub fn close(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.backend.set_tone(None);
        self.backend.stop();
        if self.store.audio_context().as_ref() == Some(&handle) {
            self.store.set_audio_context(None);
        }
        log::info!("Audio session {} closed", handle.id());
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&AudioContextHandle> {
        self.handle.as_ref()
    }

    pub fn set_tone(&mut self, frequency: Option<f64>) {
        if self.is_open() {
            self.backend.set_tone(frequency);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

use std::sync::mpsc::channel;
use tonal_store::audio::{AudioBackend, AudioSession};
use tonal_store::error::AudioError;
use tonal_store::runtime::NativeApp;
use tonal_store::selector::SelectorEvent;
use tonal_store::store::{AppStore, AudioContextHandle};

#[derive(Default)]
struct FakeBackend {
    starts: usize,
    stops: usize,
    tone: Option<f64>,
}

impl AudioBackend for FakeBackend {
    fn start(&mut self) -> Result<AudioContextHandle, AudioError> {
        self.starts += 1;
        Ok(AudioContextHandle::new(48_000, 2))
    }

    fn stop(&mut self) {
        self.stops += 1;
    }

    fn set_tone(&mut self, frequency: Option<f64>) {
        self.tone = frequency;
    }
}

struct FailingBackend;

impl AudioBackend for FailingBackend {
    fn start(&mut self) -> Result<AudioContextHandle, AudioError> {
        Err(AudioError::NoOutputDevice)
    }

    fn stop(&mut self) {}

    fn set_tone(&mut self, _frequency: Option<f64>) {}
}

#[test]
fn test_open_publishes_handle_and_close_clears_it() {
    let store = AppStore::new();
    let mut session = AudioSession::new(FakeBackend::default(), store.clone());

    let handle = session.open().unwrap();
    assert_eq!(store.audio_context(), Some(handle.clone()));
    assert!(session.is_open());

    // Opening again keeps the existing session.
    let again = session.open().unwrap();
    assert_eq!(again, handle);
    assert_eq!(session.backend().starts, 1);

    session.close();
    assert_eq!(store.audio_context(), None);
    assert_eq!(session.backend().stops, 1);

    session.close();
    assert_eq!(session.backend().stops, 1);
}

#[test]
fn test_failed_open_leaves_slot_empty() {
    let store = AppStore::new();
    let mut session = AudioSession::new(FailingBackend, store.clone());
    assert!(matches!(session.open(), Err(AudioError::NoOutputDevice)));
    assert_eq!(store.audio_context(), None);
}

#[test]
fn test_tone_requires_open_session() {
    let store = AppStore::new();
    let mut session = AudioSession::new(FakeBackend::default(), store);
    session.set_tone(Some(440.0));
    assert_eq!(session.backend().tone, None);

    session.open().unwrap();
    session.set_tone(Some(440.0));
    assert_eq!(session.backend().tone, Some(440.0));

    session.close();
    assert_eq!(session.backend().tone, None);
}

#[test]
fn test_native_app_routes_events() {
    let (tx, rx) = channel();
    let store = AppStore::new();
    let mut app = NativeApp::new(FakeBackend::default(), store.clone(), rx);
    app.open().unwrap();
    assert!(store.audio_context().is_some());

    tx.send(SelectorEvent::ToggleSelector).unwrap();
    tx.send(SelectorEvent::SelectOctave(2)).unwrap();
    tx.send(SelectorEvent::SelectPitchClass(9)).unwrap();
    app.process_events();

    assert!(store.show_pitch_selector());
    assert_eq!(store.all_pitches().len(), 120);

    app.close();
    assert!(app.store().audio_context().is_none());
}

#[test]
fn test_open_starts_backend_even_if_slot_is_taken() {
    let store = AppStore::new();
    let foreign = AudioContextHandle::new(44_100, 2);
    store.set_audio_context(Some(foreign.clone()));

    let mut session = AudioSession::new(FakeBackend::default(), store.clone());
    let handle = session.open().unwrap();
    assert_ne!(handle, foreign);
    assert_eq!(session.backend().starts, 1);
    assert_eq!(session.handle(), Some(&handle));
    assert_eq!(store.audio_context(), Some(handle));

    session.set_tone(Some(220.0));
    assert_eq!(session.backend().tone, Some(220.0));

    session.close();
    assert_eq!(store.audio_context(), None);
    assert_eq!(session.backend().stops, 1);
}

#[test]
fn test_close_leaves_other_consumers_handle() {
    let store = AppStore::new();
    let mut session = AudioSession::new(FakeBackend::default(), store.clone());
    session.open().unwrap();

    let foreign = AudioContextHandle::new(44_100, 1);
    store.set_audio_context(Some(foreign.clone()));

    session.close();
    assert!(!session.is_open());
    assert_eq!(session.backend().stops, 1);
    assert_eq!(store.audio_context(), Some(foreign));
}

#[test]
fn test_close_without_open_is_noop() {
    let store = AppStore::new();
    let foreign = AudioContextHandle::new(44_100, 2);
    store.set_audio_context(Some(foreign.clone()));

    let mut session = AudioSession::new(FakeBackend::default(), store.clone());
    assert!(!session.is_open());
    session.close();
    assert_eq!(session.backend().stops, 0);
    assert_eq!(store.audio_context(), Some(foreign));
}

#[test]
fn test_logger_setup_is_repeatable() {
    tonal_store::runtime::native::setup_logger();
    tonal_store::runtime::native::setup_logger();
    log::info!("logger still usable after second setup");
}

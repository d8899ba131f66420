use crate::audio::{AudioBackend, AudioSession, CpalBackend};
use crate::error::AudioError;
use crate::input::{KeyboardHandler, MidiHandler};
use crate::selector::{PitchSelector, SelectorEvent, ToneCommand};
use crate::store::AppStore;
use env_logger::{Builder, Env};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Install the terminal logger. `RUST_LOG` overrides the `info` default.
pub fn setup_logger() {
    if let Err(e) = Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init()
    {
        log::debug!("Logger already installed: {}", e);
    }
}

/// Desktop runtime: wires the store, the pitch selector and an audio backend.
pub struct NativeApp<B: AudioBackend> {
    store: AppStore,
    session: AudioSession<B>,
    selector: PitchSelector,
    event_receiver: Receiver<SelectorEvent>,
}

impl<B: AudioBackend> NativeApp<B> {
    pub fn new(backend: B, store: AppStore, event_receiver: Receiver<SelectorEvent>) -> Self {
        Self {
            session: AudioSession::new(backend, store.clone()),
            store,
            selector: PitchSelector::new(),
            event_receiver,
        }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn open(&mut self) -> Result<(), AudioError> {
        self.session.open().map(|_| ())
    }

    pub fn close(&mut self) {
        self.session.close();
    }

    /// Apply every queued event and forward the resulting tone changes.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match self.selector.apply(&self.store, event) {
                ToneCommand::Play(pitch) => self.session.set_tone(Some(pitch.frequency)),
                ToneCommand::Silence => self.session.set_tone(None),
                ToneCommand::Unchanged => {}
            }
        }
    }
}

pub fn start() -> Result<(), AudioError> {
    let (event_tx, event_rx) = channel();
    let store = AppStore::new();

    store.show_pitch_selector.subscribe(|visible| {
        log::debug!("show_pitch_selector = {}", visible);
    });

    let mut app = NativeApp::new(CpalBackend::new(), store, event_rx);
    app.open()?;

    let mut keyboard_handler = KeyboardHandler::new(event_tx.clone());
    let mut midi_handler = MidiHandler::new(event_tx);

    log::info!("Space toggles the pitch selector, 0-9 pick an octave, A..J pick a pitch, Esc releases");

    loop {
        keyboard_handler.update();
        midi_handler.update();
        app.process_events();
        std::thread::sleep(POLL_INTERVAL);
    }
}

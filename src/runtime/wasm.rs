use crate::selector::{PitchSelector, SelectorEvent, ToneCommand};
use crate::store::{AppStore, AudioContextHandle, Subscription};
use crate::tonal::{catalog, Pitch};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::console;

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => console::error_1(&line),
            log::Level::Warn => console::warn_1(&line),
            _ => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

#[wasm_bindgen(start)]
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

fn notify(callback: &Function, value: &JsValue) {
    if let Err(e) = callback.call1(&JsValue::NULL, value) {
        log::warn!("Store subscriber threw: {:?}", e);
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        log::error!("Failed to convert store value: {}", e);
        JsValue::UNDEFINED
    })
}

/// Handle returned to JS by the `subscribe_*` methods.
#[wasm_bindgen]
pub struct WasmSubscription {
    inner: Option<Subscription>,
}

#[wasm_bindgen]
impl WasmSubscription {
    #[wasm_bindgen]
    pub fn unsubscribe(&mut self) {
        if let Some(subscription) = self.inner.take() {
            subscription.unsubscribe();
        }
    }
}

impl From<Subscription> for WasmSubscription {
    fn from(subscription: Subscription) -> Self {
        Self {
            inner: Some(subscription),
        }
    }
}

/// WASM store runtime (single UI thread, direct API)
#[wasm_bindgen]
pub struct WasmStore {
    store: AppStore,
    selector: PitchSelector,
}

#[wasm_bindgen]
impl WasmStore {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmStore {
        WasmStore {
            store: AppStore::new(),
            selector: PitchSelector::new(),
        }
    }

    #[wasm_bindgen]
    pub fn pitches(&self) -> Vec<f64> {
        self.store.pitch_frequencies().to_vec()
    }

    #[wasm_bindgen]
    pub fn pitch_names(&self) -> JsValue {
        to_js(self.store.pitch_names())
    }

    #[wasm_bindgen]
    pub fn octaves(&self) -> JsValue {
        to_js(self.store.octave_descriptors())
    }

    #[wasm_bindgen]
    pub fn audio_context(&self) -> JsValue {
        to_js(&self.store.audio_context())
    }

    /// Record the page's freshly created AudioContext. Returns its handle id.
    #[wasm_bindgen]
    pub fn open_audio_context(&self, sample_rate: u32, channels: u16) -> u64 {
        if let Some(handle) = self.store.audio_context() {
            return handle.id();
        }
        let handle = AudioContextHandle::new(sample_rate, channels);
        let id = handle.id();
        self.store.set_audio_context(Some(handle));
        id
    }

    #[wasm_bindgen]
    pub fn close_audio_context(&self) {
        self.store.set_audio_context(None);
    }

    #[wasm_bindgen]
    pub fn all_pitches(&self) -> JsValue {
        self.store.all_pitches.with(|pitches| to_js(pitches))
    }

    #[wasm_bindgen]
    pub fn set_all_pitches(&self, pitches: JsValue) -> Result<(), JsValue> {
        let pitches: Vec<Pitch> = serde_wasm_bindgen::from_value(pitches)?;
        self.store.set_all_pitches(pitches);
        Ok(())
    }

    /// Fill `all_pitches` with every pitch class in every octave.
    #[wasm_bindgen]
    pub fn refresh_all_pitches(&self) {
        self.store.set_all_pitches(catalog::all_pitches());
    }

    #[wasm_bindgen]
    pub fn show_pitch_selector(&self) -> bool {
        self.store.show_pitch_selector()
    }

    #[wasm_bindgen]
    pub fn set_show_pitch_selector(&self, show: bool) {
        self.store.set_show_pitch_selector(show);
    }

    #[wasm_bindgen]
    pub fn toggle_pitch_selector(&mut self) -> JsValue {
        self.apply(SelectorEvent::ToggleSelector)
    }

    #[wasm_bindgen]
    pub fn select_octave(&mut self, label: u8) -> JsValue {
        self.apply(SelectorEvent::SelectOctave(label))
    }

    #[wasm_bindgen]
    pub fn select_pitch_class(&mut self, pitch_class: usize) -> JsValue {
        self.apply(SelectorEvent::SelectPitchClass(pitch_class))
    }

    #[wasm_bindgen]
    pub fn note_on(&mut self, note: u8) -> JsValue {
        self.apply(SelectorEvent::MidiNoteOn(note))
    }

    #[wasm_bindgen]
    pub fn note_off(&mut self, note: u8) -> JsValue {
        self.apply(SelectorEvent::MidiNoteOff(note))
    }

    #[wasm_bindgen]
    pub fn release(&mut self) -> JsValue {
        self.apply(SelectorEvent::Release)
    }

    #[wasm_bindgen]
    pub fn subscribe_audio_context(&self, callback: Function) -> WasmSubscription {
        self.store
            .audio_ctx
            .subscribe(move |handle| notify(&callback, &to_js(handle)))
            .into()
    }

    #[wasm_bindgen]
    pub fn subscribe_all_pitches(&self, callback: Function) -> WasmSubscription {
        self.store
            .all_pitches
            .subscribe(move |pitches| notify(&callback, &to_js(pitches)))
            .into()
    }

    #[wasm_bindgen]
    pub fn subscribe_show_pitch_selector(&self, callback: Function) -> WasmSubscription {
        self.store
            .show_pitch_selector
            .subscribe(move |show| notify(&callback, &JsValue::from_bool(*show)))
            .into()
    }
}

impl WasmStore {
    fn apply(&mut self, event: SelectorEvent) -> JsValue {
        let command: ToneCommand = self.selector.apply(&self.store, event);
        to_js(&command)
    }
}

impl Default for WasmStore {
    fn default() -> Self {
        Self::new()
    }
}

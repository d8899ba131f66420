use crate::selector::SelectorEvent;
use device_query::{DeviceQuery, DeviceState, Keycode};
use std::collections::HashMap;
use std::sync::mpsc::Sender;

/// Polls the computer keyboard and turns key presses into selector events.
pub struct KeyboardHandler {
    device_state: DeviceState,
    pressed: Vec<Keycode>,
    key_to_pitch_class: HashMap<Keycode, usize>,
    key_to_octave: HashMap<Keycode, u8>,
    event_sender: Sender<SelectorEvent>,
}

impl KeyboardHandler {
    pub fn new(event_sender: Sender<SelectorEvent>) -> Self {
        // Piano layout: home row naturals from C, top row accidentals
        let key_to_pitch_class: HashMap<Keycode, usize> = [
            (Keycode::A, 0),  // C
            (Keycode::W, 1),  // C#/Db
            (Keycode::S, 2),  // D
            (Keycode::E, 3),  // D#/Eb
            (Keycode::D, 4),  // E
            (Keycode::F, 5),  // F
            (Keycode::T, 6),  // F#/Gb
            (Keycode::G, 7),  // G
            (Keycode::Y, 8),  // G#/Ab
            (Keycode::H, 9),  // A
            (Keycode::U, 10), // A#/Bb
            (Keycode::J, 11), // B
        ]
        .into_iter()
        .collect();

        let key_to_octave: HashMap<Keycode, u8> = [
            (Keycode::Key0, 0),
            (Keycode::Key1, 1),
            (Keycode::Key2, 2),
            (Keycode::Key3, 3),
            (Keycode::Key4, 4),
            (Keycode::Key5, 5),
            (Keycode::Key6, 6),
            (Keycode::Key7, 7),
            (Keycode::Key8, 8),
            (Keycode::Key9, 9),
        ]
        .into_iter()
        .collect();

        Self {
            device_state: DeviceState::new(),
            pressed: Vec::new(),
            key_to_pitch_class,
            key_to_octave,
            event_sender,
        }
    }

    pub fn update(&mut self) {
        let keys: Vec<Keycode> = self.device_state.get_keys();

        // Only edges matter; holding a key sends one event.
        for key in keys.iter().filter(|k| !self.pressed.contains(k)) {
            if let Some(event) = self.event_for(key) {
                log::debug!("Key '{:?}' pressed -> {:?}", key, event);
                if let Err(e) = self.event_sender.send(event) {
                    log::error!("Error sending selector event: {}", e);
                }
            }
        }
        self.pressed = keys;
    }

    fn event_for(&self, key: &Keycode) -> Option<SelectorEvent> {
        match key {
            Keycode::Space => Some(SelectorEvent::ToggleSelector),
            Keycode::Escape => Some(SelectorEvent::Release),
            _ => self
                .key_to_pitch_class
                .get(key)
                .map(|pc| SelectorEvent::SelectPitchClass(*pc))
                .or_else(|| {
                    self.key_to_octave
                        .get(key)
                        .map(|label| SelectorEvent::SelectOctave(*label))
                }),
        }
    }
}

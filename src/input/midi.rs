use crate::selector::SelectorEvent;
use midir::{MidiInput, MidiInputConnection, MidiInputPort};
use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};

/// Forwards note on/off messages from the first MIDI input port.
pub struct MidiHandler {
    /// Holds the connection to keep it alive
    #[allow(dead_code)]
    connection: Option<MidiInputConnection<()>>,
    receiver: Option<Receiver<(u8, u8, u8)>>, // (status, data1, data2)
    event_sender: Sender<SelectorEvent>,
}

impl MidiHandler {
    pub fn new(event_sender: Sender<SelectorEvent>) -> Self {
        match Self::try_new(event_sender.clone()) {
            Ok(handler) => handler,
            Err(e) => {
                log::warn!(
                    "Failed to initialize MIDI: {}. MIDI functionality will be disabled.",
                    e
                );
                Self {
                    connection: None,
                    receiver: None,
                    event_sender,
                }
            }
        }
    }

    fn try_new(event_sender: Sender<SelectorEvent>) -> Result<Self, Box<dyn Error>> {
        let midi_in = MidiInput::new("TonalStore Input")?;
        let port = Self::first_input_port(&midi_in)?;
        let port_name = midi_in.port_name(&port)?;

        let (sender, receiver) = mpsc::channel();

        let connection = midi_in.connect(
            &port,
            "tonal-store-input",
            move |_, message, _| {
                if message.len() >= 3 {
                    let _ = sender.send((message[0], message[1], message[2]));
                }
            },
            (),
        )?;

        log::info!("Opened MIDI port: {}", port_name);

        Ok(Self {
            connection: Some(connection),
            receiver: Some(receiver),
            event_sender,
        })
    }

    fn first_input_port(midi_in: &MidiInput) -> Result<MidiInputPort, Box<dyn Error>> {
        let in_ports = midi_in.ports();
        for port in &in_ports {
            log::debug!("MIDI input port: {}", midi_in.port_name(port)?);
        }
        in_ports
            .into_iter()
            .next()
            .ok_or_else(|| "No MIDI input ports found".into())
    }

    pub fn update(&mut self) {
        let Some(receiver) = &self.receiver else {
            return;
        };
        while let Ok((status, data1, data2)) = receiver.try_recv() {
            let event = match status & 0xF0 {
                0x90 if data2 > 0 => SelectorEvent::MidiNoteOn(data1),
                0x90 | 0x80 => SelectorEvent::MidiNoteOff(data1),
                _ => continue,
            };
            if let Err(e) = self.event_sender.send(event) {
                log::error!("Failed to send MIDI event: {}", e);
            }
        }
    }
}

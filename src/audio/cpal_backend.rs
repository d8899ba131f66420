use crate::audio::AudioBackend;
use crate::error::AudioError;
use crate::store::AudioContextHandle;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream};
use std::f32::consts::PI;
use std::sync::{Arc, Mutex};

const PREVIEW_GAIN: f32 = 0.2;

#[derive(Default)]
struct ToneState {
    frequency: Option<f32>,
    phase: f32,
}

/// Default output device through cpal, rendering a sine preview tone.
pub struct CpalBackend {
    stream: Option<Stream>,
    tone: Arc<Mutex<ToneState>>,
}

impl CpalBackend {
    pub fn new() -> Self {
        Self {
            stream: None,
            tone: Arc::new(Mutex::new(ToneState::default())),
        }
    }

    fn select_output_device(&self, host: &cpal::Host) -> Result<cpal::Device, AudioError> {
        if cfg!(target_os = "linux") {
            // ALSA lists raw hw devices first; prefer the sound server.
            for device in host.devices()? {
                let name = device.name().unwrap_or_default().to_lowercase();
                if name.starts_with("default:") || name.contains("pipewire") {
                    return Ok(device);
                }
            }
        }
        host.default_output_device()
            .ok_or(AudioError::NoOutputDevice)
    }

    fn build_stream(&mut self) -> Result<(Stream, AudioContextHandle), AudioError> {
        let host = cpal::default_host();
        let device = self.select_output_device(&host)?;
        log::info!("Selected device: {}", device.name().unwrap_or_default());

        let supported_config = device.default_output_config()?;
        let stream_config: cpal::StreamConfig = supported_config.clone().into();
        let sample_rate = stream_config.sample_rate.0;
        let channels = stream_config.channels;
        let tone = self.tone.clone();

        let stream = match supported_config.sample_format() {
            SampleFormat::F32 => device.build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let Ok(mut tone) = tone.lock() else {
                        data.fill(0.0);
                        return;
                    };
                    let Some(frequency) = tone.frequency else {
                        data.fill(0.0);
                        return;
                    };
                    let increment = 2.0 * PI * frequency / sample_rate as f32;
                    for frame in data.chunks_mut(channels as usize) {
                        let sample = tone.phase.sin() * PREVIEW_GAIN;
                        frame.fill(sample);
                        tone.phase = (tone.phase + increment) % (2.0 * PI);
                    }
                },
                |err| log::error!("Stream error: {}", err),
                None,
            )?,
            other => return Err(AudioError::UnsupportedSampleFormat(other)),
        };

        Ok((stream, AudioContextHandle::new(sample_rate, channels)))
    }
}

impl Default for CpalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for CpalBackend {
    fn start(&mut self) -> Result<AudioContextHandle, AudioError> {
        let (stream, handle) = self.build_stream()?;
        stream.play()?;
        self.stream = Some(stream);
        Ok(handle)
    }

    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(e) = stream.pause() {
                log::warn!("Failed to pause stream: {}", e);
            }
        }
    }

    fn set_tone(&mut self, frequency: Option<f64>) {
        match self.tone.lock() {
            Ok(mut tone) => {
                tone.frequency = frequency.map(|f| f as f32);
                if frequency.is_none() {
                    tone.phase = 0.0;
                }
            }
            Err(e) => log::error!("Tone state poisoned: {}", e),
        }
    }
}

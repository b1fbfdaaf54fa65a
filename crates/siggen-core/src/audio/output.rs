//! CPAL output stream

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};

use super::error::{AudioError, AudioResult};
use crate::config::AudioConfig;
use crate::processor::{GeneratorController, GeneratorEngine};

/// Keeps the output stream alive. Drop this to stop audio.
pub struct AudioHandle {
    _stream: Stream,
    sample_rate: u32,
    channels: u16,
    device_name: String,
}

impl AudioHandle {
    /// Sample rate negotiated with the device
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of device output channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Name of the output device
    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}

/// Open the configured output device and start rendering to it
///
/// An engine is spawned from the controller's current parameters at the
/// device sample rate and moved into the stream callback. The controller is
/// connected to it only once the stream is playing.
pub fn start_output(
    controller: &mut GeneratorController,
    config: &AudioConfig,
) -> AudioResult<AudioHandle> {
    let host = cpal::default_host();
    let device = match &config.device {
        Some(name) => find_device(&host, name)?,
        None => host
            .default_output_device()
            .ok_or(AudioError::NoDefaultDevice)?,
    };

    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    log::info!("Using audio device: {}", device_name);

    let supported = device
        .default_output_config()
        .map_err(|e| AudioError::ConfigError(e.to_string()))?;
    if supported.sample_format() != SampleFormat::F32 {
        return Err(AudioError::UnsupportedFormat(format!(
            "{:?}",
            supported.sample_format()
        )));
    }

    let stream_config: StreamConfig = supported.config();
    let sample_rate = stream_config.sample_rate.0;
    let channels = stream_config.channels;

    log::info!("Audio config: {} channels, {}Hz", channels, sample_rate);

    let (engine, sender) = controller.spawn_engine(sample_rate, channels as usize);
    let stream = build_output_stream(&device, &stream_config, engine)?;
    stream
        .play()
        .map_err(|e| AudioError::StreamPlayError(e.to_string()))?;
    controller.connect(sender);

    log::info!("Audio stream started");

    Ok(AudioHandle {
        _stream: stream,
        sample_rate,
        channels,
        device_name,
    })
}

fn find_device(host: &cpal::Host, name: &str) -> AudioResult<cpal::Device> {
    let mut devices = host
        .output_devices()
        .map_err(|e| AudioError::EnumerationError(e.to_string()))?;
    devices
        .find(|d| d.name().map(|n| n == name).unwrap_or(false))
        .ok_or_else(|| AudioError::DeviceNotFound(name.to_string()))
}

fn build_output_stream(
    device: &cpal::Device,
    config: &StreamConfig,
    mut engine: GeneratorEngine,
) -> AudioResult<Stream> {
    device
        .build_output_stream(
            config,
            move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                engine.render_interleaved(data);
            },
            move |err| {
                log::error!("Audio stream error: {}", err);
            },
            None,
        )
        .map_err(|e| AudioError::StreamBuildError(e.to_string()))
}

//! Signal generator processor and the parameter contract it exposes
//!
//! The editor never talks to the generator directly; it drives a
//! [`ParameterSink`]. Per-channel writes follow a two-step protocol: select
//! the channel with `set_current_channel`, then write with `set_parameter`.
//!
//! ```text
//! editor ──set_current_channel(ch)──► ParameterSink ──► ChannelParams[ch]
//!        ──set_parameter(p, value)──►
//! ```
//!
//! With audio running, the UI side holds a [`GeneratorController`] and the
//! audio thread owns a [`GeneratorEngine`]. Changes cross over through a
//! lock-free [`GeneratorCommand`] queue:
//!
//! ```text
//! UI thread ──► GeneratorController ──push()──► rtrb queue ──pop()──► GeneratorEngine
//!               (state mirror)                                       (audio callback)
//! ```

mod command;
mod controller;
mod engine;
mod oscillator;

pub use command::{command_channel, CommandSender, GeneratorCommand, COMMAND_QUEUE_CAPACITY};
pub use controller::GeneratorController;
pub use engine::{interleave_into, GeneratorEngine};
pub use oscillator::Oscillator;

use serde::{Deserialize, Serialize};

use crate::params::ParamIndex;
use crate::types::{
    ChannelBuffers, AMPLITUDE_SCALE, DEFAULT_OUTPUT_CHANNELS, MAX_OUTPUT_CHANNELS, SAMPLE_RATE,
};
use crate::waveform::Waveform;

/// The processor contract driven by the editor panel
pub trait ParameterSink {
    /// Select the channel subsequent `set_parameter` calls apply to
    fn set_current_channel(&mut self, channel: usize);

    /// Write a parameter on the current channel
    fn set_parameter(&mut self, param: ParamIndex, value: f32);

    /// Set the number of output channels
    fn set_output_channel_count(&mut self, count: i32);

    /// Current number of output channels
    fn output_channel_count(&self) -> usize;
}

/// Initial parameter values for new channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    /// Amplitude in slider units (0-1000)
    pub amplitude: f32,
    /// Frequency in Hz (1-1000)
    pub frequency: f32,
    /// Phase offset in degrees (0-360)
    pub phase: f32,
    /// Waveform kind
    pub waveform: Waveform,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            amplitude: 500.0,
            frequency: 10.0,
            phase: 0.0,
            waveform: Waveform::Sine,
        }
    }
}

/// Parameters for one output channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelParams {
    /// Amplitude in slider units (0-1000)
    pub amplitude: f32,
    /// Frequency in Hz
    pub frequency: f32,
    /// Phase offset in degrees
    pub phase_degrees: f32,
    /// Waveform kind
    pub waveform: Waveform,
}

impl From<GeneratorDefaults> for ChannelParams {
    fn from(defaults: GeneratorDefaults) -> Self {
        Self {
            amplitude: defaults.amplitude,
            frequency: defaults.frequency,
            phase_degrees: defaults.phase,
            waveform: defaults.waveform,
        }
    }
}

impl ChannelParams {
    /// Linear gain applied to the unit waveform
    pub fn gain(&self) -> f32 {
        self.amplitude / AMPLITUDE_SCALE
    }

    /// Phase offset in cycles
    pub fn phase_cycles(&self) -> f32 {
        self.phase_degrees / 360.0
    }

    /// Store a parameter value; returns false for an invalid waveform number
    fn write(&mut self, param: ParamIndex, value: f32) -> bool {
        match param {
            ParamIndex::Amplitude => self.amplitude = value,
            ParamIndex::Frequency => self.frequency = value,
            ParamIndex::Phase => self.phase_degrees = value,
            ParamIndex::WaveformType => match waveform_from_value(value) {
                Some(w) => self.waveform = w,
                None => return false,
            },
        }
        true
    }
}

/// Map a WaveformType parameter value to a waveform (rounded to nearest)
fn waveform_from_value(value: f32) -> Option<Waveform> {
    (value >= 0.0)
        .then(|| value.round() as usize)
        .and_then(Waveform::from_index)
}

/// Convert a requested output count to one the generator can hold
///
/// Negative counts become 0 and counts above [`MAX_OUTPUT_CHANNELS`] are
/// clamped, both with a warning.
fn clamp_output_count(count: impl TryInto<usize> + std::fmt::Display + Copy) -> usize {
    match count.try_into() {
        Ok(n) if n <= MAX_OUTPUT_CHANNELS => n,
        Ok(_) => {
            log::warn!(
                "set_output_channel_count: {} exceeds {} channels, clamping",
                count,
                MAX_OUTPUT_CHANNELS
            );
            MAX_OUTPUT_CHANNELS
        }
        Err(_) => {
            log::warn!("set_output_channel_count: negative count {} treated as 0", count);
            0
        }
    }
}

/// Per-channel generator state
#[derive(Debug, Clone)]
struct GeneratorChannel {
    params: ChannelParams,
    oscillator: Oscillator,
}

/// Multi-channel signal generator
///
/// Each output channel has its own amplitude, frequency, phase and waveform.
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    channels: Vec<GeneratorChannel>,
    current_channel: usize,
    sample_rate: u32,
    defaults: GeneratorDefaults,
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(SAMPLE_RATE, DEFAULT_OUTPUT_CHANNELS, GeneratorDefaults::default())
    }
}

impl SignalGenerator {
    /// Create a generator with `output_channels` channels at `defaults`
    ///
    /// Counts above [`MAX_OUTPUT_CHANNELS`] are clamped.
    pub fn new(sample_rate: u32, output_channels: usize, defaults: GeneratorDefaults) -> Self {
        let mut generator = Self {
            channels: Vec::with_capacity(MAX_OUTPUT_CHANNELS),
            current_channel: 0,
            sample_rate,
            defaults,
        };
        generator.resize_channels(clamp_output_count(output_channels));
        generator
    }

    /// Make sure channel storage can hold [`MAX_OUTPUT_CHANNELS`] without
    /// reallocating (a cloned generator only keeps its length)
    pub fn reserve_channel_capacity(&mut self) {
        let needed = MAX_OUTPUT_CHANNELS.saturating_sub(self.channels.len());
        self.channels.reserve_exact(needed);
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Change the sample rate (e.g. after the audio device negotiated one)
    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        self.sample_rate = sample_rate;
        for ch in &mut self.channels {
            ch.oscillator.set_sample_rate(sample_rate as f32);
        }
    }

    /// Channel the next `set_parameter` call writes to
    pub fn current_channel(&self) -> usize {
        self.current_channel
    }

    /// Parameters of a channel
    pub fn channel_params(&self, channel: usize) -> Option<&ChannelParams> {
        self.channels.get(channel).map(|ch| &ch.params)
    }

    /// Reset every oscillator's running phase
    pub fn reset(&mut self) {
        for ch in &mut self.channels {
            ch.oscillator.reset();
        }
    }

    /// Render one block into `outputs`
    ///
    /// Buffer `i` receives channel `i`. Buffers beyond the channel count are
    /// silenced; channels beyond the buffer count are not rendered.
    pub fn process(&mut self, outputs: &mut ChannelBuffers) {
        let frames = outputs.num_frames();
        self.process_frames(outputs, frames);
    }

    /// Render the first `frames` samples of every buffer in `outputs`
    ///
    /// Only `min(buffers, channels)` oscillators run; the rest of each buffer
    /// is left untouched.
    pub fn process_frames(&mut self, outputs: &mut ChannelBuffers, frames: usize) {
        for (index, buffer) in outputs.iter_mut().enumerate() {
            let len = frames.min(buffer.len());
            let buffer = &mut buffer[..len];
            let Some(ch) = self.channels.get_mut(index) else {
                buffer.fill(0.0);
                continue;
            };

            let params = ch.params;
            let gain = params.gain();
            let offset = params.phase_cycles();
            for sample in buffer.iter_mut() {
                *sample = gain * ch.oscillator.tick(params.waveform, params.frequency, offset);
            }
        }
    }

    /// Apply a queued command
    ///
    /// Runs on the audio thread: invalid commands are dropped without
    /// logging (the sending side already warned).
    pub fn apply(&mut self, command: GeneratorCommand) {
        match command {
            GeneratorCommand::SetParameter { channel, param, value } => {
                if let Some(ch) = self.channels.get_mut(channel) {
                    ch.params.write(param, value);
                }
            }
            GeneratorCommand::SetOutputChannels(count) => {
                self.resize_channels(count.min(MAX_OUTPUT_CHANNELS));
            }
        }
    }

    fn resize_channels(&mut self, count: usize) {
        let sample_rate = self.sample_rate as f32;
        let defaults = self.defaults;
        let start = self.channels.len();
        self.channels.truncate(count);
        self.channels.extend((start..count).map(|index| GeneratorChannel {
            params: defaults.into(),
            oscillator: Oscillator::new(sample_rate, index as u64 + 1),
        }));
    }
}

impl ParameterSink for SignalGenerator {
    fn set_current_channel(&mut self, channel: usize) {
        self.current_channel = channel;
    }

    fn set_parameter(&mut self, param: ParamIndex, value: f32) {
        let channel = self.current_channel;
        let outputs = self.channels.len();
        let Some(ch) = self.channels.get_mut(channel) else {
            log::warn!(
                "set_parameter: channel {} out of range ({} outputs), ignoring {}",
                channel,
                outputs,
                param.name()
            );
            return;
        };

        if !ch.params.write(param, value) {
            log::warn!("set_parameter: invalid waveform type {}", value);
            return;
        }
        log::trace!("set_parameter: ch {} {} = {}", channel, param.name(), value);
    }

    fn set_output_channel_count(&mut self, count: i32) {
        let count = clamp_output_count(count);
        log::info!(
            "set_output_channel_count: {} -> {} channels",
            self.channels.len(),
            count
        );
        self.resize_channels(count);
    }

    fn output_channel_count(&self) -> usize {
        self.channels.len()
    }
}

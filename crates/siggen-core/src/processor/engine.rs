//! Audio-thread side of the generator
//!
//! The engine exclusively owns its [`SignalGenerator`], the command consumer
//! and a block buffer sized once for the device. Nothing in the render path
//! locks or allocates.

use super::command::GeneratorCommand;
use super::SignalGenerator;
use crate::types::{ChannelBuffers, MAX_BLOCK_FRAMES};

/// Generator state owned by the audio callback
pub struct GeneratorEngine {
    generator: SignalGenerator,
    command_rx: rtrb::Consumer<GeneratorCommand>,
    /// One buffer per device channel, `MAX_BLOCK_FRAMES` long
    block: ChannelBuffers,
}

impl GeneratorEngine {
    /// Create an engine rendering `generator` to `device_channels` outputs
    pub fn new(
        mut generator: SignalGenerator,
        command_rx: rtrb::Consumer<GeneratorCommand>,
        device_channels: usize,
    ) -> Self {
        generator.reserve_channel_capacity();
        Self {
            generator,
            command_rx,
            block: ChannelBuffers::new(device_channels, MAX_BLOCK_FRAMES),
        }
    }

    /// The engine's generator
    pub fn generator(&self) -> &SignalGenerator {
        &self.generator
    }

    /// Apply every queued command; returns how many were applied
    pub fn process_commands(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(cmd) = self.command_rx.pop() {
            self.generator.apply(cmd);
            applied += 1;
        }
        applied
    }

    /// Fill an interleaved device buffer
    ///
    /// Drains pending commands first. Generator channel `i` goes to device
    /// channel `i`; only `min(device_channels, generator_channels)`
    /// oscillators run and the remaining device channels are silent.
    pub fn render_interleaved(&mut self, data: &mut [f32]) {
        self.process_commands();

        let device_channels = self.block.num_channels();
        if device_channels == 0 {
            data.fill(0.0);
            return;
        }

        for chunk in data.chunks_mut(device_channels * MAX_BLOCK_FRAMES) {
            let frames = chunk.len().div_ceil(device_channels);
            self.generator.process_frames(&mut self.block, frames);
            interleave_into(&self.block, chunk, device_channels);
        }
    }
}

/// Write per-channel buffers into an interleaved device buffer
///
/// Device channels without a buffer are silenced.
pub fn interleave_into(block: &ChannelBuffers, data: &mut [f32], device_channels: usize) {
    if device_channels == 0 {
        return;
    }
    for (frame_index, frame) in data.chunks_mut(device_channels).enumerate() {
        for (ch, out) in frame.iter_mut().enumerate() {
            *out = block
                .channel(ch)
                .and_then(|samples| samples.get(frame_index))
                .copied()
                .unwrap_or(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamIndex;
    use crate::processor::command::command_channel;
    use crate::processor::{GeneratorDefaults, ParameterSink};
    use crate::waveform::Waveform;

    fn dc_generator(channels: usize) -> SignalGenerator {
        // Square at 0 Hz holds +1 forever, scaled by amplitude
        let defaults = GeneratorDefaults {
            amplitude: 500.0,
            frequency: 0.0,
            phase: 0.0,
            waveform: Waveform::Square,
        };
        SignalGenerator::new(48_000, channels, defaults)
    }

    #[test]
    fn test_interleave_fills_missing_channels_with_silence() {
        let mut block = ChannelBuffers::new(1, 3);
        block[0].copy_from_slice(&[0.1, 0.2, 0.3]);

        let mut data = [9.0f32; 6];
        interleave_into(&block, &mut data, 2);
        assert_eq!(data, [0.1, 0.0, 0.2, 0.0, 0.3, 0.0]);
    }

    #[test]
    fn test_renders_min_of_device_and_generator_channels() {
        let (_tx, rx) = command_channel(8);
        let mut engine = GeneratorEngine::new(dc_generator(1), rx, 3);

        let mut data = [9.0f32; 6];
        engine.render_interleaved(&mut data);
        assert_eq!(data, [0.5, 0.0, 0.0, 0.5, 0.0, 0.0]);

        let (_tx, rx) = command_channel(8);
        let mut engine = GeneratorEngine::new(dc_generator(4), rx, 2);
        let mut data = [9.0f32; 4];
        engine.render_interleaved(&mut data);
        assert_eq!(data, [0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_commands_applied_before_render() {
        let (mut tx, rx) = command_channel(8);
        let mut engine = GeneratorEngine::new(dc_generator(1), rx, 2);

        tx.send(GeneratorCommand::SetOutputChannels(2)).unwrap();
        tx.send(GeneratorCommand::SetParameter {
            channel: 1,
            param: ParamIndex::Amplitude,
            value: 250.0,
        })
        .unwrap();

        let mut data = [0.0f32; 4];
        engine.render_interleaved(&mut data);
        assert_eq!(engine.generator().output_channel_count(), 2);
        assert_eq!(data, [0.5, 0.25, 0.5, 0.25]);
        assert_eq!(engine.process_commands(), 0);
    }

    #[test]
    fn test_large_callback_rendered_in_passes() {
        let (_tx, rx) = command_channel(8);
        let mut engine = GeneratorEngine::new(dc_generator(1), rx, 1);

        let mut data = vec![0.0f32; MAX_BLOCK_FRAMES * 2 + 5];
        engine.render_interleaved(&mut data);
        assert!(data.iter().all(|&s| s == 0.5));
    }
}

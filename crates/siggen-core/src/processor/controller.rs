//! UI-thread side of the generator

use super::command::{command_channel, CommandSender, GeneratorCommand, COMMAND_QUEUE_CAPACITY};
use super::engine::GeneratorEngine;
use super::{waveform_from_value, ChannelParams, ParameterSink, SignalGenerator};
use crate::params::ParamIndex;

/// The processor the editor drives
///
/// Keeps a mirror of the generator's parameters for the UI to read, and
/// forwards every accepted change to the audio engine once one is attached.
/// Without an engine it is a plain parameter store.
#[derive(Debug)]
pub struct GeneratorController {
    state: SignalGenerator,
    sender: Option<CommandSender>,
}

impl GeneratorController {
    /// Wrap a generator; no engine attached yet
    pub fn new(state: SignalGenerator) -> Self {
        Self { state, sender: None }
    }

    /// Parameters of a channel
    pub fn channel_params(&self, channel: usize) -> Option<&ChannelParams> {
        self.state.channel_params(channel)
    }

    /// Whether changes are being forwarded to an engine
    pub fn is_attached(&self) -> bool {
        self.sender.is_some()
    }

    /// Create an engine that starts from the current parameters
    ///
    /// The engine is not connected until [`connect`](Self::connect) is called
    /// with the returned sender, so a stream that fails to start leaves the
    /// controller detached.
    pub fn spawn_engine(
        &self,
        sample_rate: u32,
        device_channels: usize,
    ) -> (GeneratorEngine, CommandSender) {
        let (sender, command_rx) = command_channel(COMMAND_QUEUE_CAPACITY);
        let mut generator = self.state.clone();
        generator.set_sample_rate(sample_rate);
        (GeneratorEngine::new(generator, command_rx, device_channels), sender)
    }

    /// Start forwarding changes through `sender`
    pub fn connect(&mut self, sender: CommandSender) {
        self.sender = Some(sender);
    }

    fn send(&mut self, cmd: GeneratorCommand) {
        let Some(sender) = self.sender.as_mut() else {
            return;
        };
        if sender.is_abandoned() {
            log::warn!("GeneratorController: audio engine gone, detaching");
            self.sender = None;
            return;
        }
        if let Err(cmd) = sender.send(cmd) {
            log::warn!("GeneratorController: command queue full, dropping {:?}", cmd);
        }
    }
}

impl ParameterSink for GeneratorController {
    fn set_current_channel(&mut self, channel: usize) {
        self.state.set_current_channel(channel);
    }

    fn set_parameter(&mut self, param: ParamIndex, value: f32) {
        let channel = self.state.current_channel();
        self.state.set_parameter(param, value);

        // Forward only writes the mirror accepted
        let in_range = channel < self.state.output_channel_count();
        let valid = param != ParamIndex::WaveformType || waveform_from_value(value).is_some();
        if in_range && valid {
            self.send(GeneratorCommand::SetParameter { channel, param, value });
        }
    }

    fn set_output_channel_count(&mut self, count: i32) {
        self.state.set_output_channel_count(count);
        let clamped = self.state.output_channel_count();
        self.send(GeneratorCommand::SetOutputChannels(clamped));
    }

    fn output_channel_count(&self) -> usize {
        self.state.output_channel_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::GeneratorDefaults;
    use crate::types::MAX_OUTPUT_CHANNELS;
    use crate::waveform::Waveform;

    fn controller(channels: usize) -> GeneratorController {
        GeneratorController::new(SignalGenerator::new(
            48_000,
            channels,
            GeneratorDefaults::default(),
        ))
    }

    #[test]
    fn test_detached_controller_updates_mirror() {
        let mut ctl = controller(2);
        ctl.set_current_channel(1);
        ctl.set_parameter(ParamIndex::Phase, 180.0);
        assert!(!ctl.is_attached());
        assert_eq!(ctl.channel_params(1).unwrap().phase_degrees, 180.0);
    }

    #[test]
    fn test_changes_reach_engine() {
        let mut ctl = controller(1);
        let (mut engine, sender) = ctl.spawn_engine(44_100, 2);
        ctl.connect(sender);

        ctl.set_output_channel_count(2);
        ctl.set_current_channel(1);
        ctl.set_parameter(ParamIndex::Frequency, 440.0);
        ctl.set_parameter(ParamIndex::WaveformType, Waveform::Saw.index() as f32);

        assert_eq!(engine.process_commands(), 3);
        let generator = engine.generator();
        assert_eq!(generator.sample_rate(), 44_100);
        assert_eq!(generator.output_channel_count(), 2);
        assert_eq!(generator.channel_params(1).unwrap().frequency, 440.0);
        assert_eq!(generator.channel_params(1).unwrap().waveform, Waveform::Saw);
    }

    #[test]
    fn test_rejected_writes_not_forwarded() {
        let mut ctl = controller(1);
        let (mut engine, sender) = ctl.spawn_engine(48_000, 1);
        ctl.connect(sender);

        ctl.set_current_channel(3);
        ctl.set_parameter(ParamIndex::Amplitude, 10.0);
        ctl.set_current_channel(0);
        ctl.set_parameter(ParamIndex::WaveformType, 17.0);

        assert_eq!(engine.process_commands(), 0);
    }

    #[test]
    fn test_huge_count_sent_clamped() {
        let mut ctl = controller(1);
        let (mut engine, sender) = ctl.spawn_engine(48_000, 1);
        ctl.connect(sender);

        ctl.set_output_channel_count(i32::MAX);
        assert_eq!(ctl.output_channel_count(), MAX_OUTPUT_CHANNELS);
        assert_eq!(engine.process_commands(), 1);
        assert_eq!(engine.generator().output_channel_count(), MAX_OUTPUT_CHANNELS);
    }

    #[test]
    fn test_detaches_when_engine_dropped() {
        let mut ctl = controller(1);
        let (engine, sender) = ctl.spawn_engine(48_000, 1);
        ctl.connect(sender);
        drop(engine);

        ctl.set_parameter(ParamIndex::Amplitude, 20.0);
        assert!(!ctl.is_attached());
        assert_eq!(ctl.channel_params(0).unwrap().amplitude, 20.0);
    }
}

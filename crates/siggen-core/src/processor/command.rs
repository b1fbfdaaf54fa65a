//! Lock-free command queue from the UI thread to the audio engine
//!
//! The UI pushes fully resolved commands (the channel is explicit, counts are
//! already clamped); the audio callback drains the queue at the start of each
//! block. Both sides are wait-free and the ring buffer is allocated once.

use crate::params::ParamIndex;

/// Queue slots; one slider move costs one slot per active channel
pub const COMMAND_QUEUE_CAPACITY: usize = 1024;

/// Commands sent from the UI thread to the audio engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorCommand {
    /// Write a parameter on one channel
    SetParameter {
        channel: usize,
        param: ParamIndex,
        value: f32,
    },
    /// Resize to this many output channels
    SetOutputChannels(usize),
}

/// Create a command queue with `capacity` slots
pub fn command_channel(
    capacity: usize,
) -> (CommandSender, rtrb::Consumer<GeneratorCommand>) {
    let (producer, consumer) = rtrb::RingBuffer::new(capacity);
    (CommandSender { producer }, consumer)
}

/// Command sender for the UI thread
///
/// Wraps the lock-free producer. All operations are non-blocking.
pub struct CommandSender {
    producer: rtrb::Producer<GeneratorCommand>,
}

impl CommandSender {
    /// Queue a command
    ///
    /// Returns `Err(cmd)` if the queue is full.
    pub fn send(&mut self, cmd: GeneratorCommand) -> Result<(), GeneratorCommand> {
        self.producer.push(cmd).map_err(|e| match e {
            rtrb::PushError::Full(value) => value,
        })
    }

    /// True once the engine side has been dropped (audio stopped)
    pub fn is_abandoned(&self) -> bool {
        self.producer.is_abandoned()
    }
}

impl std::fmt::Debug for CommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSender")
            .field("slots", &self.producer.slots())
            .finish()
    }
}

//! Common types for Siggen
//!
//! Sample type, engine-wide constants and the multi-channel block buffer
//! the generator renders into.

use std::ops::{Index, IndexMut};

/// Default sample rate (48kHz - standard professional audio rate)
/// This is the default; actual rate is read from the audio device at runtime.
pub const SAMPLE_RATE: u32 = 48000;

/// Default number of output channels for a freshly created generator
pub const DEFAULT_OUTPUT_CHANNELS: usize = 1;

/// Upper bound on generator output channels
///
/// The editor's channel count has no ceiling; the generator clamps to this so
/// a huge commit cannot exhaust memory. Channel storage is reserved up front
/// at this size, so resizing never reallocates.
pub const MAX_OUTPUT_CHANNELS: usize = 64;

/// Frames rendered per pass by the audio engine
///
/// Device callbacks larger than this are rendered in several passes.
pub const MAX_BLOCK_FRAMES: usize = 4096;

/// Amplitude slider units per full-scale sample (1000 → ±1.0)
pub const AMPLITUDE_SCALE: f32 = 1000.0;

/// Audio sample type
pub type Sample = f32;

/// One block of non-interleaved audio, one buffer per channel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelBuffers {
    channels: Vec<Vec<Sample>>,
    frames: usize,
}

impl ChannelBuffers {
    /// Create `channels` silent buffers of `frames` samples each
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            channels: vec![vec![0.0; frames]; channels],
            frames,
        }
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames per channel
    pub fn num_frames(&self) -> usize {
        self.frames
    }

    /// Get a channel's samples
    pub fn channel(&self, index: usize) -> Option<&[Sample]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Iterate channels mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut [Sample]> {
        self.channels.iter_mut().map(Vec::as_mut_slice)
    }
}

impl Index<usize> for ChannelBuffers {
    type Output = [Sample];

    fn index(&self, index: usize) -> &Self::Output {
        &self.channels[index]
    }
}

impl IndexMut<usize> for ChannelBuffers {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.channels[index]
    }
}

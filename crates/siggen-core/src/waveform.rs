//! Waveform kinds produced by the generator

use serde::{Deserialize, Serialize};

/// Number of waveform kinds
pub const NUM_WAVEFORMS: usize = 5;

/// Waveform identifiers
///
/// The discriminant is the value written to `ParamIndex::WaveformType`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum Waveform {
    #[default]
    Sine = 0,
    Square = 1,
    Saw = 2,
    Triangle = 3,
    Noise = 4,
}

impl Waveform {
    /// All waveforms in button order
    pub const ALL: [Waveform; NUM_WAVEFORMS] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Saw,
        Waveform::Triangle,
        Waveform::Noise,
    ];

    /// Convert from waveform-type number (0-4)
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Waveform-type number
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Saw => "Saw",
            Waveform::Triangle => "Triangle",
            Waveform::Noise => "Noise",
        }
    }

    /// Evaluate a deterministic waveform at `phase` (0.0-1.0)
    ///
    /// Noise has no shape; it returns 0.0 here and is drawn from an RNG by
    /// the oscillator.
    pub fn shape(&self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (std::f32::consts::TAU * phase).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => 2.0 * phase - 1.0,
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Noise => 0.0,
        }
    }
}

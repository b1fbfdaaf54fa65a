//! Parameter contract between the editor and the generator
//!
//! Parameter indices are positional: the editor and the processor must agree
//! on them, so the discriminants below never change.

use serde::{Deserialize, Serialize};

/// Number of generator parameters
pub const NUM_PARAMS: usize = 4;

/// Generator parameter identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum ParamIndex {
    Amplitude = 0,
    Frequency = 1,
    Phase = 2,
    WaveformType = 3,
}

impl ParamIndex {
    /// All parameters in index order
    pub const ALL: [ParamIndex; NUM_PARAMS] = [
        ParamIndex::Amplitude,
        ParamIndex::Frequency,
        ParamIndex::Phase,
        ParamIndex::WaveformType,
    ];

    /// Convert from positional index (0-3)
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(ParamIndex::Amplitude),
            1 => Some(ParamIndex::Frequency),
            2 => Some(ParamIndex::Phase),
            3 => Some(ParamIndex::WaveformType),
            _ => None,
        }
    }

    /// Positional index understood by the processor
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ParamIndex::Amplitude => "Amplitude",
            ParamIndex::Frequency => "Frequency",
            ParamIndex::Phase => "Phase",
            ParamIndex::WaveformType => "Waveform",
        }
    }

    /// The control range for this parameter
    pub fn range(&self) -> ParamRange {
        match self {
            ParamIndex::Amplitude => ParamRange::new(0.0, 1000.0, 10.0),
            ParamIndex::Frequency => ParamRange::new(1.0, 1000.0, 1.0).with_unit("Hz"),
            ParamIndex::Phase => ParamRange::new(0.0, 360.0, 1.0).with_unit("°"),
            ParamIndex::WaveformType => ParamRange::new(0.0, 4.0, 1.0),
        }
    }
}

/// Value range of a stepped control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Minimum value
    pub min: f32,
    /// Maximum value
    pub max: f32,
    /// Step size (0 = continuous)
    pub step: f32,
    /// Unit label (e.g., "Hz")
    pub unit: &'static str,
}

impl ParamRange {
    /// Create a new range
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self {
            min,
            max,
            step,
            unit: "",
        }
    }

    /// Set the unit label
    pub const fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }

    /// Clamp into the range and round to the nearest step from `min`
    pub fn snap(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Check whether a value lies inside the range
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Map a value to 0.0-1.0 across the range
    pub fn normalize(&self, value: f32) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_indices() {
        assert_eq!(ParamIndex::Amplitude.index(), 0);
        assert_eq!(ParamIndex::Frequency.index(), 1);
        assert_eq!(ParamIndex::Phase.index(), 2);
        assert_eq!(ParamIndex::WaveformType.index(), 3);
        for p in ParamIndex::ALL {
            assert_eq!(ParamIndex::from_index(p.index()), Some(p));
        }
        assert_eq!(ParamIndex::from_index(4), None);
    }

    #[test]
    fn test_amplitude_snaps_to_tens() {
        let range = ParamIndex::Amplitude.range();
        assert_eq!(range.snap(234.0), 230.0);
        assert_eq!(range.snap(236.0), 240.0);
        assert_eq!(range.snap(-5.0), 0.0);
        assert_eq!(range.snap(5000.0), 1000.0);
    }

    #[test]
    fn test_frequency_floor_is_one() {
        let range = ParamIndex::Frequency.range();
        assert_eq!(range.snap(0.0), 1.0);
        assert_eq!(range.snap(440.4), 440.0);
        assert_eq!(range.unit, "Hz");
    }

    #[test]
    fn test_normalize() {
        let range = ParamIndex::Phase.range();
        assert_eq!(range.normalize(180.0), 0.5);
        assert_eq!(range.normalize(720.0), 1.0);
        assert!(range.contains(360.0));
        assert!(!range.contains(361.0));
    }
}

//! Generator and audio configuration sections

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::ParamIndex;
use crate::processor::{GeneratorController, GeneratorDefaults, SignalGenerator};
use crate::types::{DEFAULT_OUTPUT_CHANNELS, MAX_OUTPUT_CHANNELS, SAMPLE_RATE};

/// Errors found while validating a configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Sample rate must be positive
    #[error("Sample rate must be greater than 0")]
    ZeroSampleRate,

    /// More output channels than the generator supports
    #[error("{count} output channels exceeds the maximum of {max}")]
    TooManyOutputChannels { count: usize, max: usize },

    /// A default parameter value lies outside its control range
    #[error("Default {param} {value} outside {min}..={max}")]
    DefaultOutOfRange {
        param: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Audio output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Start audio output at launch
    pub enabled: bool,
    /// Output device name (None = system default)
    pub device: Option<String>,
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sample rate used when no audio device dictates one
    pub sample_rate: u32,
    /// Number of output channels at startup
    pub output_channels: usize,
    /// Parameter values for new channels (and the editor's initial controls)
    pub defaults: GeneratorDefaults,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            output_channels: DEFAULT_OUTPUT_CHANNELS,
            defaults: GeneratorDefaults::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check the configuration for values the generator cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.output_channels > MAX_OUTPUT_CHANNELS {
            return Err(ConfigError::TooManyOutputChannels {
                count: self.output_channels,
                max: MAX_OUTPUT_CHANNELS,
            });
        }

        let checks = [
            (ParamIndex::Amplitude, self.defaults.amplitude),
            (ParamIndex::Frequency, self.defaults.frequency),
            (ParamIndex::Phase, self.defaults.phase),
        ];
        for (param, value) in checks {
            let range = param.range();
            if !range.contains(value) {
                return Err(ConfigError::DefaultOutOfRange {
                    param: param.name(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Build a generator from this configuration
    pub fn build(&self) -> SignalGenerator {
        SignalGenerator::new(self.sample_rate, self.output_channels, self.defaults)
    }

    /// Build the UI-side controller for a generator from this configuration
    pub fn build_controller(&self) -> GeneratorController {
        GeneratorController::new(self.build())
    }
}

//! Siggen Core - Signal generator processor and shared infrastructure
//!
//! - `params`: the positional parameter contract between editor and processor
//! - `waveform`: the five waveform kinds
//! - `processor`: the `ParameterSink` contract, the `SignalGenerator`, and the
//!   controller/engine pair that splits it between the UI and audio threads
//! - `config`: YAML configuration loading/saving
//! - `audio`: CPAL output host (feature `audio`)

pub mod params;
pub mod processor;
pub mod types;
pub mod waveform;
pub mod config;
#[cfg(feature = "audio")]
pub mod audio;

pub use params::{ParamIndex, ParamRange};
pub use processor::{
    ChannelParams, GeneratorCommand, GeneratorController, GeneratorDefaults, GeneratorEngine,
    ParameterSink, SignalGenerator,
};
pub use types::*;
pub use waveform::Waveform;

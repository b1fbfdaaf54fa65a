//! Application configuration for siggen
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/siggen/config.yaml

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use siggen_core::config::{
    default_config_path, load_config, save_config, AudioConfig, GeneratorConfig,
};

/// Config file name inside the siggen config directory
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generator settings (sample rate, channels, parameter defaults)
    pub generator: GeneratorConfig,
    /// Audio output settings
    pub audio: AudioConfig,
}

/// Get the default config file path
pub fn config_path() -> PathBuf {
    default_config_path(CONFIG_FILENAME)
}

/// Load and validate the app configuration
///
/// An invalid generator section is replaced by defaults with a warning.
pub fn load(path: &Path) -> AppConfig {
    let mut config: AppConfig = load_config(path);
    if let Err(e) = config.generator.validate() {
        log::warn!("load: Invalid generator config ({}), using defaults", e);
        config.generator = GeneratorConfig::default();
    }
    config
}

/// Save the app configuration
pub fn save(config: &AppConfig, path: &Path) -> Result<()> {
    save_config(config, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use siggen_core::Waveform;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.generator.output_channels, 1);
        assert!(!config.audio.enabled);
        assert!(config.audio.device.is_none());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        let mut config = AppConfig::default();
        config.generator.output_channels = 6;
        config.generator.defaults.waveform = Waveform::Square;
        config.audio.enabled = true;

        save(&config, &path).unwrap();
        assert_eq!(load(&path), config);
    }

    #[test]
    fn test_invalid_generator_section_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "generator:\n  sample_rate: 0\n  output_channels: 4\naudio:\n  enabled: true\n",
        )
        .unwrap();

        let config = load(&path);
        assert_eq!(config.generator, GeneratorConfig::default());
        assert!(config.audio.enabled);
    }
}

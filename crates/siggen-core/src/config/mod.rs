//! Shared configuration utilities for siggen
//!
//! - Generic YAML config loading/saving
//! - Config path utilities
//! - Generator configuration (sample rate, channel count, parameter defaults)
//! - Audio output configuration
//!
//! # Usage
//!
//! ```ignore
//! use siggen_core::config::{default_config_path, load_config, save_config};
//!
//! let path = default_config_path("config.yaml");
//! let config: MyAppConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod generator;
mod io;
mod paths;

pub use generator::{AudioConfig, ConfigError, GeneratorConfig};
pub use io::{load_config, save_config, try_load_config};
pub use paths::{config_dir, default_config_path, APP_DIR_NAME};

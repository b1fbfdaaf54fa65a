//! Siggen - standalone signal generator with its editor panel
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads the YAML configuration
//! 2. Builds the generator and optionally starts audio output
//! 3. Launches the iced GUI with the editor panel
//!
//! ## Command line flags
//!
//! - `--config <path>`: Use a config file other than ~/.config/siggen/config.yaml
//! - `--audio`: Start audio output even if disabled in the config
//! - `--no-audio`: Never start audio output (UI only)

mod app;
mod config;

use std::cell::RefCell;
use std::path::PathBuf;

use iced::{Size, Task};
use siggen_core::GeneratorController;

use app::{Message, SiggenApp};
use siggen_widgets::EDITOR_DESIRED_WIDTH;

/// Parsed command line flags
#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    force_audio: bool,
    no_audio: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => parsed.config_path = iter.next().map(PathBuf::from),
            "--audio" => parsed.force_audio = true,
            "--no-audio" => parsed.no_audio = true,
            other => log::warn!("Ignoring unknown argument: {}", other),
        }
    }
    parsed
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = parse_args(std::env::args().skip(1));
    log::info!("siggen starting up");

    let config_path = args.config_path.clone().unwrap_or_else(config::config_path);
    let config = config::load(&config_path);

    let mut processor = config.generator.build_controller();

    let audio_wanted = !args.no_audio && (args.force_audio || config.audio.enabled);
    let (audio_handle, audio_status) = start_audio(audio_wanted, &mut processor, &config);

    // The boot closure is Fn; hand the controller over through a cell
    let processor_cell = RefCell::new(Some(processor));
    let result = iced::application(
        move || {
            let processor = processor_cell.borrow_mut().take().unwrap_or_else(|| {
                log::warn!("boot: controller already taken, starting without audio");
                config.generator.build_controller()
            });
            let app = SiggenApp::new(
                processor,
                config.clone(),
                config_path.clone(),
                audio_status.clone(),
            );
            (app, Task::none())
        },
        update,
        view,
    )
    .theme(theme)
    .title("Siggen")
    .window_size(Size::new(EDITOR_DESIRED_WIDTH + 60.0, 320.0))
    .run();

    // Keep the audio stream alive until the window closes
    drop(audio_handle);
    log::info!("siggen stopped");

    result
}

#[cfg(feature = "audio")]
fn start_audio(
    wanted: bool,
    processor: &mut GeneratorController,
    config: &config::AppConfig,
) -> (Option<siggen_core::audio::AudioHandle>, String) {
    if !wanted {
        return (None, "Audio off".to_string());
    }
    match siggen_core::audio::start_output(processor, &config.audio) {
        Ok(handle) => {
            let status = format!(
                "Audio: {} ({} ch @ {} Hz)",
                handle.device_name(),
                handle.channels(),
                handle.sample_rate()
            );
            (Some(handle), status)
        }
        Err(e) => {
            log::warn!("Could not start audio output: {}", e);
            log::warn!("Running in UI-only mode (no audio output)");
            (None, format!("Audio unavailable: {}", e))
        }
    }
}

#[cfg(not(feature = "audio"))]
fn start_audio(
    wanted: bool,
    _processor: &mut GeneratorController,
    _config: &config::AppConfig,
) -> (Option<()>, String) {
    if wanted {
        log::warn!("Built without audio support; running UI only");
    }
    (None, "Audio off".to_string())
}

/// Update function for iced
fn update(app: &mut SiggenApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &SiggenApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Theme function for iced
fn theme(app: &SiggenApp) -> iced::Theme {
    app.theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_flags() {
        let parsed = args(&["--config", "/tmp/siggen.yaml", "--no-audio"]);
        assert_eq!(parsed.config_path, Some(PathBuf::from("/tmp/siggen.yaml")));
        assert!(parsed.no_audio);
        assert!(!parsed.force_audio);
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let parsed = args(&["--bogus", "--audio"]);
        assert!(parsed.force_audio);
        assert!(parsed.config_path.is_none());
    }
}

//! Main iced application for siggen
//!
//! Hosts one signal generator with its editor panel and the channel
//! selector. The app also plays the viewport role for the editor: a
//! committed channel-count change asks it to lay the editor out again, which
//! resizes the channel selector to the processor's new output count.

use std::path::PathBuf;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Center, Element, Fill, Task, Theme};

use siggen_core::{GeneratorController, ParameterSink};
use siggen_widgets::button_styles::arrow_button_style;
use siggen_widgets::{
    channel_selector_view, editor_view, ChannelSelectorMessage, ChannelSelectorState,
    EditorContext, EditorId, EditorMessage, EditorState, EditorViewport,
};

use crate::config::{self, AppConfig};

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Editor panel message
    Editor(EditorMessage),
    /// Channel selector message
    ChannelSelector(ChannelSelectorMessage),
    /// Save the current control values as the startup defaults
    SaveConfig,
}

/// Viewport state: records relayout requests from the editor
#[derive(Debug, Default)]
pub struct HostViewport {
    /// Editor waiting to be laid out again
    pending: Option<EditorId>,
    /// Number of relayouts performed
    relayouts: u64,
}

impl HostViewport {
    /// Take the pending relayout request, if any
    pub fn take_pending(&mut self) -> Option<EditorId> {
        self.pending.take()
    }

    /// Number of relayouts performed
    pub fn relayouts(&self) -> u64 {
        self.relayouts
    }
}

impl EditorViewport for HostViewport {
    fn make_editor_visible(&mut self, editor: EditorId) {
        log::debug!("viewport: relayout requested by editor {}", editor.get());
        self.pending = Some(editor);
        self.relayouts += 1;
    }
}

/// Application state
pub struct SiggenApp {
    /// Generator parameters; forwards changes to the audio engine if running
    processor: GeneratorController,
    /// Editor panel for the generator
    editor: EditorState,
    /// Channel selection strip
    channel_selector: ChannelSelectorState,
    /// Viewport collaborator
    viewport: HostViewport,
    /// Loaded configuration (updated on save)
    config: AppConfig,
    /// Where the configuration is saved
    config_path: PathBuf,
    /// Status line
    status: String,
}

impl SiggenApp {
    /// Create a new application instance
    pub fn new(
        processor: GeneratorController,
        config: AppConfig,
        config_path: PathBuf,
        audio_status: String,
    ) -> Self {
        let channels = config.generator.output_channels;
        Self {
            processor,
            editor: EditorState::new(&config.generator.defaults, channels),
            channel_selector: ChannelSelectorState::new(channels),
            viewport: HostViewport::default(),
            config,
            config_path,
            status: audio_status,
        }
    }

    /// The editor panel state
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// The channel selector state
    pub fn channel_selector(&self) -> &ChannelSelectorState {
        &self.channel_selector
    }

    /// The viewport state
    pub fn viewport(&self) -> &HostViewport {
        &self.viewport
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(editor_msg) => {
                let mut ctx = EditorContext {
                    processor: &mut self.processor,
                    channels: &self.channel_selector,
                    viewport: &mut self.viewport,
                };
                self.editor.update(editor_msg, &mut ctx);

                if self.viewport.take_pending().is_some() {
                    let outputs = self.processor.output_channel_count();
                    self.channel_selector.set_channel_count(outputs);
                    self.status = format!("{} output channel(s)", outputs);
                }
                Task::none()
            }

            Message::ChannelSelector(selector_msg) => {
                self.channel_selector.handle_message(selector_msg);
                Task::none()
            }

            Message::SaveConfig => {
                self.config.generator.defaults = self.editor.to_defaults();
                self.config.generator.output_channels = self.processor.output_channel_count();
                self.status = match config::save(&self.config, &self.config_path) {
                    Ok(()) => format!("Saved {}", self.config_path.display()),
                    Err(e) => {
                        log::error!("update: {:#}", e);
                        format!("Save failed: {}", e)
                    }
                };
                Task::none()
            }
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("SIGGEN").size(20),
            Space::new().width(Fill),
            button(text("Save defaults").size(11))
                .on_press(Message::SaveConfig)
                .padding([3, 8])
                .style(|_theme, status| arrow_button_style(status)),
        ]
        .spacing(10)
        .align_y(Center);

        let selector = channel_selector_view(&self.channel_selector).map(Message::ChannelSelector);
        let editor = editor_view(&self.editor).map(Message::Editor);

        let content = column![
            header,
            selector,
            editor,
            Space::new().height(Fill),
            text(&self.status).size(11),
        ]
        .spacing(10)
        .padding(10);

        container(content).width(Fill).height(Fill).into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

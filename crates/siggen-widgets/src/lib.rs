//! Shared UI widgets for the siggen editor panel
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: Pure data (`EditorState`, `WaveformSelectorState`, `ChannelSelectorState`)
//! - **Messages**: One enum per widget, one variant per control
//! - **View functions**: Take state, return `Element<Message>`
//!
//! The editor panel routes every control change to a
//! [`siggen_core::ParameterSink`] once per active channel. The active channel
//! set and the hosting viewport are external collaborators, see [`traits`].

pub mod button_styles;
pub mod channel_selector;
pub mod editor;
pub mod rotary_knob;
pub mod theme;
pub mod traits;
pub mod waveform_selector;

pub use channel_selector::{channel_selector_view, ChannelSelectorMessage, ChannelSelectorState};
pub use editor::{
    editor_view, parse_int_lenient, EditorContext, EditorId, EditorMessage, EditorState,
    EDITOR_DESIRED_WIDTH,
};
pub use rotary_knob::{rotary_knob, RotarySlider};
pub use traits::{ActiveChannels, EditorViewport};
pub use waveform_selector::{waveform_selector_view, WaveformSelectorState};

//! Messages for the signal generator editor panel

use siggen_core::Waveform;

/// Messages emitted by the editor panel, one per control
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMessage {
    /// Amplitude knob moved (0-1000)
    AmplitudeChanged(f32),

    /// Frequency knob moved (1-1000 Hz)
    FrequencyChanged(f32),

    /// Phase knob moved (0-360°)
    PhaseChanged(f32),

    /// Waveform button pressed
    WaveformSelected(Waveform),

    /// Channel-count up arrow pressed
    IncrementChannels,

    /// Channel-count down arrow pressed
    DecrementChannels,

    /// Channel-count label text edited (not yet committed)
    ChannelCountEdited(String),

    /// Channel-count label edit committed (Enter)
    ChannelCountCommitted,
}

//! Signal Generator Editor Panel
//!
//! Controls for one signal generator processor:
//! - 5 waveform buttons (radio group)
//! - amplitude / frequency / phase rotary sliders
//! - output channel count label with up/down arrows
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ [∿][⊓][/|][/\][≈]                    ▲   │
//! │  (Amp)   (Freq)   (Phase)          [ 1 ] │
//! │                                       ▼  │
//! └──────────────────────────────────────────┘
//!          │ EditorMessage
//!          ▼
//! EditorState::update ──► for ch in active channels:
//!                            set_current_channel(ch)
//!                            set_parameter(param, value)
//! ```
//!
//! Knob and waveform changes are routed to every active channel. The channel
//! count is edited as text; only a committed edit reaches the processor, and
//! it also asks the viewport to lay the editor out again.

mod message;
mod view;

pub use message::EditorMessage;
pub use view::editor_view;

use std::sync::atomic::{AtomicU64, Ordering};

use siggen_core::{GeneratorDefaults, ParamIndex, ParameterSink, Waveform};

use crate::rotary_knob::RotarySlider;
use crate::traits::{ActiveChannels, EditorViewport};
use crate::waveform_selector::WaveformSelectorState;

/// Width the editor asks its viewport for, in pixels
pub const EDITOR_DESIRED_WIDTH: f32 = 270.0;

/// Global counter for generating unique editor IDs
static EDITOR_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an editor panel, used by the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorId(u64);

impl EditorId {
    /// Allocate a fresh ID
    pub fn next() -> Self {
        Self(EDITOR_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Parse the leading integer of a string, the way a text label reads a number
///
/// Leading whitespace and one sign are accepted, then digits up to the first
/// non-digit. Text without leading digits reads as 0. Values beyond `i32`
/// saturate.
pub fn parse_int_lenient(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            (acc * 10 + i64::from(d - b'0')).min(i64::from(i32::MAX) + 1)
        });

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Everything an editor update may touch outside the editor itself
pub struct EditorContext<'a> {
    /// The processor whose parameters are written
    pub processor: &'a mut dyn ParameterSink,
    /// Channels currently selected for editing
    pub channels: &'a dyn ActiveChannels,
    /// Container that lays this editor out
    pub viewport: &'a mut dyn EditorViewport,
}

/// State of one signal generator editor panel
#[derive(Debug, Clone)]
pub struct EditorState {
    id: EditorId,
    /// Amplitude knob
    pub amplitude: RotarySlider,
    /// Frequency knob
    pub frequency: RotarySlider,
    /// Phase knob
    pub phase: RotarySlider,
    /// Waveform radio group
    pub waveform: WaveformSelectorState,
    /// Channel-count label text
    channel_count_text: String,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&GeneratorDefaults::default(), 1)
    }
}

impl EditorState {
    /// Create an editor whose controls show `defaults` and `output_channels`
    pub fn new(defaults: &GeneratorDefaults, output_channels: usize) -> Self {
        Self {
            id: EditorId::next(),
            amplitude: RotarySlider::new(ParamIndex::Amplitude, defaults.amplitude),
            frequency: RotarySlider::new(ParamIndex::Frequency, defaults.frequency),
            phase: RotarySlider::new(ParamIndex::Phase, defaults.phase),
            waveform: WaveformSelectorState::new(defaults.waveform),
            channel_count_text: output_channels.to_string(),
        }
    }

    /// This editor's ID
    pub fn id(&self) -> EditorId {
        self.id
    }

    /// Channel-count label text
    pub fn channel_count_text(&self) -> &str {
        &self.channel_count_text
    }

    /// Channel-count label read as a number
    pub fn channel_count(&self) -> i32 {
        parse_int_lenient(&self.channel_count_text)
    }

    /// Selected waveform
    pub fn selected_waveform(&self) -> Waveform {
        self.waveform.selected()
    }

    /// Current control values as generator defaults (for saving)
    pub fn to_defaults(&self) -> GeneratorDefaults {
        GeneratorDefaults {
            amplitude: self.amplitude.value(),
            frequency: self.frequency.value(),
            phase: self.phase.value(),
            waveform: self.waveform.selected(),
        }
    }

    /// Handle a message, writing through to the processor where required
    pub fn update(&mut self, message: EditorMessage, ctx: &mut EditorContext<'_>) {
        match message {
            EditorMessage::AmplitudeChanged(value) => {
                let value = self.amplitude.set_value(value);
                route_to_active_channels(ctx, ParamIndex::Amplitude, value);
            }
            EditorMessage::FrequencyChanged(value) => {
                let value = self.frequency.set_value(value);
                route_to_active_channels(ctx, ParamIndex::Frequency, value);
            }
            EditorMessage::PhaseChanged(value) => {
                let value = self.phase.set_value(value);
                route_to_active_channels(ctx, ParamIndex::Phase, value);
            }
            EditorMessage::WaveformSelected(waveform) => {
                self.waveform.select(waveform);
                route_to_active_channels(ctx, ParamIndex::WaveformType, waveform.index() as f32);
            }
            EditorMessage::IncrementChannels => self.increment_channels(),
            EditorMessage::DecrementChannels => self.decrement_channels(),
            EditorMessage::ChannelCountEdited(text) => {
                self.channel_count_text = text;
            }
            EditorMessage::ChannelCountCommitted => {
                let count = self.channel_count();
                log::info!(
                    "editor {}: output channels committed as {} (from {:?})",
                    self.id.get(),
                    count,
                    self.channel_count_text
                );
                ctx.processor.set_output_channel_count(count);
                ctx.viewport.make_editor_visible(self.id);
            }
        }
    }

    /// Up arrow: label value + 1, unbounded
    fn increment_channels(&mut self) {
        let next = self.channel_count().saturating_add(1);
        self.channel_count_text = next.to_string();
    }

    /// Down arrow: label value - 1, never below 1
    fn decrement_channels(&mut self) {
        let current = self.channel_count();
        if current > 1 {
            self.channel_count_text = (current - 1).to_string();
        }
    }
}

/// Write one parameter on every active channel
///
/// Returns the number of channels written.
fn route_to_active_channels(ctx: &mut EditorContext<'_>, param: ParamIndex, value: f32) -> usize {
    let channels = ctx.channels.active_channels();
    for &channel in &channels {
        ctx.processor.set_current_channel(channel);
        ctx.processor.set_parameter(param, value);
    }
    log::debug!(
        "{} = {} on {} channel(s)",
        param.name(),
        value,
        channels.len()
    );
    channels.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Channel(usize),
        Param(ParamIndex, f32),
        OutputCount(i32),
    }

    #[derive(Default)]
    struct RecordingProcessor {
        calls: Vec<Call>,
        outputs: usize,
    }

    impl RecordingProcessor {
        fn param_writes(&self) -> Vec<(ParamIndex, f32)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Param(p, v) => Some((*p, *v)),
                    _ => None,
                })
                .collect()
        }
    }

    impl ParameterSink for RecordingProcessor {
        fn set_current_channel(&mut self, channel: usize) {
            self.calls.push(Call::Channel(channel));
        }

        fn set_parameter(&mut self, param: ParamIndex, value: f32) {
            self.calls.push(Call::Param(param, value));
        }

        fn set_output_channel_count(&mut self, count: i32) {
            self.outputs = count.max(0) as usize;
            self.calls.push(Call::OutputCount(count));
        }

        fn output_channel_count(&self) -> usize {
            self.outputs
        }
    }

    #[derive(Default)]
    struct RecordingViewport {
        refreshed: Vec<EditorId>,
    }

    impl EditorViewport for RecordingViewport {
        fn make_editor_visible(&mut self, editor: EditorId) {
            self.refreshed.push(editor);
        }
    }

    fn run(
        editor: &mut EditorState,
        message: EditorMessage,
        channels: Vec<usize>,
    ) -> (RecordingProcessor, RecordingViewport) {
        let mut processor = RecordingProcessor::default();
        let mut viewport = RecordingViewport::default();
        {
            let mut ctx = EditorContext {
                processor: &mut processor,
                channels: &channels,
                viewport: &mut viewport,
            };
            editor.update(message, &mut ctx);
        }
        (processor, viewport)
    }

    #[test]
    fn test_knobs_write_once_per_active_channel() {
        let cases: [(ParamIndex, fn(f32) -> EditorMessage); 3] = [
            (ParamIndex::Amplitude, EditorMessage::AmplitudeChanged),
            (ParamIndex::Frequency, EditorMessage::FrequencyChanged),
            (ParamIndex::Phase, EditorMessage::PhaseChanged),
        ];

        for (param, make) in cases {
            let range = param.range();
            let steps = ((range.max - range.min) / range.step) as usize;
            for step in (0..=steps).step_by(7) {
                let value = range.min + step as f32 * range.step;
                for n in 0..4usize {
                    let mut editor = EditorState::default();
                    let channels: Vec<usize> = (0..n).map(|i| i * 2).collect();
                    let (processor, _) = run(&mut editor, make(value), channels.clone());

                    let expected: Vec<Call> = channels
                        .iter()
                        .flat_map(|&ch| [Call::Channel(ch), Call::Param(param, value)])
                        .collect();
                    assert_eq!(processor.calls, expected, "{} = {} on {} channels", param.name(), value, n);
                }
            }
        }
    }

    #[test]
    fn test_knob_value_is_snapped_before_routing() {
        let mut editor = EditorState::default();
        let (processor, _) = run(&mut editor, EditorMessage::AmplitudeChanged(237.0), vec![0]);
        assert_eq!(processor.param_writes(), vec![(ParamIndex::Amplitude, 240.0)]);
        assert_eq!(editor.amplitude.value(), 240.0);
    }

    #[test]
    fn test_no_active_channels_still_moves_knob() {
        let mut editor = EditorState::default();
        let (processor, viewport) = run(&mut editor, EditorMessage::PhaseChanged(90.0), vec![]);
        assert!(processor.calls.is_empty());
        assert!(viewport.refreshed.is_empty());
        assert_eq!(editor.phase.value(), 90.0);
    }

    #[test]
    fn test_waveform_selection_routes_type_number() {
        for (i, waveform) in Waveform::ALL.into_iter().enumerate() {
            let mut editor = EditorState::default();
            let (processor, _) = run(&mut editor, EditorMessage::WaveformSelected(waveform), vec![1, 3]);

            assert_eq!(
                processor.calls,
                vec![
                    Call::Channel(1),
                    Call::Param(ParamIndex::WaveformType, i as f32),
                    Call::Channel(3),
                    Call::Param(ParamIndex::WaveformType, i as f32),
                ]
            );
            let states = editor.waveform.toggle_states();
            for (j, on) in states.iter().enumerate() {
                assert_eq!(*on, i == j);
            }
        }
    }

    #[test]
    fn test_decrement_never_below_one() {
        for start in 1..=20 {
            let mut editor = EditorState::new(&GeneratorDefaults::default(), start);
            for _ in 0..(start + 5) {
                let (processor, _) = run(&mut editor, EditorMessage::DecrementChannels, vec![0]);
                assert!(processor.calls.is_empty());
                assert!(editor.channel_count() >= 1);
            }
            assert_eq!(editor.channel_count_text(), "1");
        }
    }

    #[test]
    fn test_increment_is_unbounded() {
        let mut editor = EditorState::default();
        for expected in 2..=50 {
            let (processor, _) = run(&mut editor, EditorMessage::IncrementChannels, vec![0]);
            assert!(processor.calls.is_empty());
            assert_eq!(editor.channel_count(), expected);
        }

        editor.update_text_for_test("2147483646");
        run(&mut editor, EditorMessage::IncrementChannels, vec![]);
        assert_eq!(editor.channel_count(), i32::MAX);
        run(&mut editor, EditorMessage::IncrementChannels, vec![]);
        assert_eq!(editor.channel_count(), i32::MAX);
    }

    #[test]
    fn test_commit_five_sets_count_and_refreshes_once() {
        let mut editor = EditorState::default();
        run(&mut editor, EditorMessage::ChannelCountEdited("5".to_string()), vec![0]);
        let (processor, viewport) = run(&mut editor, EditorMessage::ChannelCountCommitted, vec![0]);

        assert_eq!(processor.calls, vec![Call::OutputCount(5)]);
        assert_eq!(processor.output_channel_count(), 5);
        assert_eq!(viewport.refreshed, vec![editor.id()]);
    }

    #[test]
    fn test_commit_non_numeric_writes_zero() {
        let mut editor = EditorState::default();
        run(&mut editor, EditorMessage::ChannelCountEdited("abc".to_string()), vec![0]);
        let (processor, viewport) = run(&mut editor, EditorMessage::ChannelCountCommitted, vec![0]);

        assert_eq!(processor.calls, vec![Call::OutputCount(0)]);
        assert_eq!(viewport.refreshed.len(), 1);
    }

    #[test]
    fn test_edit_alone_does_not_reach_processor() {
        let mut editor = EditorState::default();
        let (processor, viewport) =
            run(&mut editor, EditorMessage::ChannelCountEdited("8".to_string()), vec![0]);
        assert!(processor.calls.is_empty());
        assert!(viewport.refreshed.is_empty());
        assert_eq!(editor.channel_count(), 8);
    }

    #[test]
    fn test_decrement_on_non_numeric_leaves_text() {
        let mut editor = EditorState::default();
        editor.update_text_for_test("abc");
        run(&mut editor, EditorMessage::DecrementChannels, vec![]);
        assert_eq!(editor.channel_count_text(), "abc");
        run(&mut editor, EditorMessage::IncrementChannels, vec![]);
        assert_eq!(editor.channel_count_text(), "1");
    }

    #[test]
    fn test_parse_int_lenient() {
        assert_eq!(parse_int_lenient("5"), 5);
        assert_eq!(parse_int_lenient("  12abc"), 12);
        assert_eq!(parse_int_lenient("-3"), -3);
        assert_eq!(parse_int_lenient("+7"), 7);
        assert_eq!(parse_int_lenient("abc"), 0);
        assert_eq!(parse_int_lenient(""), 0);
        assert_eq!(parse_int_lenient("-"), 0);
        assert_eq!(parse_int_lenient("99999999999"), i32::MAX);
        assert_eq!(parse_int_lenient("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_editor_ids_are_unique() {
        let a = EditorState::default();
        let b = EditorState::default();
        assert_ne!(a.id(), b.id());
    }

    impl EditorState {
        fn update_text_for_test(&mut self, text: &str) {
            self.channel_count_text = text.to_string();
        }
    }
}

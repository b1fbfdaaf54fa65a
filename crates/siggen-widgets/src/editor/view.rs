//! View function for the editor panel

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Background, Border, Element, Length};

use super::message::EditorMessage;
use super::{EditorState, EDITOR_DESIRED_WIDTH};
use crate::button_styles::arrow_button_style;
use crate::theme::{PANEL_BG, PANEL_BORDER, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::waveform_selector::waveform_selector_view;

/// Render the editor panel
///
/// Layout:
/// ```text
/// ┌─ Signal Generator ───────────────────────┐
/// │ [∿][⊓][/|][/\][≈]                  [▲]   │
/// │                                    [ 1 ] │
/// │  (Amp)    (Freq)    (Phase)        [▼]   │
/// └──────────────────────────────────────────┘
/// ```
pub fn editor_view(state: &EditorState) -> Element<'_, EditorMessage> {
    let title = text("Signal Generator").size(11).color(TEXT_SECONDARY);

    let waveforms = waveform_selector_view(&state.waveform, EditorMessage::WaveformSelected);

    let knobs = row![
        state.amplitude.view(EditorMessage::AmplitudeChanged),
        state.frequency.view(EditorMessage::FrequencyChanged),
        state.phase.view(EditorMessage::PhaseChanged),
    ]
    .spacing(12)
    .align_y(Alignment::Start);

    let controls = column![waveforms, knobs].spacing(10);

    let content = row![controls, channel_count_column(state)]
        .spacing(12)
        .align_y(Alignment::Start);

    container(column![title, content].spacing(6))
        .padding(8)
        .width(Length::Fixed(EDITOR_DESIRED_WIDTH))
        .style(panel_style)
        .into()
}

/// Up arrow, editable channel-count label, down arrow
fn channel_count_column(state: &EditorState) -> Element<'_, EditorMessage> {
    let up = button(text("▲").size(9))
        .on_press(EditorMessage::IncrementChannels)
        .padding([1, 5])
        .style(|_theme, status| arrow_button_style(status));

    let label = text_input("", state.channel_count_text())
        .on_input(EditorMessage::ChannelCountEdited)
        .on_submit(EditorMessage::ChannelCountCommitted)
        .size(11)
        .padding(2)
        .width(Length::Fixed(28.0));

    let down = button(text("▼").size(9))
        .on_press(EditorMessage::DecrementChannels)
        .padding([1, 5])
        .style(|_theme, status| arrow_button_style(status));

    column![
        up,
        label,
        down,
        text("Outputs").size(9).color(TEXT_PRIMARY),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .into()
}

fn panel_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL_BG)),
        border: Border {
            color: PANEL_BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

//! View function for the waveform selector

use iced::widget::image::FilterMethod;
use iced::widget::{button, image, row};
use iced::{ContentFit, Element, Length};

use siggen_core::Waveform;

use super::icons::icon_handle;
use super::{WaveformSelectorState, BUTTON_HEIGHT, BUTTON_SPACING, BUTTON_WIDTH, ICON_INSET};
use crate::button_styles::waveform_selector_style;

/// Render the row of five waveform buttons
///
/// Each button draws its icon scaled into the button minus the inset, with
/// linear filtering. Pressing a button emits `on_select(waveform)`, including
/// the already-selected one.
pub fn waveform_selector_view<'a, Message: Clone + 'a>(
    state: &WaveformSelectorState,
    on_select: impl Fn(Waveform) -> Message + 'a,
) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = Waveform::ALL
        .iter()
        .map(|&waveform| waveform_button(waveform, state.is_selected(waveform), on_select(waveform)))
        .collect();

    row(buttons).spacing(BUTTON_SPACING).into()
}

fn waveform_button<'a, Message: Clone + 'a>(
    waveform: Waveform,
    selected: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let icon = image(icon_handle(waveform))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Fill)
        .filter_method(FilterMethod::Linear);

    button(icon)
        .on_press(on_press)
        .padding(ICON_INSET)
        .width(Length::Fixed(BUTTON_WIDTH))
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(move |_theme, status| waveform_selector_style(status, selected))
        .into()
}

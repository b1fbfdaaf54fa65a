//! View function for the channel selector

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{ChannelSelectorMessage, ChannelSelectorState};
use crate::button_styles::{arrow_button_style, channel_toggle_style};

/// Render one toggle per channel followed by all/none buttons
pub fn channel_selector_view(state: &ChannelSelectorState) -> Element<'_, ChannelSelectorMessage> {
    let mut items: Vec<Element<'_, ChannelSelectorMessage>> = (0..state.channel_count())
        .map(|ch| {
            let active = state.is_selected(ch);
            button(text(format!("{}", ch + 1)).size(10))
                .on_press(ChannelSelectorMessage::Toggle(ch))
                .padding([2, 6])
                .style(move |_theme, status| channel_toggle_style(status, active))
                .into()
        })
        .collect();

    items.push(Space::new().width(Length::Fill).into());
    items.push(
        button(text("All").size(10))
            .on_press(ChannelSelectorMessage::SelectAll)
            .padding([2, 6])
            .style(|_theme, status| arrow_button_style(status))
            .into(),
    );
    items.push(
        button(text("None").size(10))
            .on_press(ChannelSelectorMessage::SelectNone)
            .padding([2, 6])
            .style(|_theme, status| arrow_button_style(status))
            .into(),
    );

    row(items).spacing(3).align_y(Alignment::Center).into()
}

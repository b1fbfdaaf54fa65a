//! Button styling for the editor panel
//!
//! - Waveform selector: flat fill, orange when selected, grey otherwise, black outline
//! - Arrow buttons (channel count): raised, pressed-in while held
//! - Channel toggles: pressed-in look with accent color while selected

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

use crate::theme::{BUTTON_OUTLINE, CHANNEL_ACTIVE, SELECTED_FILL, UNSELECTED_FILL};

/// Default button background color
pub const DEFAULT_BG: Color = Color::from_rgb(0.25, 0.25, 0.25);

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Darken a color by a factor (0.0-1.0)
fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

fn raised_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(base_color)),
        text_color: Color::WHITE,
        border: Border {
            color: lighten(base_color, 0.1),
            width: 1.0,
            radius: 3.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(1.0, 1.0),
            blur_radius: 2.0,
        },
        snap: false,
    }
}

fn pressed_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(darken(base_color, 0.15))),
        text_color: Color::WHITE,
        border: Border {
            color: darken(base_color, 0.2),
            width: 1.0,
            radius: 3.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Flat fill with a 1px black outline, as drawn by the waveform buttons
fn outlined_fill(fill: Color) -> Style {
    Style {
        background: Some(Background::Color(fill)),
        text_color: Color::BLACK,
        border: Border {
            color: BUTTON_OUTLINE,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Fill color of a waveform button
pub fn waveform_fill(selected: bool) -> Color {
    if selected {
        SELECTED_FILL
    } else {
        UNSELECTED_FILL
    }
}

/// Style function for waveform selector buttons
///
/// Use with `.style(move |_theme, status| waveform_selector_style(status, is_selected))`
pub fn waveform_selector_style(status: Status, selected: bool) -> Style {
    let fill = waveform_fill(selected);
    match status {
        Status::Active | Status::Disabled => outlined_fill(fill),
        Status::Hovered => outlined_fill(lighten(fill, 0.08)),
        Status::Pressed => outlined_fill(darken(fill, 0.1)),
    }
}

/// Style function for the channel-count arrow buttons (momentary)
pub fn arrow_button_style(status: Status) -> Style {
    match status {
        Status::Active | Status::Disabled => raised_style(DEFAULT_BG),
        Status::Hovered => raised_style(lighten(DEFAULT_BG, 0.08)),
        Status::Pressed => pressed_style(DEFAULT_BG),
    }
}

/// Style function for channel selector toggles
pub fn channel_toggle_style(status: Status, active: bool) -> Style {
    let base = if active { CHANNEL_ACTIVE } else { DEFAULT_BG };
    match (active, status) {
        (true, Status::Hovered) => pressed_style(lighten(base, 0.08)),
        (true, _) => pressed_style(base),
        (false, Status::Hovered) => raised_style(lighten(base, 0.08)),
        (false, Status::Pressed) => pressed_style(base),
        (false, _) => raised_style(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_waveform_is_orange() {
        let style = waveform_selector_style(Status::Active, true);
        assert_eq!(style.background, Some(Background::Color(SELECTED_FILL)));
        assert_eq!(style.border.color, BUTTON_OUTLINE);
    }

    #[test]
    fn test_unselected_waveform_is_grey() {
        let style = waveform_selector_style(Status::Active, false);
        assert_eq!(style.background, Some(Background::Color(UNSELECTED_FILL)));
    }

    #[test]
    fn test_lighten_saturates() {
        let c = lighten(Color::from_rgb(0.95, 0.5, 0.0), 0.1);
        assert_eq!(c.r, 1.0);
    }
}

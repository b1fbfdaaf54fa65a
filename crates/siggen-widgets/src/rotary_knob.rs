//! Rotary slider control bound to a parameter range
//!
//! A widget-based knob: a circular container showing the value position, an
//! interaction slider over the real range, and a text box below with the
//! current value.

use iced::widget::{column, container, slider, text};
use iced::{Background, Border, Color, Element, Length};

use siggen_core::{ParamIndex, ParamRange};

use crate::theme::{TEXT_PRIMARY, TEXT_SECONDARY};

/// Default knob diameter in pixels
pub const DEFAULT_KNOB_SIZE: f32 = 40.0;

/// A rotary slider for one generator parameter
#[derive(Debug, Clone, PartialEq)]
pub struct RotarySlider {
    /// Parameter this control drives
    param: ParamIndex,
    /// Value range and step
    range: ParamRange,
    /// Current value (always on a step inside the range)
    value: f32,
    /// Size in pixels
    size: f32,
}

impl RotarySlider {
    /// Create a slider for `param` at `initial` (snapped into range)
    pub fn new(param: ParamIndex, initial: f32) -> Self {
        let range = param.range();
        Self {
            param,
            range,
            value: range.snap(initial),
            size: DEFAULT_KNOB_SIZE,
        }
    }

    /// The configured range
    pub fn range(&self) -> ParamRange {
        self.range
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, snapped to the range and step; returns the stored value
    pub fn set_value(&mut self, value: f32) -> f32 {
        self.value = self.range.snap(value);
        self.value
    }

    /// Create the view Element for this control
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        on_change: impl Fn(f32) -> Message + 'a,
    ) -> Element<'a, Message> {
        rotary_knob(self.range, self.value, self.size, self.param.name(), on_change)
    }
}

/// Style function for the knob container
fn knob_container_style(position: f32) -> container::Style {
    // Color based on position: blue (low) to orange (high)
    let accent_color = Color::from_rgb(0.3 + 0.4 * position, 0.5, 0.7 - 0.4 * position);

    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.12, 0.12, 0.12))),
        border: Border {
            color: accent_color,
            width: 2.0,
            radius: (DEFAULT_KNOB_SIZE / 2.0).into(),
        },
        ..Default::default()
    }
}

/// Format a value for the text box below the knob
fn format_value(value: f32, range: &ParamRange) -> String {
    if range.unit.is_empty() {
        format!("{:.0}", value)
    } else {
        format!("{:.0}{}", value, range.unit)
    }
}

/// Create a rotary knob element over a real-valued range
///
/// `on_change` receives the new value in range units (already stepped by the
/// slider).
pub fn rotary_knob<'a, Message: Clone + 'a>(
    range: ParamRange,
    value: f32,
    size: f32,
    label: &'a str,
    on_change: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message> {
    let position = range.normalize(value);

    let knob_visual = container(
        text(format!("{:.0}%", position * 100.0))
            .size((size * 0.28).max(9.0))
            .color(TEXT_SECONDARY),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fixed(size))
    .center_y(Length::Fixed(size))
    .style(move |_theme| knob_container_style(position));

    let mut knob_slider = slider(range.min..=range.max, value, on_change).width(Length::Fixed(size));
    if range.step > 0.0 {
        knob_slider = knob_slider.step(range.step);
    }

    column![
        knob_visual,
        knob_slider,
        text(format_value(value, &range)).size(11).color(TEXT_PRIMARY),
        text(label).size(9).color(TEXT_SECONDARY),
    ]
    .spacing(2)
    .align_x(iced::Center)
    .into()
}

//! Shared theme constants for the editor panel

use iced::Color;

/// Panel background
pub const PANEL_BG: Color = Color::from_rgb(0.15, 0.15, 0.17);

/// Panel border
pub const PANEL_BORDER: Color = Color::from_rgb(0.35, 0.35, 0.40);

/// Selected waveform button fill
pub const SELECTED_FILL: Color = Color::from_rgb(1.0, 0.65, 0.0); // Orange

/// Unselected waveform button fill
pub const UNSELECTED_FILL: Color = Color::from_rgb(0.5, 0.5, 0.5); // Grey

/// Waveform button outline
pub const BUTTON_OUTLINE: Color = Color::BLACK;

/// Icon trace color
pub const ICON_TRACE: Color = Color::from_rgb(0.05, 0.05, 0.05);

/// Primary text
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.9, 0.9, 0.9);

/// Secondary text (labels under controls)
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.65);

/// Selected channel button
pub const CHANNEL_ACTIVE: Color = Color::from_rgb(0.3, 0.6, 0.9);

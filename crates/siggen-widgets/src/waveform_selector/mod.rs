//! Waveform selector radio group
//!
//! Five toggle buttons, one per waveform kind, each showing a preloaded icon.
//! Exactly one is selected at a time: the group stores a single selected
//! value, so selecting one button deselects every sibling.
//!
//! ```text
//! ┌────┬────┬────┬────┬────┐
//! │ ∿  │ ⊓⊔ │ /| │ /\ │ ≈≈ │   selected = orange fill, others grey
//! └────┴────┴────┴────┴────┘
//! ```

pub mod icons;
mod view;

pub use view::waveform_selector_view;

use siggen_core::Waveform;

/// Button width in pixels
pub const BUTTON_WIDTH: f32 = 30.0;

/// Button height in pixels
pub const BUTTON_HEIGHT: f32 = 20.0;

/// Gap between buttons in pixels
pub const BUTTON_SPACING: f32 = 3.0;

/// Inset between button edge and icon in pixels
pub const ICON_INSET: f32 = 2.0;

/// Radio group state for the five waveform buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveformSelectorState {
    selected: Waveform,
}

impl WaveformSelectorState {
    /// Create a group with `initial` selected
    pub fn new(initial: Waveform) -> Self {
        Self { selected: initial }
    }

    /// The selected waveform
    pub fn selected(&self) -> Waveform {
        self.selected
    }

    /// Whether a given button is toggled on
    pub fn is_selected(&self, waveform: Waveform) -> bool {
        self.selected == waveform
    }

    /// Select a waveform, deselecting the others
    ///
    /// Returns true if the selection changed.
    pub fn select(&mut self, waveform: Waveform) -> bool {
        let changed = self.selected != waveform;
        self.selected = waveform;
        changed
    }

    /// Toggle state of every button in button order
    pub fn toggle_states(&self) -> [bool; 5] {
        Waveform::ALL.map(|w| self.is_selected(w))
    }
}

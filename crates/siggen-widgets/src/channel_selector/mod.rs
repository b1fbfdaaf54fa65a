//! Channel selector
//!
//! The shared channel-selection strip: one toggle per output channel plus
//! all/none shortcuts. It answers the editor's active-channel query.

mod view;

pub use view::channel_selector_view;

use siggen_core::MAX_OUTPUT_CHANNELS;

use crate::traits::ActiveChannels;

/// Messages emitted by the channel selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSelectorMessage {
    /// Flip one channel's selection
    Toggle(usize),
    /// Select every channel
    SelectAll,
    /// Deselect every channel
    SelectNone,
}

/// Selection flags, one per channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSelectorState {
    selected: Vec<bool>,
}

impl ChannelSelectorState {
    /// Create a selector for `channels` channels, all selected
    ///
    /// Like the generator, the selector holds at most
    /// [`MAX_OUTPUT_CHANNELS`] channels.
    pub fn new(channels: usize) -> Self {
        Self {
            selected: vec![true; channels.min(MAX_OUTPUT_CHANNELS)],
        }
    }

    /// Number of channels shown
    pub fn channel_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether a channel is selected
    pub fn is_selected(&self, channel: usize) -> bool {
        self.selected.get(channel).copied().unwrap_or(false)
    }

    /// Resize to `channels`; new channels start selected
    pub fn set_channel_count(&mut self, channels: usize) {
        if channels > MAX_OUTPUT_CHANNELS {
            log::warn!(
                "channel selector: {} channels exceeds {}, clamping",
                channels,
                MAX_OUTPUT_CHANNELS
            );
        }
        let channels = channels.min(MAX_OUTPUT_CHANNELS);
        if channels != self.selected.len() {
            log::debug!(
                "channel selector: {} -> {} channels",
                self.selected.len(),
                channels
            );
        }
        self.selected.resize(channels, true);
    }

    /// Handle a message and update state
    pub fn handle_message(&mut self, message: ChannelSelectorMessage) {
        match message {
            ChannelSelectorMessage::Toggle(channel) => {
                if let Some(flag) = self.selected.get_mut(channel) {
                    *flag = !*flag;
                }
            }
            ChannelSelectorMessage::SelectAll => self.selected.fill(true),
            ChannelSelectorMessage::SelectNone => self.selected.fill(false),
        }
    }
}

impl ActiveChannels for ChannelSelectorState {
    fn active_channels(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(ch, &on)| on.then_some(ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selects_everything() {
        let selector = ChannelSelectorState::new(3);
        assert_eq!(selector.active_channels(), vec![0, 1, 2]);
    }

    #[test]
    fn test_toggle_keeps_order() {
        let mut selector = ChannelSelectorState::new(4);
        selector.handle_message(ChannelSelectorMessage::Toggle(1));
        assert_eq!(selector.active_channels(), vec![0, 2, 3]);
        selector.handle_message(ChannelSelectorMessage::Toggle(1));
        assert_eq!(selector.active_channels(), vec![0, 1, 2, 3]);
        // Out of range toggles are ignored
        selector.handle_message(ChannelSelectorMessage::Toggle(9));
        assert_eq!(selector.channel_count(), 4);
    }

    #[test]
    fn test_all_and_none() {
        let mut selector = ChannelSelectorState::new(2);
        selector.handle_message(ChannelSelectorMessage::SelectNone);
        assert!(selector.active_channels().is_empty());
        selector.handle_message(ChannelSelectorMessage::SelectAll);
        assert_eq!(selector.active_channels(), vec![0, 1]);
    }

    #[test]
    fn test_resize() {
        let mut selector = ChannelSelectorState::new(2);
        selector.handle_message(ChannelSelectorMessage::Toggle(0));
        selector.set_channel_count(4);
        assert_eq!(selector.active_channels(), vec![1, 2, 3]);
        selector.set_channel_count(1);
        assert!(selector.active_channels().is_empty());
        assert!(!selector.is_selected(0));
    }

    #[test]
    fn test_resize_clamped_to_generator_limit() {
        let mut selector = ChannelSelectorState::new(usize::MAX);
        assert_eq!(selector.channel_count(), MAX_OUTPUT_CHANNELS);

        selector.set_channel_count(0);
        assert!(selector.active_channels().is_empty());
        selector.set_channel_count(i32::MAX as usize);
        assert_eq!(selector.channel_count(), MAX_OUTPUT_CHANNELS);
        assert_eq!(selector.active_channels().len(), MAX_OUTPUT_CHANNELS);
    }
}

//! Collaborators the editor panel talks to
//!
//! The editor owns its controls but not the channel selection or the
//! container it is laid out in. Both are reached through these traits so the
//! host decides what backs them.

use crate::editor::EditorId;

/// Source of the channels currently selected for editing
pub trait ActiveChannels {
    /// Selected channel indices, in ascending order
    fn active_channels(&self) -> Vec<usize>;
}

impl<const N: usize> ActiveChannels for [usize; N] {
    fn active_channels(&self) -> Vec<usize> {
        self.to_vec()
    }
}

impl ActiveChannels for Vec<usize> {
    fn active_channels(&self) -> Vec<usize> {
        self.clone()
    }
}

/// The container that lays out processor editors
pub trait EditorViewport {
    /// Request a re-layout/refresh of the given editor
    fn make_editor_visible(&mut self, editor: EditorId);
}

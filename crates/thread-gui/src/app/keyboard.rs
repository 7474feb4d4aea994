//! Keyboard shortcuts.
//!
//! - Escape: discard every open edit and reply draft
//!
//! Enter is handled by each input's `on_submit`.

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use super::App;
use crate::message::Message;

impl App {
    /// Handle a key press that no widget captured.
    pub(super) fn handle_key_press(
        &mut self,
        key: &keyboard::Key,
        _modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if let keyboard::Key::Named(Named::Escape) = key.as_ref() {
            let discarded = self.state.session.cancel_all();
            if discarded > 0 {
                tracing::debug!(discarded, "drafts discarded from keyboard");
            }
        }
        Task::none()
    }
}

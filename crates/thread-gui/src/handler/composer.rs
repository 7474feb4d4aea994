//! Top-level composer handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{ComposerMessage, Message};
use crate::state::AppState;

/// Handles the "new comment" input.
pub struct ComposerHandler;

impl MessageHandler<ComposerMessage> for ComposerHandler {
    fn handle(&self, state: &mut AppState, msg: ComposerMessage) -> Task<Message> {
        match msg {
            ComposerMessage::Changed(text) => {
                state.session.set_composer(text);
            }
            ComposerMessage::Submit => {
                let result = state.session.submit_composer();
                if let Some(id) = state.report("Comment", result) {
                    tracing::debug!(%id, "comment posted");
                }
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thread_core::{CommentId, ThreadError};

    use crate::error::GuiError;

    #[test]
    fn submit_adds_comment_and_clears_input() {
        let mut state = AppState::default();
        let _ = ComposerHandler.handle(&mut state, ComposerMessage::Changed("hello".into()));
        let _ = ComposerHandler.handle(&mut state, ComposerMessage::Submit);

        let forest = state.session.forest();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.find(CommentId::new(1)).unwrap().text, "hello");
        assert_eq!(state.session.composer(), "");
        assert!(state.error.is_none());
    }

    #[test]
    fn blank_submit_shows_error_and_keeps_input() {
        let mut state = AppState::default();
        let _ = ComposerHandler.handle(&mut state, ComposerMessage::Changed("  ".into()));
        let _ = ComposerHandler.handle(&mut state, ComposerMessage::Submit);

        assert!(state.session.forest().is_empty());
        assert_eq!(state.session.composer(), "  ");
        assert_eq!(
            state.error,
            Some(GuiError::thread("Comment", ThreadError::EmptyText))
        );
    }
}

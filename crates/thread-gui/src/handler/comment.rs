//! Per-comment handler: edit, reply and delete.

use iced::Task;
use thread_core::CommentId;

use super::MessageHandler;
use crate::message::{CommentMessage, Message};
use crate::state::AppState;

/// Handles actions on a single comment card.
pub struct CommentHandler;

impl MessageHandler<(CommentId, CommentMessage)> for CommentHandler {
    fn handle(
        &self,
        state: &mut AppState,
        (id, msg): (CommentId, CommentMessage),
    ) -> Task<Message> {
        let session = &mut state.session;
        match msg {
            // =================================================================
            // Editing
            // =================================================================
            CommentMessage::BeginEdit => {
                let result = session.begin_edit(id);
                state.report("Edit", result);
            }
            CommentMessage::EditChanged(text) => {
                let result = session.update_edit_draft(id, text);
                state.report("Edit", result);
            }
            CommentMessage::SaveEdit => {
                let result = session.save_edit(id);
                state.report("Save edit", result);
            }
            CommentMessage::CancelEdit => {
                session.cancel_edit(id);
            }

            // =================================================================
            // Replying
            // =================================================================
            CommentMessage::BeginReply => {
                let result = session.begin_reply(id);
                state.report("Reply", result);
            }
            CommentMessage::ReplyChanged(text) => {
                let result = session.update_reply_draft(id, text);
                state.report("Reply", result);
            }
            CommentMessage::SaveReply => {
                let result = session.save_reply(id);
                state.report("Save reply", result);
            }
            CommentMessage::CancelReply => {
                session.cancel_reply(id);
            }

            CommentMessage::Delete => {
                let result = session.delete(id);
                state.report("Delete", result);
            }
        }
        Task::none()
    }
}

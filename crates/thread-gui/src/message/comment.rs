//! Per-comment messages.
//!
//! Always paired with the target id in `Message::Comment`.

/// Actions available on a single comment card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentMessage {
    // === Editing ===
    BeginEdit,
    EditChanged(String),
    SaveEdit,
    CancelEdit,

    // === Replying ===
    BeginReply,
    ReplyChanged(String),
    SaveReply,
    CancelReply,

    Delete,
}

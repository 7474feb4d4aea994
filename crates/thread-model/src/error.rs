use thiserror::Error;

use crate::CommentId;

/// Reasons a thread operation was not applied.
///
/// The silent operations collapse these into a no-op; the strict ones
/// surface them so callers can tell a missing target from blank input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThreadError {
    #[error("comment text is empty")]
    EmptyText,
    #[error("no comment with id {id}")]
    NotFound { id: CommentId },
    #[error("comment id {id} appears more than once")]
    DuplicateId { id: CommentId },
    #[error("no open draft for comment {id}")]
    NoDraft { id: CommentId },
    /// Every id up to `u64::MAX` is taken.
    #[error("no comment ids left")]
    IdsExhausted,
}

impl ThreadError {
    /// Whether the operation was rejected because of its input text.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::EmptyText)
    }

    /// Whether the operation targeted an id that is not in the forest.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ThreadError>;

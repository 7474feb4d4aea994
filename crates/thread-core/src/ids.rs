//! Comment id generation.

use thread_model::{CommentId, Forest, Result, ThreadError};

/// Monotonic id source.
///
/// Ids handed out by one generator never repeat, and [`next_for`] never
/// returns an id already present in the forest it is given, even if the
/// forest was built elsewhere. Once `u64::MAX` has been handed out (or is
/// already taken) the generator reports [`ThreadError::IdsExhausted`].
///
/// [`next_for`]: IdGenerator::next_for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    /// `None` once every id has been used.
    next: Option<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Generator starting at id 1.
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Generator starting just after the largest id in `forest`.
    pub fn seeded_from(forest: &Forest) -> Self {
        Self {
            next: floor(forest).unwrap_or(Some(1)),
        }
    }

    /// The id the next call would return for a forest whose ids are all lower.
    pub fn peek(&self) -> Option<CommentId> {
        self.next.map(CommentId::new)
    }

    /// Produce an id unique against every id currently in `forest`.
    pub fn next_for(&mut self, forest: &Forest) -> Result<CommentId> {
        let floor = floor(forest).unwrap_or(Some(0));
        let (Some(next), Some(floor)) = (self.next, floor) else {
            return Err(ThreadError::IdsExhausted);
        };
        let id = next.max(floor);
        self.next = id.checked_add(1);
        Ok(CommentId::new(id))
    }
}

/// One past the largest id in `forest`: `None` for an empty forest,
/// `Some(None)` when the largest id is `u64::MAX`.
fn floor(forest: &Forest) -> Option<Option<u64>> {
    forest.max_id().map(|id| id.get().checked_add(1))
}

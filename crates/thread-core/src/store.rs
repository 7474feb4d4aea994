//! Reducer store that owns the forest.
//!
//! All mutations go through [`ThreadStore`]. Each one computes a complete new
//! forest and swaps it in with a single assignment, so no partially applied
//! state is ever observable.

use serde::{Deserialize, Serialize};
use thread_model::{CommentId, Forest, Result, ThreadError};

use crate::{IdGenerator, ops};

/// A requested change to the thread.
///
/// Serialized with an `op` tag, e.g. `{"op": "reply", "parent": 1, "text": "hi"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    Add { text: String },
    Edit { id: CommentId, text: String },
    Delete { id: CommentId },
    Reply { parent: CommentId, text: String },
}

impl Action {
    pub fn add(text: impl Into<String>) -> Self {
        Self::Add { text: text.into() }
    }

    pub fn edit(id: CommentId, text: impl Into<String>) -> Self {
        Self::Edit {
            id,
            text: text.into(),
        }
    }

    pub fn delete(id: CommentId) -> Self {
        Self::Delete { id }
    }

    pub fn reply(parent: CommentId, text: impl Into<String>) -> Self {
        Self::Reply {
            parent,
            text: text.into(),
        }
    }

    /// Short lowercase name of the operation.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
            Self::Reply { .. } => "reply",
        }
    }

    /// The existing comment the action targets, if any.
    pub fn target(&self) -> Option<CommentId> {
        match self {
            Self::Add { .. } => None,
            Self::Edit { id, .. } | Self::Delete { id } => Some(*id),
            Self::Reply { parent, .. } => Some(*parent),
        }
    }
}

/// Result of dispatching an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The forest was replaced. `created` is the new comment's id for Add and Reply.
    Applied { created: Option<CommentId> },
    /// Nothing changed.
    Rejected(ThreadError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn created(&self) -> Option<CommentId> {
        match self {
            Self::Applied { created } => *created,
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&ThreadError> {
        match self {
            Self::Applied { .. } => None,
            Self::Rejected(err) => Some(err),
        }
    }
}

impl From<Result<Option<CommentId>>> for Outcome {
    fn from(result: Result<Option<CommentId>>) -> Self {
        match result {
            Ok(created) => Self::Applied { created },
            Err(err) => Self::Rejected(err),
        }
    }
}

/// Owner of the forest and its id generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadStore {
    forest: Forest,
    ids: IdGenerator,
    revision: u64,
}

impl ThreadStore {
    /// Empty store; the first comment gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing forest.
    ///
    /// Fails if the forest violates the global id uniqueness invariant.
    pub fn from_forest(forest: Forest) -> Result<Self> {
        forest.validate()?;
        Ok(Self {
            ids: IdGenerator::seeded_from(&forest),
            forest,
            revision: 0,
        })
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Number of actions applied so far. Rejected actions do not count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Consume the store, returning the forest.
    pub fn into_forest(self) -> Forest {
        self.forest
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let kind = action.kind();
        let target = action.target();
        let outcome = Outcome::from(match action {
            Action::Add { text } => self.add(&text).map(Some),
            Action::Edit { id, text } => self.edit(id, &text).map(|()| None),
            Action::Delete { id } => self.delete(id).map(|()| None),
            Action::Reply { parent, text } => self.reply(parent, &text).map(Some),
        });
        if let Outcome::Rejected(err) = &outcome {
            tracing::debug!(kind, ?target, %err, "action rejected");
        }
        outcome
    }

    /// Append a top-level comment, returning its id.
    pub fn add(&mut self, text: &str) -> Result<CommentId> {
        let (next, id) = ops::try_add(&self.forest, text, &mut self.ids)?;
        self.commit(next);
        tracing::debug!(%id, revision = self.revision, "comment added");
        Ok(id)
    }

    /// Replace a comment's text.
    pub fn edit(&mut self, id: CommentId, text: &str) -> Result<()> {
        let next = ops::try_edit(&self.forest, id, text)?;
        self.commit(next);
        tracing::debug!(%id, revision = self.revision, "comment edited");
        Ok(())
    }

    /// Remove a comment and its subtree.
    pub fn delete(&mut self, id: CommentId) -> Result<()> {
        let before = self.forest.total_count();
        let next = ops::try_delete(&self.forest, id)?;
        let removed = before - next.total_count();
        self.commit(next);
        tracing::debug!(%id, removed, revision = self.revision, "comment deleted");
        Ok(())
    }

    /// Append a reply under `parent`, returning the reply's id.
    pub fn reply(&mut self, parent: CommentId, text: &str) -> Result<CommentId> {
        let (next, id) = ops::try_reply(&self.forest, parent, text, &mut self.ids)?;
        self.commit(next);
        tracing::debug!(%parent, %id, revision = self.revision, "reply added");
        Ok(id)
    }

    fn commit(&mut self, next: Forest) {
        self.forest = next;
        self.revision += 1;
    }
}

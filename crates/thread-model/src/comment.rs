//! Comment nodes and their identifiers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a comment, unique across the whole forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(u64);

impl CommentId {
    /// Create an id from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CommentId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for CommentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// A single comment with its nested replies.
///
/// `replies` is empty for a leaf. Its order is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Create a leaf comment.
    pub fn new(id: CommentId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            replies: Vec::new(),
        }
    }

    /// Create a comment with existing replies.
    pub fn with_replies(id: CommentId, text: impl Into<String>, replies: Vec<Comment>) -> Self {
        Self {
            id,
            text: text.into(),
            replies,
        }
    }

    /// Whether this comment has no replies.
    pub fn is_leaf(&self) -> bool {
        self.replies.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.replies.iter().map(Comment::subtree_len).sum::<usize>()
    }
}

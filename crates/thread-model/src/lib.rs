//! Data model for the recursive comment thread.
//!
//! A thread is a [`Forest`]: an ordered sequence of top-level [`Comment`]
//! nodes, each carrying its own ordered replies.
//!
//! # Invariants
//!
//! - Every [`CommentId`] is unique across the whole forest, not just among
//!   siblings. All lookups and mutations key on this.
//! - Insertion order is display order, at every level.
//! - A node is owned by exactly one parent (or by the forest itself).
//!
//! # Example
//!
//! ```
//! use thread_model::{Comment, CommentId, Forest};
//!
//! let forest = Forest::from(vec![Comment::with_replies(
//!     CommentId::new(1),
//!     "a",
//!     vec![Comment::new(CommentId::new(2), "b")],
//! )]);
//!
//! assert_eq!(forest.total_count(), 2);
//! assert_eq!(forest.depth_of(CommentId::new(2)), Some(1));
//! ```

pub mod comment;
pub mod error;
pub mod forest;

pub use comment::{Comment, CommentId};
pub use error::{Result, ThreadError};
pub use forest::{Forest, PreOrder};

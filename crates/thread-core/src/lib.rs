//! Core logic for the recursive comment thread.
//!
//! - [`ops`]: the four tree mutations (Add, Edit, Delete, Reply), each in a
//!   silent form that ignores invalid input and a strict `try_*` form that
//!   reports why nothing happened
//! - [`ids`]: monotonic id generation
//! - [`store`]: the reducer store that owns the forest and applies [`Action`]s
//! - [`session`]: per-comment edit/reply drafts layered over the store
//! - [`outline`]: flat, indented projection of a forest for rendering

pub mod ids;
pub mod ops;
pub mod outline;
pub mod session;
pub mod store;

pub use ids::IdGenerator;
pub use outline::{OutlineRow, render_text, rows};
pub use session::{Draft, NodeView, ThreadSession};
pub use store::{Action, Outcome, ThreadStore};

pub use thread_model::{Comment, CommentId, Forest, Result, ThreadError};

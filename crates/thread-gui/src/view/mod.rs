//! View functions. Pure: they read [`AppState`](crate::state::AppState) and
//! return elements, never mutate.

mod banner;
mod comment;
mod thread;

pub use thread::{PAGE_TITLE, view_thread};

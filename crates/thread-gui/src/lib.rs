//! Recursive Comment Tree - GUI library.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View). The comment data and its rules live in `thread-core`; this
//! crate only maps user input onto a [`ThreadSession`](thread_core::ThreadSession)
//! and renders it.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message type, keeping
//! `App::update` a thin dispatcher:
//!
//! ```ignore
//! match message {
//!     Message::Composer(msg) => ComposerHandler.handle(&mut self.state, msg),
//!     Message::Comment(id, msg) => CommentHandler.handle(&mut self.state, (id, msg)),
//!     // ...
//! }
//! ```

mod comment;
mod composer;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use comment::CommentHandler;
pub use composer::ComposerHandler;

/// Trait for handling messages in the Iced architecture.
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

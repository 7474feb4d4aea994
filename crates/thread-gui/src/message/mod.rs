//! Message hierarchy for the Elm-style architecture.
//!
//! Every user interaction and system event is a [`Message`]; `App::update`
//! is the only place they are turned into state changes.

pub mod comment;
pub mod composer;

use iced::keyboard;
use thread_core::CommentId;

pub use comment::CommentMessage;
pub use composer::ComposerMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Thread
    // =========================================================================
    /// Top-level composer input
    Composer(ComposerMessage),

    /// Action on one comment
    Comment(CommentId, CommentMessage),

    // =========================================================================
    // Appearance
    // =========================================================================
    /// Switch to the next theme mode and persist it
    CycleTheme,

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// OS light/dark preference changed
    SystemThemeChanged(iced::theme::Mode),

    /// Close the error banner
    DismissError,

    /// Auto-dismiss timer fired for the banner shown as this generation
    BannerExpired(u64),

    /// No operation
    Noop,
}

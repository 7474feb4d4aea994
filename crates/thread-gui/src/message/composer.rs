//! Top-level composer messages.

/// Messages from the "new comment" input at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerMessage {
    /// Input text changed
    Changed(String),
    /// Comment button clicked or Enter pressed
    Submit,
}

//! Reusable widgets.
//!
//! - [`ActionButton`]: icon + label button in primary, secondary, danger or ghost style
//! - [`DraftInput`]: single-line text input that submits on Enter
//! - [`EmptyState`]: centered icon, title and description

mod action_button;
mod draft_input;
mod empty_state;

pub use action_button::{ActionButton, ActionButtonStyle};
pub use draft_input::DraftInput;
pub use empty_state::EmptyState;

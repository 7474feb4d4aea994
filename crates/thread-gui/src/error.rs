//! GUI-specific error types.
//!
//! Errors surface in the banner above the thread. Each carries a short
//! suggestion for the user.

use thiserror::Error;
use thread_model::ThreadError;

use crate::state::SettingsError;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // THREAD OPERATIONS
    // =========================================================================
    /// The session rejected a comment operation.
    #[error("{operation} failed: {source}")]
    Thread {
        /// What the user tried to do ("Comment", "Save edit", ...).
        operation: &'static str,
        source: ThreadError,
    },

    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create a thread operation error.
    pub fn thread(operation: &'static str, source: ThreadError) -> Self {
        Self::Thread { operation, source }
    }

    /// Create a settings save error.
    pub fn settings_save(err: &SettingsError) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }

    /// Minor issues the user can fix by editing their input.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Thread {
                source: ThreadError::EmptyText | ThreadError::NoDraft { .. },
                ..
            }
        )
    }

    /// A user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Thread { source, .. } => match source {
                ThreadError::EmptyText => Some("Type some text before submitting."),
                ThreadError::NotFound { .. } => {
                    Some("The comment may have been deleted along with its parent.")
                }
                ThreadError::NoDraft { .. } => Some("Open the editor again and retry."),
                ThreadError::DuplicateId { .. } | ThreadError::IdsExhausted => None,
            },
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
        }
    }
}

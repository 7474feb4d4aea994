//! Root application state.

use thread_core::ThreadSession;

use super::Settings;
use crate::error::GuiError;

/// Everything the app knows. Mutated only in `App::update`.
#[derive(Debug, Default)]
pub struct AppState {
    /// The comment forest plus composer and per-comment drafts.
    pub session: ThreadSession,

    /// User preferences loaded at startup.
    pub settings: Settings,

    /// OS dark mode flag, used when the theme mode is System.
    pub system_is_dark: bool,

    /// Last rejected operation, shown in the banner until dismissed or
    /// replaced by a successful one.
    pub error: Option<GuiError>,

    /// Bumped every time a banner is shown; keys its auto-dismiss timer.
    pub banner_generation: u64,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Record the outcome of a session operation.
    ///
    /// Success clears the banner; failure replaces it.
    pub fn report<T>(
        &mut self,
        operation: &'static str,
        result: thread_core::Result<T>,
    ) -> Option<T> {
        match result {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(err) => {
                tracing::debug!(operation, %err, "operation rejected");
                self.show_error(GuiError::thread(operation, err));
                None
            }
        }
    }

    /// Put `error` in the banner, replacing any previous one.
    pub fn show_error(&mut self, error: GuiError) {
        self.banner_generation = self.banner_generation.wrapping_add(1);
        self.error = Some(error);
    }

    /// Clear the banner if it is still the transient one shown as `generation`.
    pub fn expire_banner(&mut self, generation: u64) {
        let current = self.error.as_ref().is_some_and(GuiError::is_transient)
            && generation == self.banner_generation;
        if current {
            self.error = None;
        }
    }
}

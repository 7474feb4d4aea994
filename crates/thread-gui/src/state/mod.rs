//! Application state.
//!
//! - **AppState**: root state owning the thread session
//! - **Settings**: persisted user preferences

mod app_state;
mod settings;

pub use app_state::AppState;
pub use settings::{DisplaySettings, LoggingSettings, Settings, SettingsError};

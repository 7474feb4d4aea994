//! Application subscriptions.
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Keyboard | Continuous | Always | Escape cancels drafts |
//! | System Theme | Continuous | Always | Track OS theme changes |
//! | Banner Dismiss | 5 seconds | Transient error shown | Auto-dismiss minor errors |

use std::time::Duration;

use iced::Subscription;
use iced::keyboard;
use iced::{system, time};

use crate::message::Message;
use crate::state::AppState;

/// Batch all event subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        keyboard_subscription(),
        system_theme_subscription(),
        banner_subscription(state),
    ])
}

fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// Monitors OS theme changes for `ThemeMode::System`.
fn system_theme_subscription() -> Subscription<Message> {
    system::theme_changes().map(Message::SystemThemeChanged)
}

/// Dismisses transient errors (blank input, stale draft) after 5 seconds.
///
/// The timer is keyed by the banner generation, so a new banner restarts it.
fn banner_subscription(state: &AppState) -> Subscription<Message> {
    if state.error.as_ref().is_some_and(crate::error::GuiError::is_transient) {
        time::every(Duration::from_secs(5))
            .with(state.banner_generation)
            .map(|(generation, _)| Message::BannerExpired(generation))
    } else {
        Subscription::none()
    }
}

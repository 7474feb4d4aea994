//! Main application module.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - All state changes happen in [`App::update`]; views are pure functions
//! - Comment messages are dispatched to handlers in `crate::handler`
//! - Keyboard shortcuts live in `keyboard`, subscriptions in `subscription`

mod keyboard;
mod subscription;

use iced::widget::container;
use iced::{Element, Length, Subscription, Task, Theme};

use crate::error::GuiError;
use crate::handler::{CommentHandler, ComposerHandler, MessageHandler};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::thread_theme;
use crate::view::view_thread;

// =============================================================================
// APPLICATION
// =============================================================================

/// Root of the Iced application.
pub struct App {
    pub state: AppState,
}

impl App {
    /// Create the application with already loaded settings.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        tracing::info!(
            theme = %settings.display.theme_mode,
            indent = settings.display.indent,
            "starting comment tree"
        );
        let app = Self {
            state: AppState::with_settings(settings),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Thread
            // =================================================================
            Message::Composer(msg) => ComposerHandler.handle(&mut self.state, msg),

            Message::Comment(id, msg) => CommentHandler.handle(&mut self.state, (id, msg)),

            // =================================================================
            // Appearance
            // =================================================================
            Message::CycleTheme => {
                let display_settings = &mut self.state.settings.display;
                display_settings.theme_mode = display_settings.theme_mode.next();
                tracing::debug!(theme = %display_settings.theme_mode, "theme changed");
                if let Err(err) = self.state.settings.save() {
                    tracing::warn!(%err, "failed to save settings");
                    self.state.show_error(GuiError::settings_save(&err));
                }
                Task::none()
            }

            // =================================================================
            // Global events
            // =================================================================
            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(&key, modifiers),

            Message::DismissError => {
                self.state.error = None;
                Task::none()
            }

            Message::BannerExpired(generation) => {
                self.state.expire_banner(generation);
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        container(view_thread(&self.state))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Window title; shows how many comments the thread holds.
    pub fn title(&self) -> String {
        match self.state.session.forest().total_count() {
            0 => crate::view::PAGE_TITLE.to_string(),
            n => format!("{} ({n})", crate::view::PAGE_TITLE),
        }
    }

    pub fn theme(&self) -> Theme {
        thread_theme(
            self.state.settings.display.theme_mode,
            self.state.system_is_dark,
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};
    use thread_core::CommentId;

    use super::*;
    use crate::message::{CommentMessage, ComposerMessage};

    fn app_with_comment() -> App {
        let (mut app, _) = App::new(Settings::default());
        let _ = app.update(Message::Composer(ComposerMessage::Changed("root".into())));
        let _ = app.update(Message::Composer(ComposerMessage::Submit));
        app
    }

    #[test]
    fn title_counts_comments() {
        let (app, _) = App::new(Settings::default());
        assert_eq!(app.title(), "Recursive Comment Tree");
        assert_eq!(app_with_comment().title(), "Recursive Comment Tree (1)");
    }

    #[test]
    fn escape_cancels_open_drafts() {
        let mut app = app_with_comment();
        let id = CommentId::new(1);
        let _ = app.update(Message::Comment(id, CommentMessage::BeginEdit));
        let _ = app.update(Message::Comment(id, CommentMessage::BeginReply));
        let _ = app.update(Message::Composer(ComposerMessage::Changed("keep".into())));

        let _ = app.update(Message::KeyPressed(
            Key::Named(Named::Escape),
            Modifiers::default(),
        ));

        assert_eq!(app.state.session.open_draft_count(), 0);
        assert_eq!(app.state.session.composer(), "keep");
        assert_eq!(app.state.session.forest().total_count(), 1);
    }

    #[test]
    fn dismiss_clears_banner() {
        let mut app = app_with_comment();
        let _ = app.update(Message::Comment(CommentId::new(5), CommentMessage::Delete));
        assert!(app.state.error.is_some());
        let _ = app.update(Message::DismissError);
        assert!(app.state.error.is_none());
    }

    #[test]
    fn expired_timer_for_replaced_banner_is_ignored() {
        let mut app = app_with_comment();
        let _ = app.update(Message::Composer(ComposerMessage::Submit));
        let first = app.state.banner_generation;
        let _ = app.update(Message::Comment(CommentId::new(1), CommentMessage::SaveEdit));
        assert_ne!(app.state.banner_generation, first);

        let _ = app.update(Message::BannerExpired(first));
        assert!(app.state.error.is_some());

        let current = app.state.banner_generation;
        let _ = app.update(Message::BannerExpired(current));
        assert!(app.state.error.is_none());
    }

    #[test]
    fn system_theme_flag_follows_os() {
        let (mut app, _) = App::new(Settings::default());
        let _ = app.update(Message::SystemThemeChanged(iced::theme::Mode::Dark));
        assert!(app.state.system_is_dark);
    }
}

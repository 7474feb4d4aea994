//! The thread page.
//!
//! - Header with the page title and theme toggle
//! - Error banner for the last rejected operation
//! - Composer row (input + Comment button)
//! - One card per comment, indented by depth, or an empty state

use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use thread_core::outline;

use super::banner::view_error_banner;
use super::comment::view_comment;
use crate::component::{ActionButton, DraftInput, EmptyState};
use crate::message::{ComposerMessage, Message};
use crate::state::AppState;
use crate::theme::{CONTENT_MAX_WIDTH, SPACING_MD, SPACING_SM, SPACING_XL};

/// Page title, also used as the window title.
pub const PAGE_TITLE: &str = "Recursive Comment Tree";

// =============================================================================
// MAIN VIEW
// =============================================================================

/// Render the whole page.
pub fn view_thread(state: &AppState) -> Element<'_, Message> {
    let mut page = column![view_header(state)].spacing(SPACING_MD);

    if let Some(error) = &state.error {
        page = page.push(view_error_banner(error));
    }

    page = page
        .push(view_composer(state))
        .push(Space::new().height(SPACING_SM))
        .push(view_comments(state));

    container(scrollable(
        container(page.max_width(CONTENT_MAX_WIDTH))
            .padding(SPACING_XL)
            .center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// =============================================================================
// HEADER
// =============================================================================

fn view_header(state: &AppState) -> Element<'_, Message> {
    let mode = state.settings.display.theme_mode;
    row![
        text(PAGE_TITLE).size(28),
        Space::new().width(Length::Fill),
        ActionButton::ghost(
            lucide::settings().size(14),
            format!("Theme: {mode}"),
            Message::CycleTheme,
        )
        .view(),
    ]
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// COMPOSER
// =============================================================================

fn view_composer(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;
    row![
        DraftInput::new("Write a comment...", session.composer())
            .on_change(|s| Message::Composer(ComposerMessage::Changed(s)))
            .on_submit(Message::Composer(ComposerMessage::Submit))
            .view(),
        ActionButton::primary(
            lucide::plus().size(14),
            "Comment",
            Message::Composer(ComposerMessage::Submit),
        )
        .enabled(session.can_submit_composer())
        .view(),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// COMMENTS
// =============================================================================

fn view_comments(state: &AppState) -> Element<'_, Message> {
    let forest = state.session.forest();
    if forest.is_empty() {
        return EmptyState::new(lucide::message_square().size(48), "No comments yet")
            .description("Start the discussion above.")
            .view();
    }

    let indent = state.settings.display.indent;
    let cards = outline::rows(forest).into_iter().map(|row| {
        let offset = row.depth as f32 * indent;
        view_comment(row, &state.session, offset)
    });

    column(cards).spacing(SPACING_SM).into()
}

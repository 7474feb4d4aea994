//! Dismissible error banner.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::message::Message;
use crate::theme::{SPACING_SM, SPACING_XS, ThreadColors, button_ghost, error_banner_container};

pub fn view_error_banner(error: &GuiError) -> Element<'_, Message> {
    let mut details = column![text(error.to_string()).size(13)].spacing(SPACING_XS);
    if let Some(hint) = error.suggestion() {
        details = details.push(text(hint).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.thread().text_secondary),
        }));
    }

    let dismiss = button(lucide::x().size(14))
        .on_press(Message::DismissError)
        .padding(SPACING_XS)
        .style(button_ghost);

    container(
        row![
            lucide::circle_alert().size(16),
            details,
            Space::new().width(Length::Fill),
            dismiss,
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_SM * 2.0])
    .width(Length::Fill)
    .style(error_banner_container)
    .into()
}

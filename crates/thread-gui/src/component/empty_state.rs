//! Empty state component.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XL, ThreadColors};

/// Icon, title and optional description, centered horizontally.
///
/// ```ignore
/// EmptyState::new(lucide::message_square().size(48), "No comments yet")
///     .description("Start the discussion above.")
///     .view()
/// ```
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let muted = |theme: &Theme| text::Style {
            color: Some(theme.thread().text_muted),
        };

        let mut content = column![
            self.icon,
            Space::new().height(SPACING_MD),
            text(self.title).size(16).style(muted),
        ]
        .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).style(muted));
        }

        container(content)
            .width(Length::Fill)
            .padding(SPACING_XL)
            .center_x(Length::Fill)
            .into()
    }
}

//! Action button component.

use iced::widget::{Space, button, row, text};
use iced::{Alignment, Element};

use crate::theme::{SPACING_XS, button_danger, button_ghost, button_primary, button_secondary};

// =============================================================================
// ACTION BUTTON STYLE
// =============================================================================

/// Button style variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButtonStyle {
    Primary,
    Secondary,
    Danger,
    Ghost,
}

// =============================================================================
// ACTION BUTTON
// =============================================================================

/// A styled button with an optional icon.
///
/// # Example
/// ```ignore
/// ActionButton::primary(lucide::check(), "Save", Message::Comment(id, CommentMessage::SaveEdit))
///     .enabled(session.can_save_edit(id))
///     .view()
/// ```
pub struct ActionButton<'a, M> {
    icon: Option<Element<'a, M>>,
    label: String,
    on_press: M,
    style: ActionButtonStyle,
    enabled: bool,
    compact: bool,
}

impl<'a, M: Clone + 'a> ActionButton<'a, M> {
    fn new_with_style(
        icon: Option<Element<'a, M>>,
        label: impl Into<String>,
        on_press: M,
        style: ActionButtonStyle,
    ) -> Self {
        Self {
            icon,
            label: label.into(),
            on_press,
            style,
            enabled: true,
            compact: false,
        }
    }

    pub fn primary(icon: impl Into<Element<'a, M>>, label: impl Into<String>, on_press: M) -> Self {
        Self::new_with_style(
            Some(icon.into()),
            label,
            on_press,
            ActionButtonStyle::Primary,
        )
    }

    pub fn secondary(
        icon: impl Into<Element<'a, M>>,
        label: impl Into<String>,
        on_press: M,
    ) -> Self {
        Self::new_with_style(
            Some(icon.into()),
            label,
            on_press,
            ActionButtonStyle::Secondary,
        )
    }

    pub fn danger(icon: impl Into<Element<'a, M>>, label: impl Into<String>, on_press: M) -> Self {
        Self::new_with_style(
            Some(icon.into()),
            label,
            on_press,
            ActionButtonStyle::Danger,
        )
    }

    /// Low-emphasis button, used for the per-comment actions.
    pub fn ghost(icon: impl Into<Element<'a, M>>, label: impl Into<String>, on_press: M) -> Self {
        Self::new_with_style(Some(icon.into()), label, on_press, ActionButtonStyle::Ghost)
    }

    /// Disable the button when `enabled` is false.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Smaller padding for buttons inside comment cards.
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Build the button element.
    pub fn view(self) -> Element<'a, M> {
        let label = text(self.label).size(13);
        let content: Element<'a, M> = match self.icon {
            Some(icon) => row![icon, Space::new().width(SPACING_XS), label]
                .align_y(Alignment::Center)
                .into(),
            None => label.into(),
        };

        let padding = if self.compact {
            [4.0, 8.0]
        } else {
            [8.0, 16.0]
        };

        let style = match self.style {
            ActionButtonStyle::Primary => button_primary,
            ActionButtonStyle::Secondary => button_secondary,
            ActionButtonStyle::Danger => button_danger,
            ActionButtonStyle::Ghost => button_ghost,
        };

        button(content)
            .on_press_maybe(self.enabled.then_some(self.on_press))
            .padding(padding)
            .style(style)
            .into()
    }
}

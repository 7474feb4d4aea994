//! Single-line text input for the composer and for edit/reply drafts.

use iced::Element;
use iced::Length;
use iced::widget::text_input;

use crate::theme::text_input_default;

/// A text input that reports every change and submits on Enter.
///
/// # Example
/// ```ignore
/// DraftInput::new("Write a reply...", draft.text())
///     .on_change(move |s| Message::Comment(id, CommentMessage::ReplyChanged(s)))
///     .on_submit(Message::Comment(id, CommentMessage::SaveReply))
///     .view()
/// ```
pub struct DraftInput<'a, M> {
    placeholder: &'a str,
    value: &'a str,
    on_change: Option<Box<dyn Fn(String) -> M + 'a>>,
    on_submit: Option<M>,
}

impl<'a, M: Clone + 'a> DraftInput<'a, M> {
    pub fn new(placeholder: &'a str, value: &'a str) -> Self {
        Self {
            placeholder,
            value,
            on_change: None,
            on_submit: None,
        }
    }

    pub fn on_change(mut self, f: impl Fn(String) -> M + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Message sent when Enter is pressed in the input.
    pub fn on_submit(mut self, msg: M) -> Self {
        self.on_submit = Some(msg);
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut input = text_input(self.placeholder, self.value)
            .padding([8.0, 12.0])
            .size(14)
            .width(Length::Fill)
            .style(text_input_default);

        if let Some(on_change) = self.on_change {
            input = input.on_input(on_change);
        }
        if let Some(msg) = self.on_submit {
            input = input.on_submit(msg);
        }

        input.into()
    }
}

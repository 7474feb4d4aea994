//! One comment card with its inline edit and reply drafts.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use thread_core::{CommentId, OutlineRow, ThreadSession};

use crate::component::{ActionButton, DraftInput};
use crate::message::{CommentMessage, Message};
use crate::theme::{
    BORDER_WIDTH_MEDIUM, SPACING_MD, SPACING_SM, SPACING_XS, ThreadColors, card_container,
};

/// Render a comment at `offset` pixels from the left edge.
pub fn view_comment<'a>(
    row_data: OutlineRow<'a>,
    session: &'a ThreadSession,
    offset: f32,
) -> Element<'a, Message> {
    let id = row_data.id;
    let view = session.node_view(id);

    let mut body = column![].spacing(SPACING_SM);

    match &view.editing {
        Some(draft) => {
            body = body.push(view_draft(
                id,
                draft.text(),
                "Edit comment...",
                DraftKind::Edit,
                session.can_save_edit(id),
            ));
        }
        None => {
            body = body
                .push(view_meta(row_data))
                .push(text(row_data.text).size(14))
                .push(view_actions(id));
        }
    }

    if let Some(draft) = &view.replying {
        body = body.push(view_draft(
            id,
            draft.text(),
            "Write a reply...",
            DraftKind::Reply,
            session.can_save_reply(id),
        ));
    }

    let card = container(body)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card_container);

    if offset > 0.0 {
        row![Space::new().width(offset), reply_guide(), card]
            .spacing(SPACING_SM)
            .into()
    } else {
        card.into()
    }
}

fn view_meta(row_data: OutlineRow<'_>) -> Element<'_, Message> {
    let replies = match row_data.reply_count {
        0 => String::new(),
        1 => " · 1 reply".to_string(),
        n => format!(" · {n} replies"),
    };
    text(format!("#{}{replies}", row_data.id))
        .size(11)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.thread().text_muted),
        })
        .into()
}

fn view_actions<'a>(id: CommentId) -> Element<'a, Message> {
    let msg = move |m| Message::Comment(id, m);
    row![
        ActionButton::ghost(lucide::pencil().size(12), "Edit", msg(CommentMessage::BeginEdit))
            .compact()
            .view(),
        ActionButton::ghost(
            lucide::message_square().size(12),
            "Reply",
            msg(CommentMessage::BeginReply),
        )
        .compact()
        .view(),
        ActionButton::ghost(lucide::trash().size(12), "Delete", msg(CommentMessage::Delete))
            .compact()
            .view(),
    ]
    .spacing(SPACING_XS)
    .into()
}

// =============================================================================
// DRAFTS
// =============================================================================

#[derive(Clone, Copy)]
enum DraftKind {
    Edit,
    Reply,
}

impl DraftKind {
    fn changed(self, text: String) -> CommentMessage {
        match self {
            Self::Edit => CommentMessage::EditChanged(text),
            Self::Reply => CommentMessage::ReplyChanged(text),
        }
    }

    fn save(self) -> CommentMessage {
        match self {
            Self::Edit => CommentMessage::SaveEdit,
            Self::Reply => CommentMessage::SaveReply,
        }
    }

    fn cancel(self) -> CommentMessage {
        match self {
            Self::Edit => CommentMessage::CancelEdit,
            Self::Reply => CommentMessage::CancelReply,
        }
    }
}

/// Input with Save and Cancel. Save is disabled while the draft is blank.
fn view_draft<'a>(
    id: CommentId,
    value: &'a str,
    placeholder: &'a str,
    kind: DraftKind,
    can_save: bool,
) -> Element<'a, Message> {
    column![
        DraftInput::new(placeholder, value)
            .on_change(move |s| Message::Comment(id, kind.changed(s)))
            .on_submit(Message::Comment(id, kind.save()))
            .view(),
        row![
            ActionButton::primary(
                lucide::check().size(12),
                "Save",
                Message::Comment(id, kind.save())
            )
            .enabled(can_save)
            .compact()
            .view(),
            ActionButton::secondary(
                lucide::x().size(12),
                "Cancel",
                Message::Comment(id, kind.cancel())
            )
            .compact()
            .view(),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    ]
    .spacing(SPACING_SM)
    .into()
}

/// Thin vertical line left of a nested reply.
fn reply_guide<'a>() -> Element<'a, Message> {
    container(Space::new().width(BORDER_WIDTH_MEDIUM))
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.thread().reply_guide.into()),
            ..Default::default()
        })
        .into()
}

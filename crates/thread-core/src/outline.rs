//! Flat projection of a forest for rendering.

use std::fmt::Write as _;

use thread_model::{CommentId, Forest};

/// Indentation per depth level in [`render_text`].
const INDENT: &str = "  ";

/// Shown by [`render_text`] for an empty forest.
pub const EMPTY_OUTLINE: &str = "(no comments yet)";

/// One comment, positioned for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineRow<'a> {
    pub id: CommentId,
    /// 0 for top-level comments.
    pub depth: usize,
    pub text: &'a str,
    /// Number of direct replies.
    pub reply_count: usize,
}

/// The forest flattened in pre-order, so each comment is followed by its
/// replies.
pub fn rows(forest: &Forest) -> Vec<OutlineRow<'_>> {
    forest
        .iter()
        .map(|(depth, comment)| OutlineRow {
            id: comment.id,
            depth,
            text: &comment.text,
            reply_count: comment.replies.len(),
        })
        .collect()
}

/// Render the forest as an indented plain-text outline, one line per comment.
///
/// Line breaks inside a comment are written as `\n` (and `\r`) so each
/// comment stays on its own line.
pub fn render_text(forest: &Forest) -> String {
    if forest.is_empty() {
        return EMPTY_OUTLINE.to_owned();
    }
    let mut out = String::new();
    for row in rows(forest) {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "{}- [#{}] ", INDENT.repeat(row.depth), row.id);
        push_single_line(&mut out, row.text);
    }
    out
}

fn push_single_line(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thread_model::Comment;

    #[test]
    fn rows_follow_pre_order() {
        let forest = Forest::from(vec![
            Comment::with_replies(
                CommentId::new(1),
                "a",
                vec![Comment::new(CommentId::new(2), "b")],
            ),
            Comment::new(CommentId::new(3), "c"),
        ]);
        let got: Vec<(u64, usize, usize)> = rows(&forest)
            .iter()
            .map(|row| (row.id.get(), row.depth, row.reply_count))
            .collect();
        assert_eq!(got, vec![(1, 0, 1), (2, 1, 0), (3, 0, 0)]);
    }

    #[test]
    fn line_breaks_are_escaped() {
        let forest = Forest::from(vec![Comment::with_replies(
            CommentId::new(1),
            "first\nsecond",
            vec![Comment::new(CommentId::new(2), "a\r\nb")],
        )]);
        let outline = render_text(&forest);
        assert_eq!(outline.lines().count(), 2);
        assert_eq!(outline, "- [#1] first\\nsecond\n  - [#2] a\\r\\nb");
    }

    #[test]
    fn empty_forest_has_placeholder() {
        assert_eq!(render_text(&Forest::new()), EMPTY_OUTLINE);
        assert!(rows(&Forest::new()).is_empty());
    }
}

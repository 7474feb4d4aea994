//! Tree mutations.
//!
//! Every operation takes the current forest by reference and builds a new
//! one; the input is never modified. Traversal is pre-order, depth-first,
//! top-to-bottom, and applies at the first matching id.
//!
//! The silent forms ([`add`], [`edit`], [`delete`], [`reply`]) return the
//! input unchanged when the text is blank or the target id is missing. The
//! strict forms (`try_*`) return a [`ThreadError`] instead.

use thread_model::{Comment, CommentId, Forest, Result, ThreadError};

use crate::IdGenerator;

/// Whether `text` has something other than whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

// =============================================================================
// STRICT FORMS
// =============================================================================

/// Append a new top-level comment.
///
/// The stored text is `text` as given; trimming is only used for the
/// emptiness check. No id is consumed when the text is rejected.
pub fn try_add(forest: &Forest, text: &str, ids: &mut IdGenerator) -> Result<(Forest, CommentId)> {
    if is_blank(text) {
        return Err(ThreadError::EmptyText);
    }
    let id = ids.next_for(forest)?;
    let mut roots = forest.roots().to_vec();
    roots.push(Comment::new(id, text));
    Ok((Forest::from(roots), id))
}

/// Replace the text of the comment with `id`, keeping its id and replies.
///
/// Any text is accepted, including an empty one.
pub fn try_edit(forest: &Forest, id: CommentId, text: &str) -> Result<Forest> {
    let mut found = false;
    let roots = edited(forest.roots(), id, text, &mut found);
    if found {
        Ok(Forest::from(roots))
    } else {
        Err(ThreadError::NotFound { id })
    }
}

/// Remove the comment with `id` together with its whole subtree.
pub fn try_delete(forest: &Forest, id: CommentId) -> Result<Forest> {
    let mut removed = false;
    let roots = pruned(forest.roots(), id, &mut removed);
    if removed {
        Ok(Forest::from(roots))
    } else {
        Err(ThreadError::NotFound { id })
    }
}

/// Append a new comment at the end of `parent`'s replies.
///
/// No id is consumed when the text is blank or the parent is missing.
pub fn try_reply(
    forest: &Forest,
    parent: CommentId,
    text: &str,
    ids: &mut IdGenerator,
) -> Result<(Forest, CommentId)> {
    if is_blank(text) {
        return Err(ThreadError::EmptyText);
    }
    if !forest.contains(parent) {
        return Err(ThreadError::NotFound { id: parent });
    }
    let id = ids.next_for(forest)?;
    let mut pending = Some(Comment::new(id, text));
    let roots = appended(forest.roots(), parent, &mut pending);
    debug_assert!(pending.is_none(), "parent was found but reply not placed");
    Ok((Forest::from(roots), id))
}

// =============================================================================
// SILENT FORMS
// =============================================================================

/// [`try_add`], returning `forest` unchanged on blank text.
pub fn add(forest: &Forest, text: &str, ids: &mut IdGenerator) -> Forest {
    try_add(forest, text, ids).map_or_else(|_| forest.clone(), |(next, _)| next)
}

/// [`try_edit`], returning `forest` unchanged when `id` is missing.
pub fn edit(forest: &Forest, id: CommentId, text: &str) -> Forest {
    try_edit(forest, id, text).unwrap_or_else(|_| forest.clone())
}

/// [`try_delete`], returning `forest` unchanged when `id` is missing.
pub fn delete(forest: &Forest, id: CommentId) -> Forest {
    try_delete(forest, id).unwrap_or_else(|_| forest.clone())
}

/// [`try_reply`], returning `forest` unchanged on blank text or a missing parent.
pub fn reply(forest: &Forest, parent: CommentId, text: &str, ids: &mut IdGenerator) -> Forest {
    try_reply(forest, parent, text, ids).map_or_else(|_| forest.clone(), |(next, _)| next)
}

// =============================================================================
// RECURSIVE REBUILDS
// =============================================================================

fn edited(nodes: &[Comment], id: CommentId, text: &str, found: &mut bool) -> Vec<Comment> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !*found && node.id == id {
            *found = true;
            out.push(Comment::with_replies(node.id, text, node.replies.clone()));
        } else if *found {
            out.push(node.clone());
        } else {
            out.push(Comment::with_replies(
                node.id,
                node.text.clone(),
                edited(&node.replies, id, text, found),
            ));
        }
    }
    out
}

fn pruned(nodes: &[Comment], id: CommentId, removed: &mut bool) -> Vec<Comment> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.id == id {
            *removed = true;
            continue;
        }
        out.push(Comment::with_replies(
            node.id,
            node.text.clone(),
            pruned(&node.replies, id, removed),
        ));
    }
    out
}

fn appended(nodes: &[Comment], parent: CommentId, pending: &mut Option<Comment>) -> Vec<Comment> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if pending.is_none() {
            out.push(node.clone());
            continue;
        }
        let mut replies = if node.id == parent {
            node.replies.clone()
        } else {
            appended(&node.replies, parent, pending)
        };
        if node.id == parent
            && let Some(new) = pending.take()
        {
            replies.push(new);
        }
        out.push(Comment::with_replies(node.id, node.text.clone(), replies));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> CommentId {
        CommentId::new(raw)
    }

    /// 1:a > 2:b > 3:c, plus root 4:d
    fn chain() -> Forest {
        Forest::from(vec![
            Comment::with_replies(
                id(1),
                "a",
                vec![Comment::with_replies(
                    id(2),
                    "b",
                    vec![Comment::new(id(3), "c")],
                )],
            ),
            Comment::new(id(4), "d"),
        ])
    }

    #[test]
    fn add_appends_at_end_of_top_level() {
        let mut ids = IdGenerator::seeded_from(&chain());
        let (next, new_id) = try_add(&chain(), "hello", &mut ids).unwrap();
        assert_eq!(new_id, id(5));
        assert_eq!(next.len(), 3);
        assert_eq!(next.roots()[2], Comment::new(id(5), "hello"));
    }

    #[test]
    fn add_keeps_surrounding_whitespace() {
        let mut ids = IdGenerator::new();
        let next = add(&Forest::new(), "  hi  ", &mut ids);
        assert_eq!(next.roots()[0].text, "  hi  ");
    }

    #[test]
    fn blank_add_is_rejected_without_consuming_an_id() {
        let mut ids = IdGenerator::new();
        assert_eq!(
            try_add(&Forest::new(), " \t\n", &mut ids),
            Err(ThreadError::EmptyText)
        );
        assert_eq!(ids.peek(), Some(id(1)));
    }

    #[test]
    fn edit_nested_node_keeps_replies() {
        let next = try_edit(&chain(), id(2), "b2").unwrap();
        let b = next.find(id(2)).unwrap();
        assert_eq!(b.text, "b2");
        assert_eq!(b.replies, vec![Comment::new(id(3), "c")]);
        assert_eq!(next.find(id(1)).unwrap().text, "a");
    }

    #[test]
    fn edit_accepts_empty_text() {
        let next = try_edit(&chain(), id(4), "").unwrap();
        assert_eq!(next.find(id(4)).unwrap().text, "");
    }

    #[test]
    fn edit_missing_id_is_not_found() {
        assert_eq!(
            try_edit(&chain(), id(99), "x"),
            Err(ThreadError::NotFound { id: id(99) })
        );
        assert_eq!(edit(&chain(), id(99), "x"), chain());
    }

    #[test]
    fn delete_removes_whole_subtree() {
        let next = try_delete(&chain(), id(2)).unwrap();
        assert!(next.contains(id(1)));
        assert!(!next.contains(id(2)));
        assert!(!next.contains(id(3)));
        assert!(next.contains(id(4)));
        assert!(next.find(id(1)).unwrap().is_leaf());
    }

    #[test]
    fn delete_deep_leaf_in_one_pass() {
        let next = delete(&chain(), id(3));
        assert_eq!(next.total_count(), 3);
        assert!(next.find(id(2)).unwrap().is_leaf());
    }

    #[test]
    fn reply_appends_after_existing_replies() {
        let mut ids = IdGenerator::seeded_from(&chain());
        let once = reply(&chain(), id(1), "first", &mut ids);
        let twice = reply(&once, id(1), "second", &mut ids);
        let texts: Vec<&str> = twice
            .find(id(1))
            .unwrap()
            .replies
            .iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(texts, vec!["b", "first", "second"]);
    }

    #[test]
    fn reply_to_missing_parent_consumes_no_id() {
        let mut ids = IdGenerator::seeded_from(&chain());
        let before = ids.clone();
        assert_eq!(
            try_reply(&chain(), id(42), "hi", &mut ids),
            Err(ThreadError::NotFound { id: id(42) })
        );
        assert_eq!(ids, before);
        assert_eq!(
            try_reply(&chain(), id(1), "   ", &mut ids),
            Err(ThreadError::EmptyText)
        );
    }

    #[test]
    fn reply_to_deep_leaf() {
        let mut ids = IdGenerator::seeded_from(&chain());
        let (next, new_id) = try_reply(&chain(), id(3), "deep", &mut ids).unwrap();
        assert_eq!(next.depth_of(new_id), Some(3));
    }
}

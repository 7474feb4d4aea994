//! The top-level ordered sequence of comments.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Comment, CommentId, Result, ThreadError};

/// Ordered sequence of root comments.
///
/// Serializes as a plain JSON array of comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest(Vec<Comment>);

impl Forest {
    /// An empty forest.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Top-level comments in display order.
    pub fn roots(&self) -> &[Comment] {
        &self.0
    }

    /// Consume the forest, returning its top-level comments.
    pub fn into_roots(self) -> Vec<Comment> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level comments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of comments at every depth.
    pub fn total_count(&self) -> usize {
        self.0.iter().map(Comment::subtree_len).sum()
    }

    /// Pre-order, depth-first, top-to-bottom walk yielding `(depth, comment)`.
    ///
    /// Roots have depth 0.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(&self.0)
    }

    /// Every id in traversal order.
    pub fn ids(&self) -> impl Iterator<Item = CommentId> + '_ {
        self.iter().map(|(_, c)| c.id)
    }

    /// First comment with the given id in traversal order.
    pub fn find(&self, id: CommentId) -> Option<&Comment> {
        self.iter().map(|(_, c)| c).find(|c| c.id == id)
    }

    pub fn contains(&self, id: CommentId) -> bool {
        self.find(id).is_some()
    }

    /// Nesting depth of the comment with the given id.
    pub fn depth_of(&self, id: CommentId) -> Option<usize> {
        self.iter().find(|(_, c)| c.id == id).map(|(depth, _)| depth)
    }

    /// Largest id anywhere in the forest.
    pub fn max_id(&self) -> Option<CommentId> {
        self.ids().max()
    }

    /// First id seen twice in traversal order, if any.
    pub fn first_duplicate(&self) -> Option<CommentId> {
        let mut seen = HashSet::new();
        self.ids().find(|id| !seen.insert(*id))
    }

    pub fn has_unique_ids(&self) -> bool {
        self.first_duplicate().is_none()
    }

    /// Check the global id uniqueness invariant.
    pub fn validate(&self) -> Result<()> {
        match self.first_duplicate() {
            Some(id) => Err(ThreadError::DuplicateId { id }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Comment>> for Forest {
    fn from(roots: Vec<Comment>) -> Self {
        Self(roots)
    }
}

impl FromIterator<Comment> for Forest {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = (usize, &'a Comment);
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a forest. See [`Forest::iter`].
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Comment)>,
}

impl<'a> PreOrder<'a> {
    fn new(roots: &'a [Comment]) -> Self {
        Self {
            stack: roots.iter().rev().map(|c| (0, c)).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Comment);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, comment) = self.stack.pop()?;
        self.stack
            .extend(comment.replies.iter().rev().map(|r| (depth + 1, r)));
        Some((depth, comment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> CommentId {
        CommentId::new(raw)
    }

    fn sample() -> Forest {
        Forest::from(vec![
            Comment::with_replies(
                id(1),
                "a",
                vec![
                    Comment::with_replies(id(2), "b", vec![Comment::new(id(3), "c")]),
                    Comment::new(id(4), "d"),
                ],
            ),
            Comment::new(id(5), "e"),
        ])
    }

    #[test]
    fn iter_is_pre_order_top_to_bottom() {
        let order: Vec<(usize, u64)> = sample().iter().map(|(d, c)| (d, c.id.get())).collect();
        assert_eq!(order, vec![(0, 1), (1, 2), (2, 3), (1, 4), (0, 5)]);
    }

    #[test]
    fn counts_and_lookups() {
        let forest = sample();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.total_count(), 5);
        assert_eq!(forest.find(id(3)).map(|c| c.text.as_str()), Some("c"));
        assert!(!forest.contains(id(9)));
        assert_eq!(forest.depth_of(id(3)), Some(2));
        assert_eq!(forest.max_id(), Some(id(5)));
        assert_eq!(Forest::new().max_id(), None);
    }

    #[test]
    fn detects_duplicate_ids_across_levels() {
        let forest = Forest::from(vec![
            Comment::with_replies(id(1), "a", vec![Comment::new(id(2), "b")]),
            Comment::new(id(2), "c"),
        ]);
        assert_eq!(forest.first_duplicate(), Some(id(2)));
        assert_eq!(
            forest.validate(),
            Err(ThreadError::DuplicateId { id: id(2) })
        );
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn serializes_as_plain_array() {
        let forest = Forest::from(vec![Comment::new(id(1), "a")]);
        let json = serde_json::to_string(&forest).unwrap();
        assert_eq!(json, r#"[{"id":1,"text":"a","replies":[]}]"#);
    }
}

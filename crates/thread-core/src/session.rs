//! Per-comment edit and reply drafts layered over a [`ThreadStore`].
//!
//! Each comment has two independent toggles, Editing and Replying, both
//! starting in Viewing. Opening one creates a [`Draft`]; cancelling drops
//! the draft without touching the forest; saving commits it through the
//! store and closes it. A draft that is blank after trimming cannot be saved.

use std::collections::BTreeMap;

use thread_model::{CommentId, Forest, Result, ThreadError};

use crate::ThreadStore;
use crate::ops::is_blank;

/// Text being composed for an edit or a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the draft holds only whitespace.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.text)
    }
}

/// View state of one comment. `None` means Viewing for that toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeView {
    pub editing: Option<Draft>,
    pub replying: Option<Draft>,
}

static VIEWING: NodeView = NodeView {
    editing: None,
    replying: None,
};

impl NodeView {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_replying(&self) -> bool {
        self.replying.is_some()
    }

    fn is_idle(&self) -> bool {
        self.editing.is_none() && self.replying.is_none()
    }
}

/// Which of a comment's two drafts an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Edit,
    Reply,
}

impl Slot {
    fn of(self, view: &NodeView) -> Option<&Draft> {
        match self {
            Self::Edit => view.editing.as_ref(),
            Self::Reply => view.replying.as_ref(),
        }
    }

    fn of_mut(self, view: &mut NodeView) -> &mut Option<Draft> {
        match self {
            Self::Edit => &mut view.editing,
            Self::Reply => &mut view.replying,
        }
    }
}

/// The store plus everything the user is currently typing.
#[derive(Debug, Clone, Default)]
pub struct ThreadSession {
    store: ThreadStore,
    composer: String,
    views: BTreeMap<CommentId, NodeView>,
}

impl ThreadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: ThreadStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &ThreadStore {
        &self.store
    }

    pub fn forest(&self) -> &Forest {
        self.store.forest()
    }

    // =========================================================================
    // COMPOSER
    // =========================================================================

    /// Current text of the top-level composer.
    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn set_composer(&mut self, text: impl Into<String>) {
        self.composer = text.into();
    }

    /// Whether the composer holds something other than whitespace.
    pub fn can_submit_composer(&self) -> bool {
        !is_blank(&self.composer)
    }

    /// Add the composer text as a new top-level comment.
    ///
    /// The composer is cleared only when the comment was added.
    pub fn submit_composer(&mut self) -> Result<CommentId> {
        let id = self.store.add(&self.composer)?;
        self.composer.clear();
        Ok(id)
    }

    // =========================================================================
    // EDITING
    // =========================================================================

    /// Open an edit draft seeded with the comment's current text.
    ///
    /// An already open draft is kept as is.
    pub fn begin_edit(&mut self, id: CommentId) -> Result<()> {
        let current = self
            .store
            .forest()
            .find(id)
            .ok_or(ThreadError::NotFound { id })?
            .text
            .clone();
        let view = self.views.entry(id).or_default();
        if view.editing.is_none() {
            view.editing = Some(Draft::new(current));
            tracing::debug!(%id, "edit opened");
        }
        Ok(())
    }

    pub fn update_edit_draft(&mut self, id: CommentId, text: impl Into<String>) -> Result<()> {
        self.update(id, Slot::Edit, text.into())
    }

    /// Commit the edit draft and return to Viewing.
    pub fn save_edit(&mut self, id: CommentId) -> Result<()> {
        let text = self.saveable(id, Slot::Edit)?;
        let saved = self.store.edit(id, &text);
        self.finish(id, Slot::Edit, saved.is_ok());
        saved
    }

    /// Discard the edit draft. Returns whether one was open.
    pub fn cancel_edit(&mut self, id: CommentId) -> bool {
        self.close(id, Slot::Edit)
    }

    pub fn can_save_edit(&self, id: CommentId) -> bool {
        self.can_save(id, Slot::Edit)
    }

    // =========================================================================
    // REPLYING
    // =========================================================================

    /// Open an empty reply draft under the comment.
    ///
    /// An already open draft is kept as is.
    pub fn begin_reply(&mut self, id: CommentId) -> Result<()> {
        if !self.store.forest().contains(id) {
            return Err(ThreadError::NotFound { id });
        }
        let view = self.views.entry(id).or_default();
        if view.replying.is_none() {
            view.replying = Some(Draft::default());
            tracing::debug!(%id, "reply opened");
        }
        Ok(())
    }

    pub fn update_reply_draft(&mut self, id: CommentId, text: impl Into<String>) -> Result<()> {
        self.update(id, Slot::Reply, text.into())
    }

    /// Post the reply draft under the comment and return to Viewing.
    pub fn save_reply(&mut self, id: CommentId) -> Result<CommentId> {
        let text = self.saveable(id, Slot::Reply)?;
        let saved = self.store.reply(id, &text);
        self.finish(id, Slot::Reply, saved.is_ok());
        saved
    }

    /// Discard the reply draft. Returns whether one was open.
    pub fn cancel_reply(&mut self, id: CommentId) -> bool {
        self.close(id, Slot::Reply)
    }

    pub fn can_save_reply(&self, id: CommentId) -> bool {
        self.can_save(id, Slot::Reply)
    }

    // =========================================================================
    // OTHER
    // =========================================================================

    /// Delete the comment and its subtree, dropping their view state.
    pub fn delete(&mut self, id: CommentId) -> Result<()> {
        self.store.delete(id)?;
        self.prune();
        Ok(())
    }

    /// Discard every open edit and reply draft.
    ///
    /// The composer is left alone. Returns how many drafts were discarded.
    pub fn cancel_all(&mut self) -> usize {
        let open = self.open_draft_count();
        self.views.clear();
        if open > 0 {
            tracing::debug!(open, "all drafts cancelled");
        }
        open
    }

    /// View state of a comment; Viewing for both toggles if nothing is open.
    pub fn node_view(&self, id: CommentId) -> &NodeView {
        self.views.get(&id).unwrap_or(&VIEWING)
    }

    /// Number of open edit and reply drafts across all comments.
    pub fn open_draft_count(&self) -> usize {
        self.views
            .values()
            .map(|view| usize::from(view.is_editing()) + usize::from(view.is_replying()))
            .sum()
    }

    fn update(&mut self, id: CommentId, slot: Slot, text: String) -> Result<()> {
        let draft = self
            .views
            .get_mut(&id)
            .and_then(|view| slot.of_mut(view).as_mut())
            .ok_or(ThreadError::NoDraft { id })?;
        draft.set(text);
        Ok(())
    }

    fn saveable(&self, id: CommentId, slot: Slot) -> Result<String> {
        let draft = self
            .views
            .get(&id)
            .and_then(|view| slot.of(view))
            .ok_or(ThreadError::NoDraft { id })?;
        if draft.is_blank() {
            return Err(ThreadError::EmptyText);
        }
        Ok(draft.text().to_owned())
    }

    fn can_save(&self, id: CommentId, slot: Slot) -> bool {
        self.views
            .get(&id)
            .and_then(|view| slot.of(view))
            .is_some_and(|draft| !draft.is_blank())
    }

    fn finish(&mut self, id: CommentId, slot: Slot, saved: bool) {
        if saved {
            self.close(id, slot);
        } else if !self.store.forest().contains(id) {
            self.prune();
        }
    }

    fn close(&mut self, id: CommentId, slot: Slot) -> bool {
        let Some(view) = self.views.get_mut(&id) else {
            return false;
        };
        let closed = slot.of_mut(view).take().is_some();
        if view.is_idle() {
            self.views.remove(&id);
        }
        closed
    }

    fn prune(&mut self) {
        let forest = self.store.forest();
        let before = self.views.len();
        self.views.retain(|id, _| forest.contains(*id));
        let dropped = before - self.views.len();
        if dropped > 0 {
            tracing::debug!(dropped, "view state pruned");
        }
    }
}

//! Property-based invariant tests for the tree mutations.
//!
//! 1. Edit and Delete with an unknown id return the forest unchanged.
//! 2. Add with blank text returns the forest unchanged.
//! 3. Add with text appends exactly one top-level leaf.
//! 4. Edit only touches the targeted comment.
//! 5. Delete is idempotent and removes the whole subtree.
//! 6. Reply appends after the parent's existing replies.
//! 7. Ids stay globally unique after any action sequence.
//! 8. Rejected actions never change the store.

use proptest::prelude::*;
use thread_core::{Action, CommentId, Forest, IdGenerator, ThreadStore, ops};

// ── Helpers ─────────────────────────────────────────────────────────────

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_owned()),
        "[a-z][a-z ]{0,8}",
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    let id = (1u64..24).prop_map(CommentId::new);
    prop_oneof![
        3 => text_strategy().prop_map(Action::add),
        1 => (id.clone(), text_strategy()).prop_map(|(id, text)| Action::edit(id, text)),
        1 => id.clone().prop_map(Action::delete),
        3 => (id, text_strategy()).prop_map(|(parent, text)| Action::reply(parent, text)),
    ]
}

fn actions_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action_strategy(), 0..40)
}

fn replay(actions: Vec<Action>) -> ThreadStore {
    let mut store = ThreadStore::new();
    for action in actions {
        store.dispatch(action);
    }
    store
}

fn forest_strategy() -> impl Strategy<Value = Forest> {
    actions_strategy().prop_map(|actions| replay(actions).into_forest())
}

fn missing_id(forest: &Forest, offset: u64) -> CommentId {
    CommentId::new(forest.max_id().map_or(0, CommentId::get) + 1 + offset)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Unknown ids are no-ops
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edit_and_delete_ignore_unknown_ids(forest in forest_strategy(), offset in 0u64..5, text in text_strategy()) {
        let id = missing_id(&forest, offset);
        prop_assert_eq!(ops::edit(&forest, id, &text), forest.clone());
        prop_assert_eq!(ops::delete(&forest, id), forest);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. Add
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn blank_add_is_a_no_op(forest in forest_strategy(), blank in "[ \t\n]{0,4}") {
        let mut ids = IdGenerator::seeded_from(&forest);
        prop_assert_eq!(ops::add(&forest, &blank, &mut ids), forest);
    }

    #[test]
    fn add_appends_one_leaf(forest in forest_strategy()) {
        let mut ids = IdGenerator::seeded_from(&forest);
        let next = ops::add(&forest, "hello", &mut ids);
        prop_assert_eq!(next.len(), forest.len() + 1);
        prop_assert_eq!(&next.roots()[..forest.len()], forest.roots());
        let last = next.roots().last().unwrap();
        prop_assert_eq!(last.text.as_str(), "hello");
        prop_assert!(last.is_leaf());
        prop_assert!(!forest.contains(last.id));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Edit is id-scoped
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edit_touches_only_its_target(forest in forest_strategy(), pick in any::<prop::sample::Index>(), text in text_strategy()) {
        prop_assume!(!forest.is_empty());
        let ids: Vec<CommentId> = forest.ids().collect();
        let target = ids[pick.index(ids.len())];
        let next = ops::edit(&forest, target, &text);

        let before: Vec<_> = forest.iter().map(|(d, c)| (d, c.id, c.text.clone(), c.replies.len())).collect();
        let after: Vec<_> = next.iter().map(|(d, c)| (d, c.id, c.text.clone(), c.replies.len())).collect();
        prop_assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(&after) {
            prop_assert_eq!(old.0, new.0);
            prop_assert_eq!(old.1, new.1);
            prop_assert_eq!(old.3, new.3);
            if new.1 == target {
                prop_assert_eq!(new.2.as_str(), text.as_str());
            } else {
                prop_assert_eq!(&old.2, &new.2);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Delete
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn delete_is_idempotent_and_drops_subtree(forest in forest_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!forest.is_empty());
        let ids: Vec<CommentId> = forest.ids().collect();
        let target = ids[pick.index(ids.len())];
        let subtree: Vec<CommentId> = forest
            .find(target)
            .map(|c| Forest::from(vec![c.clone()]).ids().collect())
            .unwrap_or_default();

        let once = ops::delete(&forest, target);
        prop_assert_eq!(ops::delete(&once, target), once.clone());
        prop_assert_eq!(once.total_count(), forest.total_count() - subtree.len());
        for id in subtree {
            prop_assert!(!once.contains(id));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Reply order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reply_appends_after_existing(forest in forest_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!forest.is_empty());
        let ids: Vec<CommentId> = forest.ids().collect();
        let parent = ids[pick.index(ids.len())];
        let mut gen_ids = IdGenerator::seeded_from(&forest);
        let (next, new_id) = ops::try_reply(&forest, parent, "re", &mut gen_ids).unwrap();

        let old_replies = &forest.find(parent).unwrap().replies;
        let new_replies = &next.find(parent).unwrap().replies;
        prop_assert_eq!(&new_replies[..old_replies.len()], old_replies.as_slice());
        prop_assert_eq!(new_replies.len(), old_replies.len() + 1);
        prop_assert_eq!(new_replies.last().map(|c| c.id), Some(new_id));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7-8. Store
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ids_stay_unique(actions in actions_strategy()) {
        let store = replay(actions);
        prop_assert!(store.forest().has_unique_ids());
    }

    #[test]
    fn rejected_actions_change_nothing(actions in actions_strategy(), extra in action_strategy()) {
        let mut store = replay(actions);
        let forest = store.forest().clone();
        let revision = store.revision();
        if !store.dispatch(extra).is_applied() {
            prop_assert_eq!(store.forest(), &forest);
            prop_assert_eq!(store.revision(), revision);
        } else {
            prop_assert_eq!(store.revision(), revision + 1);
        }
    }
}

use thread_core::{Action, CommentId, ThreadSession, ThreadStore, render_text};

fn id(raw: u64) -> CommentId {
    CommentId::new(raw)
}

fn discussion() -> ThreadStore {
    let mut store = ThreadStore::new();
    for action in [
        Action::add("Does the tree keep insertion order?"),
        Action::reply(id(1), "Yes, replies are appended."),
        Action::reply(id(2), "Even deep ones."),
        Action::add("Second thread"),
        Action::reply(id(1), "Another answer"),
    ] {
        assert!(store.dispatch(action).is_applied());
    }
    store
}

#[test]
fn nested_outline_is_stable() {
    insta::assert_snapshot!(render_text(discussion().forest()), @r"
    - [#1] Does the tree keep insertion order?
      - [#2] Yes, replies are appended.
        - [#3] Even deep ones.
      - [#5] Another answer
    - [#4] Second thread
    ");
}

#[test]
fn outline_after_deleting_a_branch() {
    let mut store = discussion();
    store.delete(id(2)).unwrap();
    store.edit(id(4), "Second thread (edited)").unwrap();
    insta::assert_snapshot!(render_text(store.forest()), @r"
    - [#1] Does the tree keep insertion order?
      - [#5] Another answer
    - [#4] Second thread (edited)
    ");
}

#[test]
fn editing_through_the_session() {
    // [{1,"a",[{2,"b",[]}]}] edited at 2 becomes [{1,"a",[{2,"b2",[]}]}]
    let mut session = ThreadSession::new();
    session.set_composer("a");
    session.submit_composer().unwrap();
    session.begin_reply(id(1)).unwrap();
    session.update_reply_draft(id(1), "b").unwrap();
    session.save_reply(id(1)).unwrap();

    session.begin_edit(id(2)).unwrap();
    session.update_edit_draft(id(2), "b2").unwrap();
    session.save_edit(id(2)).unwrap();

    insta::assert_snapshot!(render_text(session.forest()), @r"
    - [#1] a
      - [#2] b2
    ");
    insta::assert_snapshot!(serde_json::to_string(session.forest()).unwrap(), @r#"[{"id":1,"text":"a","replies":[{"id":2,"text":"b2","replies":[]}]}]"#);
}

#[test]
fn multi_line_comments_stay_on_one_line() {
    let mut store = ThreadStore::new();
    let root = store.add("Steps:\n1. build\n2. test").unwrap();
    store.reply(root, "Windows line\r\nending").unwrap();
    insta::assert_snapshot!(render_text(store.forest()), @r"
    - [#1] Steps:\n1. build\n2. test
      - [#2] Windows line\r\nending
    ");
}

#[test]
fn empty_outline() {
    insta::assert_snapshot!(render_text(ThreadStore::new().forest()), @"(no comments yet)");
}

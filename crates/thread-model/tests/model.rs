//! Tests for thread-model types.

use thread_model::{Comment, CommentId, Forest, ThreadError};

#[test]
fn forest_json_round_trips_nested_replies() {
    let json = r#"[
        {"id": 1, "text": "a", "replies": [
            {"id": 2, "text": "b", "replies": []}
        ]},
        {"id": 3, "text": "", "replies": []}
    ]"#;
    let forest: Forest = serde_json::from_str(json).expect("parse forest");

    assert_eq!(forest.len(), 2);
    assert_eq!(forest.total_count(), 3);
    assert_eq!(forest.roots()[0].replies[0].text, "b");
    // Empty text is a valid stored value.
    assert_eq!(forest.find(CommentId::new(3)).unwrap().text, "");
}

#[test]
fn ids_are_listed_in_display_order() {
    let forest: Forest = vec![
        Comment::with_replies(
            CommentId::new(10),
            "root",
            vec![Comment::new(CommentId::new(4), "child")],
        ),
        Comment::new(CommentId::new(2), "second root"),
    ]
    .into_iter()
    .collect();

    let ids: Vec<u64> = forest.ids().map(CommentId::get).collect();
    assert_eq!(ids, vec![10, 4, 2]);
}

#[test]
fn error_messages_name_the_id() {
    let err = ThreadError::NotFound {
        id: CommentId::new(12),
    };
    assert_eq!(err.to_string(), "no comment with id 12");
    assert!(err.is_not_found());
    assert!(ThreadError::EmptyText.is_empty_text());
}

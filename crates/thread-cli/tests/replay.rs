//! Integration tests for script loading and replay output.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use thread_cli::replay::{OutputFormat, load_forest, load_script, render, replay};
use thread_core::Forest;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const SCRIPT: &str = r#"[
    {"op": "add", "text": "Release notes draft"},
    {"op": "reply", "parent": 1, "text": "Typo in the second paragraph"},
    {"op": "reply", "parent": 2, "text": "Fixed"},
    {"op": "add", "text": "   "},
    {"op": "add", "text": "Ship it?"},
    {"op": "edit", "id": 5, "text": "unknown"},
    {"op": "reply", "parent": 4, "text": "After CI"},
    {"op": "delete", "id": 3}
]"#;

#[test]
fn replay_script_to_text_outline() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "script.json", SCRIPT);

    let report = replay(Forest::new(), load_script(&script).unwrap()).unwrap();

    assert_eq!(report.applied_count(), 6);
    let rejected: Vec<_> = report
        .rejections()
        .map(|s| (s.index, s.outcome.rejection().unwrap().to_string()))
        .collect();
    assert_eq!(
        rejected,
        vec![
            (4, "comment text is empty".to_owned()),
            (6, "no comment with id 5".to_owned()),
        ]
    );
    insta::assert_snapshot!(render(&report.forest, OutputFormat::Text).unwrap(), @r"
    - [#1] Release notes draft
      - [#2] Typo in the second paragraph
    - [#4] Ship it?
      - [#5] After CI
    ");
}

#[test]
fn replay_on_seed_forest_to_json() {
    let dir = TempDir::new().unwrap();
    let seed = write(
        &dir,
        "seed.json",
        r#"[{"id": 10, "text": "Existing", "replies": [{"id": 11, "text": "Old reply"}]}]"#,
    );
    let script = write(
        &dir,
        "script.json",
        r#"[{"op": "reply", "parent": 10, "text": "New reply"}, {"op": "delete", "id": 11}]"#,
    );

    let report = replay(load_forest(&seed).unwrap(), load_script(&script).unwrap()).unwrap();

    assert!(!report.has_rejections());
    insta::assert_snapshot!(render(&report.forest, OutputFormat::Json).unwrap(), @r#"
    [
      {
        "id": 10,
        "text": "Existing",
        "replies": [
          {
            "id": 12,
            "text": "New reply",
            "replies": []
          }
        ]
      }
    ]
    "#);
}

#[test]
fn seed_with_duplicate_ids_is_rejected() {
    let dir = TempDir::new().unwrap();
    let seed = write(
        &dir,
        "seed.json",
        r#"[{"id": 1, "text": "a", "replies": [{"id": 1, "text": "b"}]}]"#,
    );

    let err = load_forest(&seed).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.starts_with("invalid forest"), "{chain}");
    assert!(chain.ends_with("comment id 1 appears more than once"), "{chain}");
}

#[test]
fn unknown_op_fails_to_parse() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "script.json", r#"[{"op": "move", "id": 1}]"#);

    let err = load_script(&script).unwrap_err();
    assert!(err.to_string().starts_with("parse script"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_forest(&path).unwrap_err();
    assert_eq!(err.to_string(), format!("read forest {}", path.display()));
}

#[test]
fn empty_forest_outline() {
    insta::assert_snapshot!(render(&Forest::new(), OutputFormat::Text).unwrap(), @"(no comments yet)");
}

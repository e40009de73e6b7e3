use crate::Category;
use crate::tests::note_at;

use googletest::prelude::*;

#[test]
fn given_new_note_when_created_then_not_edited() {
    let note = note_at("n1", None, "hi", Category::Work, 0);

    assert_that!(note.date_edited, none());
    assert_that!(note.is_edited(), eq(false));
}

#[test]
fn given_note_when_serialized_then_uses_camel_case_layout() {
    let note = note_at("n1", Some("Title"), "hi", Category::Study, 0);

    let json = serde_json::to_string(&note).unwrap();

    assert_that!(json, contains_substring("\"dateAdded\""));
    assert_that!(json, contains_substring("\"dateEdited\":null"));
    assert_that!(json, contains_substring("\"userId\":\"user-1\""));
    assert_that!(json, contains_substring("\"category\":\"Study\""));
}

#[test]
fn given_json_without_title_when_deserialized_then_title_absent() {
    let json = r#"{"id":"n1","content":"hi","category":"Work","dateAdded":"2026-01-05T15:04:00Z","dateEdited":null,"userId":"u1"}"#;

    let note: crate::Note = serde_json::from_str(json).unwrap();

    assert_that!(note.title, none());
    assert_that!(note.category, eq(Category::Work));
}

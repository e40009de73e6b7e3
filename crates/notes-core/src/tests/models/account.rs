use crate::Account;

use googletest::prelude::*;

fn alice() -> Account {
    Account::new(
        "acc-1".into(),
        "Alice@Example.com".into(),
        "alice".into(),
        "secret1".into(),
    )
}

#[test]
fn given_differently_cased_email_when_has_email_then_true() {
    assert_that!(alice().has_email("alice@EXAMPLE.COM"), eq(true));
}

#[test]
fn given_other_email_when_has_email_then_false() {
    assert_that!(alice().has_email("bob@example.com"), eq(false));
}

#[test]
fn given_account_when_debug_formatted_then_password_redacted() {
    let rendered = format!("{:?}", alice());

    assert_that!(rendered, contains_substring("<redacted>"));
    assert_that!(rendered, not(contains_substring("secret1")));
}

#[test]
fn given_stored_json_when_deserialized_then_fields_preserved() {
    let json = r#"{"id":"1700000000000","email":"a@x.com","username":"alice","password":"secret1"}"#;

    let account: Account = serde_json::from_str(json).unwrap();

    assert_that!(account.id, eq("1700000000000"));
    assert_that!(account.username, eq("alice"));
}

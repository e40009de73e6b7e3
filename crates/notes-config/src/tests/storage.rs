use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn given_absolute_storage_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("NOTES_STORAGE_PATH", "/etc/notes.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("NOTES_STORAGE_PATH", "../outside.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_storage_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("NOTES_STORAGE_PATH", "");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_nested_relative_path_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("NOTES_STORAGE_PATH", "data/notes.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

//! End-to-end tests for the `scaffold-test` binary.
//!
//! Each test runs the binary from inside a temporary project directory and
//! checks the files it leaves behind against golden fixtures.

use std::{fs, path::Path, process::Command};

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const TEST_WIDGET: &str = include_str!("fixtures/test_Widget.cpp");
const INCLUDE_WIDGET: &str = include_str!("fixtures/include_Widget.cpp");

fn scaffold(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scaffold-test"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_scaffolds_widget_end_to_end() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("widget.cpp"), "#include \"widget.h\"\n").unwrap();

    scaffold(temp.path())
        .arg("Widget")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating dir"))
        .stdout(predicate::str::contains("Creating file"))
        .stdout(predicate::str::contains("Adding include of the unit tests"));

    let test_file = temp.path().join("test").join("test_Widget.cpp");
    assert_eq!(fs::read_to_string(test_file).unwrap(), TEST_WIDGET);
    assert_eq!(
        fs::read_to_string(temp.path().join("widget.cpp")).unwrap(),
        format!("#include \"widget.h\"\n{INCLUDE_WIDGET}")
    );
}

#[test]
fn test_second_run_changes_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("widget.cpp"), "").unwrap();

    scaffold(temp.path()).arg("Widget").assert().success();
    let test_file = temp.path().join("test").join("test_Widget.cpp");
    fs::write(&test_file, "// edited by hand\n").unwrap();

    scaffold(temp.path())
        .arg("Widget")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists -- not creating it."))
        .stdout(predicate::str::contains("Adding include").not());

    assert_eq!(fs::read_to_string(&test_file).unwrap(), "// edited by hand\n");
    assert_eq!(
        fs::read_to_string(temp.path().join("widget.cpp")).unwrap(),
        INCLUDE_WIDGET
    );
}

#[test]
fn test_runs_from_inside_test_dir() {
    let temp = TempDir::new().unwrap();
    let test_dir = temp.path().join("test");
    fs::create_dir(&test_dir).unwrap();
    fs::write(temp.path().join("widget.cpp"), "").unwrap();

    scaffold(&test_dir)
        .arg("Widget")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating dir").not());

    assert_eq!(
        fs::read_to_string(test_dir.join("test_Widget.cpp")).unwrap(),
        TEST_WIDGET
    );
    assert!(!test_dir.join("test").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("widget.cpp")).unwrap(),
        INCLUDE_WIDGET
    );
}

#[test]
fn test_missing_source_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .arg("FooBar")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR:"))
        .stdout(predicate::str::contains("fooBar.cpp not found"));

    assert!(temp.path().join("test").join("test_FooBar.cpp").exists());
    assert!(!temp.path().join("fooBar.cpp").exists());
}

#[test]
fn test_single_letter_class() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("x.cpp"), "").unwrap();

    scaffold(temp.path()).arg("X").assert().success();

    let source = fs::read_to_string(temp.path().join("x.cpp")).unwrap();
    assert!(source.contains("#include \"test/test_X.cpp\""));
}

#[test]
fn test_missing_argument_fails() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("CLASS_NAME"));

    assert!(!temp.path().join("test").exists());
}

#[test]
fn test_invalid_class_name_fails() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path()).arg("../Escape").assert().failure();

    assert!(!temp.path().join("test").exists());
}

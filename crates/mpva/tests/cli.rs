//! CLI surface tests. These only exercise the paths that terminate
//! before any network call (usage and conflict), so they run offline.

use assert_cmd::Command;
use predicates::prelude::*;

fn mpva() -> Command {
    Command::cargo_bin("mpva").unwrap()
}

#[test]
fn missing_name_prints_usage_to_stdout() {
    mpva()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Please provide a name for your project.",
        ))
        .stdout(predicate::str::contains("mpva my-project"));
}

#[test]
fn existing_directory_reports_a_conflict() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("taken")).unwrap();
    std::fs::write(tmp.path().join("taken/keep.txt"), "keep").unwrap();

    mpva()
        .current_dir(tmp.path())
        .arg("taken")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "The 'taken' project already exists in the current directory.",
        ));

    // the pre-existing tree is untouched
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("taken/keep.txt")).unwrap(),
        "keep"
    );
}

#[test]
fn existing_file_reports_a_conflict_too() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("taken"), "a file").unwrap();

    mpva()
        .current_dir(tmp.path())
        .arg("taken")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("already exists"));
    assert!(tmp.path().join("taken").is_file());
}

#[test]
fn names_with_path_separators_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    mpva()
        .current_dir(tmp.path())
        .arg("nested/name")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("path separators"));
    assert!(!tmp.path().join("nested").exists());
}

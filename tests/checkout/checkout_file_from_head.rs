use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_file_from_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let file = dir.join("a").join("2.txt");

    write_file(FileSpec::new(file.clone(), "scribbled over".to_string()));
    run_gitlet_command(dir, &["checkout", "--", "a/2.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&file), "two");

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());
    assert!(status.contains("=== Staged Files ===\n\n"));
}

#[rstest]
fn checkout_file_missing_from_head_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["checkout", "--", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist in that commit."));
}

#[rstest]
fn checkout_file_outside_the_repository_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["checkout", "--", "../1.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("../1.txt is outside repository"));

    assert_eq!(read_file(&dir.join("1.txt")), "one");
}

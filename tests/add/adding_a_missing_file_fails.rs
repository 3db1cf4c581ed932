use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_a_missing_file_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist: missing.txt"));

    run_gitlet_command(init_repository_dir.path(), &["commit", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to the commit."));
}

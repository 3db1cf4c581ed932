use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_twice_fails(repository_dir: TempDir) {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A Gitlet version-control system already exists in the current directory.",
        ));
}

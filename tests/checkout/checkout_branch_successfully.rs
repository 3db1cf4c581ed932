use crate::common::command::{diverged_repository_dir, run_gitlet_command};
use crate::common::file::read_file;
use crate::common::stdout_of;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_successfully(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();

    run_gitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("f.txt")), "feature\n");
    assert_eq!(read_file(&dir.join("g.txt")), "feature only\n");
    assert!(!dir.join("m.txt").exists());
    assert_eq!(
        std::fs::read_to_string(dir.join(".gitlet").join("HEAD"))
            .expect("Failed to read HEAD")
            .trim(),
        "ref: refs/heads/feature"
    );

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());
    assert!(status.starts_with("=== Branches ===\n*feature\nmaster\n\n"));
}

#[rstest]
fn checkout_keeps_files_neither_commit_tracks(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    std::fs::write(dir.join("notes.txt"), "mine").expect("Failed to write notes");

    run_gitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("notes.txt")), "mine");
}

#[rstest]
fn checkout_current_branch_fails(diverged_repository_dir: TempDir) {
    run_gitlet_command(diverged_repository_dir.path(), &["checkout", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No need to checkout the current branch.",
        ));
}

#[rstest]
fn checkout_missing_branch_fails(diverged_repository_dir: TempDir) {
    run_gitlet_command(diverged_repository_dir.path(), &["checkout", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such branch exists."));
}

use crate::common::command::{diverged_repository_dir, head_commit_id, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_with_itself_fails(diverged_repository_dir: TempDir) {
    run_gitlet_command(diverged_repository_dir.path(), &["merge", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot merge a branch with itself."));
}

#[rstest]
fn merge_missing_branch_fails(diverged_repository_dir: TempDir) {
    run_gitlet_command(diverged_repository_dir.path(), &["merge", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such branch exists."));
}

#[rstest]
fn merge_with_uncommitted_changes_fails(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    let head = head_commit_id(dir);

    write_file(FileSpec::new(dir.join("pending.txt"), "pending".to_string()));
    run_gitlet_command(dir, &["add", "pending.txt"]).assert().success();

    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You have uncommitted changes."));

    assert_eq!(head_commit_id(dir), head);
    assert_eq!(read_file(&dir.join("f.txt")), "base\n");
}

#[rstest]
fn merge_with_untracked_file_in_the_way_fails(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    let head = head_commit_id(dir);

    std::fs::write(dir.join("g.txt"), "precious").expect("Failed to write g.txt");

    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There is an untracked file in the way"));

    assert_eq!(read_file(&dir.join("g.txt")), "precious");
    assert_eq!(read_file(&dir.join("f.txt")), "base\n");
    assert_eq!(head_commit_id(dir), head);
}

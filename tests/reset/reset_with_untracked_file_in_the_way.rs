use crate::common::command::{find_commits, diverged_repository_dir, head_commit_id, run_gitlet_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_with_untracked_file_in_the_way(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    let head = head_commit_id(dir);
    let feature_commit = find_commits(dir, "feature work").remove(0);

    std::fs::write(dir.join("g.txt"), "precious").expect("Failed to write g.txt");

    run_gitlet_command(dir, &["reset", &feature_commit])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There is an untracked file in the way"));

    assert_eq!(read_file(&dir.join("g.txt")), "precious");
    assert!(dir.join("m.txt").is_file());
    assert_eq!(head_commit_id(dir), head);
}

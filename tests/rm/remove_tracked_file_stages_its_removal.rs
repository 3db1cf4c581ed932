use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::stdout_of;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn remove_tracked_file_stages_its_removal(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["rm", "a/b/3.txt"]).assert().success();

    assert!(!dir.join("a").join("b").join("3.txt").exists());
    assert!(!dir.join("a").join("b").exists());

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());
    assert!(status.contains("=== Removed Files ===\na/b/3.txt\n\n"));

    gitlet_commit(dir, "Remove three").assert().success();

    run_gitlet_command(dir, &["checkout", "--", "a/b/3.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist in that commit."));

    Ok(())
}

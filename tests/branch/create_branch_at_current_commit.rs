use crate::common::command::{gitlet_commit, head_commit_id, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_at_current_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = head_commit_id(dir);

    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout("");

    let branch_ref = dir.join(".gitlet").join("refs").join("heads").join("feature");
    assert_eq!(
        std::fs::read_to_string(&branch_ref)
            .expect("Failed to read branch ref")
            .trim(),
        head
    );

    // creating a branch does not switch to it
    write_file(FileSpec::new(dir.join("1.txt"), "moved on".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();
    gitlet_commit(dir, "Master moves").assert().success();

    assert_eq!(
        std::fs::read_to_string(&branch_ref)
            .expect("Failed to read branch ref")
            .trim(),
        head
    );
}

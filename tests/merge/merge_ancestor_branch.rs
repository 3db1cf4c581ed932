use crate::common::command::{gitlet_commit, head_commit_id, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_ancestor_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "behind"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "newer".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();
    gitlet_commit(dir, "Move on").assert().success();
    let head = head_commit_id(dir);

    run_gitlet_command(dir, &["merge", "behind"])
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");

    assert_eq!(head_commit_id(dir), head);
}

use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::status(&["status"])]
#[case::log(&["log"])]
#[case::global_log(&["global-log"])]
#[case::commit(&["commit", "message"])]
#[case::branch(&["branch", "feature"])]
#[case::rm_branch(&["rm-branch", "feature"])]
#[case::merge(&["merge", "feature"])]
#[case::reset(&["reset", "abcdef"])]
#[case::find(&["find", "message"])]
fn commands_fail_outside_a_repository(repository_dir: TempDir, #[case] args: &[&str]) {
    run_gitlet_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Not in an initialized Gitlet directory.",
        ));
}

use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::starts_with_dot(".hidden")]
#[case::double_dot("a..b")]
#[case::ends_with_lock("topic.lock")]
#[case::contains_space("has space")]
fn create_branch_with_invalid_name(init_repository_dir: TempDir, #[case] name: &str) {
    run_gitlet_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid branch name"));
}

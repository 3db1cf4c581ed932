use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::existing_branch("feature")]
#[case::default_branch("master")]
fn create_duplicate_branch(init_repository_dir: TempDir, #[case] name: &str) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "feature"]).assert().success();

    run_gitlet_command(dir, &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));
}

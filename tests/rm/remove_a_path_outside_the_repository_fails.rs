use crate::common::command::{gitlet_commit, repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn remove_a_path_outside_the_repository_fails(repository_dir: TempDir) {
    let outer = repository_dir.path();
    let repo = outer.join("repo");
    std::fs::create_dir_all(&repo).expect("Failed to create repository dir");
    write_file(FileSpec::new(outer.join("precious.txt"), "keep me".to_string()));
    write_file(FileSpec::new(repo.join("inside.txt"), "inside".to_string()));

    run_gitlet_command(&repo, &["init"]).assert().success();
    run_gitlet_command(&repo, &["add", "inside.txt"])
        .assert()
        .success();
    gitlet_commit(&repo, "Inside only").assert().success();

    // the escaping path aborts the whole batch
    run_gitlet_command(&repo, &["rm", "inside.txt", "../precious.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "../precious.txt is outside repository",
        ));

    assert_eq!(read_file(&outer.join("precious.txt")), "keep me");
    assert!(repo.join("inside.txt").is_file());

    run_gitlet_command(&repo, &["checkout", "--", "../precious.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is outside repository"));

    assert_eq!(read_file(&outer.join("precious.txt")), "keep me");
}

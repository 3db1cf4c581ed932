use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn remove_directory_removes_tracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("a").join("staged.txt"), "staged".to_string()));
    run_gitlet_command(dir, &["add", "a/staged.txt"])
        .assert()
        .success();

    run_gitlet_command(dir, &["rm", "a"])
        .assert()
        .success()
        .stdout("");

    assert!(!dir.join("a").join("2.txt").exists());
    assert!(!dir.join("a").join("b").exists());
    assert!(dir.join("a").join("staged.txt").is_file());
    assert!(dir.join("1.txt").is_file());

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Removed Files ===\na/2.txt\na/b/3.txt\n\n"));
    assert!(status.contains("=== Untracked Files ===\na/staged.txt\n\n"));
}

#[rstest]
fn remove_directory_without_tracked_files_is_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("loose").join("x.txt"), "x".to_string()));

    run_gitlet_command(dir, &["rm", "loose"])
        .assert()
        .success()
        .stdout("No reason to remove the file: loose\n");

    assert!(dir.join("loose").join("x.txt").is_file());
}

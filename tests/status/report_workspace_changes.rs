use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn modifications_section(status: &str) -> String {
    status
        .split("=== Modifications Not Staged For Commit ===\n")
        .nth(1)
        .unwrap_or_default()
        .lines()
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[rstest]
fn report_deleted_tracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    delete_path(&dir.join("a"));

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());

    assert_eq!(
        modifications_section(&status),
        "a/2.txt (deleted)\na/b/3.txt (deleted)"
    );
}

#[rstest]
fn report_staged_files_changed_after_staging(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("new.txt"), "v1".to_string()));
    write_file(FileSpec::new(dir.join("gone.txt"), "v1".to_string()));
    run_gitlet_command(dir, &["add", "new.txt", "gone.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("new.txt"), "v2".to_string()));
    delete_path(&dir.join("gone.txt"));

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());

    assert_eq!(
        modifications_section(&status),
        "gone.txt (deleted)\nnew.txt (modified)"
    );
}

#[rstest]
fn print_nothing_when_no_files_are_changed(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());

    assert_eq!(modifications_section(&status), "");
    assert!(status.ends_with("=== Untracked Files ===\n\n"));
}

use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn adding_a_file_staged_for_removal_restores_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["rm", "1.txt"]).assert().success();
    assert!(!dir.join("1.txt").exists());

    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());
    assert!(status.contains("=== Removed Files ===\n\n"));
    assert!(status.contains("=== Staged Files ===\n\n"));

    Ok(())
}

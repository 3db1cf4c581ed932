use crate::common::command::{repository_dir, run_gitlet_command};
use crate::common::file::write_generated_files;
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_directories_recursively(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_gitlet_command(dir, &["init"]).assert().success();

    let top_level = write_generated_files(dir, 2);
    let nested = write_generated_files(&dir.join("src").join("nested"), 3);

    run_gitlet_command(dir, &["add", "."]).assert().success();

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());

    let mut expected = top_level
        .iter()
        .chain(nested.iter())
        .map(|file| {
            file.path
                .strip_prefix(dir)
                .expect("generated file outside the repository")
                .display()
                .to_string()
        })
        .collect::<Vec<_>>();
    expected.sort();

    let mut staged = status
        .split("=== Staged Files ===\n")
        .nth(1)
        .unwrap_or_default()
        .lines()
        .take_while(|line| !line.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    staged.sort();

    assert_eq!(staged, expected);
    assert!(!status.contains(".gitlet"));

    Ok(())
}

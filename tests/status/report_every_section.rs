use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_every_section(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "other"]).assert().success();

    write_file(FileSpec::new(dir.join("staged.txt"), "staged".to_string()));
    run_gitlet_command(dir, &["add", "staged.txt"]).assert().success();
    run_gitlet_command(dir, &["rm", "1.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("z.txt"), "untracked".to_string()));
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "modified".to_string()));

    let expected = "=== Branches ===\n*master\nother\n\n\
                    === Staged Files ===\nstaged.txt\n\n\
                    === Removed Files ===\n1.txt\n\n\
                    === Modifications Not Staged For Commit ===\na/2.txt (modified)\n\n\
                    === Untracked Files ===\nz.txt\n\n";
    let actual = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());

    assert_eq!(actual, expected);
}

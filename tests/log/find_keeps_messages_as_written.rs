use crate::common::command::{find_commits, gitlet_commit, head_commit_id, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::backslash_before_n("path C:\\new")]
#[case::surrounding_spaces("  padded message  ")]
#[case::multiple_lines("subject\n\nbody")]
fn find_keeps_messages_as_written(init_repository_dir: TempDir, #[case] message: &str) {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();
    gitlet_commit(dir, message).assert().success();

    assert_eq!(find_commits(dir, message), vec![head_commit_id(dir)]);

    let log = stdout_of(run_gitlet_command(dir, &["log"]).assert().success());
    assert!(log.contains(&format!("{message}\n\n===")));
}

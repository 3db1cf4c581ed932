use crate::common::command::{gitlet_commit, head_commit_id, repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

/// `f.txt` reads `split` at the split point, `head` on master and `target` on `other`
fn conflicting_history(dir: &Path, split: Option<&str>, head: Option<&str>, target: Option<&str>) {
    let file = dir.join("f.txt");
    run_gitlet_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("keep.txt"), "keep".to_string()));
    run_gitlet_command(dir, &["add", "keep.txt"]).assert().success();
    if let Some(content) = split {
        write_file(FileSpec::new(file.clone(), content.to_string()));
        run_gitlet_command(dir, &["add", "f.txt"]).assert().success();
    }
    gitlet_commit(dir, "split").assert().success();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();

    let commit_side = |content: Option<&str>, message: &str| {
        match content {
            Some(content) => {
                write_file(FileSpec::new(file.clone(), content.to_string()));
                run_gitlet_command(dir, &["add", "f.txt"]).assert().success();
            }
            None => {
                run_gitlet_command(dir, &["rm", "f.txt"]).assert().success();
            }
        }
        gitlet_commit(dir, message).assert().success();
    };

    commit_side(head, "head side");
    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_side(target, "target side");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
}

#[rstest]
fn merge_with_conflict(repository_dir: TempDir) {
    let dir = repository_dir.path();
    conflicting_history(dir, Some("X"), Some("Y"), Some("Z"));
    let head = head_commit_id(dir);

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("f.txt")),
        "<<<<<<< HEAD\nY\n=======\nZ\n>>>>>>>"
    );
    assert_eq!(read_file(&dir.join("keep.txt")), "keep");

    // the conflicted content is committed as part of the merge
    let merge_commit = head_commit_id(dir);
    assert_ne!(merge_commit, head);

    let status = stdout_of(run_gitlet_command(dir, &["status"]).assert().success());
    assert!(status.contains("=== Modifications Not Staged For Commit ===\n\n"));
}

#[rstest]
#[case::deleted_on_target(Some("X"), Some("Y"), None, "<<<<<<< HEAD\nY\n=======\n>>>>>>>")]
#[case::deleted_on_head(Some("X"), None, Some("Z"), "<<<<<<< HEAD\n=======\nZ\n>>>>>>>")]
#[case::added_on_both_sides(None, Some("Y\n"), Some("Z\n"), "<<<<<<< HEAD\nY\n=======\nZ\n>>>>>>>")]
fn merge_conflict_variants(
    repository_dir: TempDir,
    #[case] split: Option<&str>,
    #[case] head: Option<&str>,
    #[case] target: Option<&str>,
    #[case] expected: &str,
) {
    let dir = repository_dir.path();
    conflicting_history(dir, split, head, target);

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(read_file(&dir.join("f.txt")), expected);
}

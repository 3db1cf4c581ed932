use crate::common::command::{init_repository_dir, repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

// sha1("blob 11\0hello world")
const HELLO_WORLD_OID: &str = "95d09f2b10159347eece71399a7e2e907ea3df4f";

#[rstest]
fn hash_object_without_repository(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello world".to_string()));

    run_gitlet_command(dir, &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{HELLO_WORLD_OID}\n")));

    assert!(!dir.join(".gitlet").exists());
}

#[rstest]
fn write_blob_object_successfully(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello world".to_string()));

    run_gitlet_command(dir, &["hash-object", "-w", "hello.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{HELLO_WORLD_OID}\n")));

    let object_path = dir
        .join(".gitlet")
        .join("objects")
        .join(&HELLO_WORLD_OID[..2])
        .join(&HELLO_WORLD_OID[2..]);
    assert_eq!(
        std::fs::read(object_path).expect("Failed to read object"),
        b"blob 11\0hello world"
    );

    let content = stdout_of(
        run_gitlet_command(dir, &["cat-file", "-p", HELLO_WORLD_OID])
            .assert()
            .success(),
    );
    assert_eq!(content, "hello world");
}

//! Error kinds surfaced to the caller
//!
//! Every command returns `anyhow::Result`; the failures a user can act on are raised as a
//! [`GitletError`] so callers can `downcast_ref` them. Store-level variants
//! (`NotFound`, `CorruptObject`) mean the object database was tampered with or a bug wrote
//! something unreadable.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GitletError {
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("No changes added to the commit.")]
    EmptyCommit,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{} is outside repository", .0.display())]
    OutsideRepository(PathBuf),

    #[error("No reason to remove the file: {}", .0.display())]
    NotTrackedOrStaged(PathBuf),

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("No commit with that id exists.")]
    UnknownId,

    #[error("Ambiguous commit id {0}; please enter more digits.")]
    AmbiguousId(String),

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error(
        "There is an untracked file in the way; delete it, or add and commit it first.\n{}",
        format_paths(.0)
    )]
    WouldOverwriteUntracked(Vec<PathBuf>),

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("No such branch exists.")]
    BranchNotFound,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("Object {0} not found")]
    NotFound(String),

    #[error("Object {oid} is corrupt: {reason}")]
    CorruptObject { oid: String, reason: String },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("\t{}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

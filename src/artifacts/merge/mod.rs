//! Three-way merge
//!
//! - `split_point`: common ancestor of the two branch heads
//! - `resolution`: per-path decision from the split, head and target versions
//! - `conflict`: content written for conflicting paths

pub mod conflict;
pub mod resolution;
pub mod split_point;

use crate::artifacts::objects::object_id::ObjectId;

/// How a merge ended when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The target branch head is the split point: nothing to merge
    GivenBranchIsAncestor,
    /// The current head is the split point: the target branch was checked out instead
    FastForwarded,
    /// Every path resolved to the head version, so no merge commit was made
    NoChanges,
    /// A merge commit was created; `conflict` is set when some path was written with markers
    Merged { commit: ObjectId, conflict: bool },
}

impl MergeOutcome {
    /// Line reported to the user, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            MergeOutcome::GivenBranchIsAncestor => {
                Some("Given branch is an ancestor of the current branch.")
            }
            MergeOutcome::FastForwarded => Some("Current branch fast-forwarded."),
            MergeOutcome::NoChanges => Some("No changes added to the commit."),
            MergeOutcome::Merged { conflict: true, .. } => Some("Encountered a merge conflict."),
            MergeOutcome::Merged { conflict: false, .. } => None,
        }
    }
}

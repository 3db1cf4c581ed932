//! Per-path merge decision table
//!
//! Each path in the union of the split, head and target trees is classified from the blob
//! ids the three snapshots record for it (`None` when the snapshot lacks the path):
//!
//! | split | head      | target              | action       |
//! |-------|-----------|---------------------|--------------|
//! | S     | S         | T != S              | take target  |
//! | -     | -         | T                   | take target  |
//! | S     | S         | -                   | remove       |
//! | S     | H != S    | T != S, T != H      | conflict     |
//! | S     | H != S    | -                   | conflict     |
//! | S     | -         | T != S              | conflict     |
//! | -     | H         | T != H              | conflict     |
//!
//! Everything else keeps the head version. The rows are mutually exclusive.

use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    /// Nothing to do: the head version already is the merge result
    Keep,
    /// Write the target version and stage it for addition
    TakeTarget,
    /// Delete the working file and stage it for removal
    Remove,
    /// Write both versions between conflict markers and stage the result
    Conflict,
}

pub fn classify(
    split: Option<&ObjectId>,
    head: Option<&ObjectId>,
    target: Option<&ObjectId>,
) -> MergeAction {
    match (split, head, target) {
        (Some(s), Some(h), Some(t)) if h == s && t != s => MergeAction::TakeTarget,
        (None, None, Some(_)) => MergeAction::TakeTarget,
        (Some(s), Some(h), None) if h == s => MergeAction::Remove,
        (Some(s), Some(h), Some(t)) if h != s && t != s && h != t => MergeAction::Conflict,
        (Some(s), Some(h), None) if h != s => MergeAction::Conflict,
        (Some(s), None, Some(t)) if t != s => MergeAction::Conflict,
        (None, Some(h), Some(t)) if h != t => MergeAction::Conflict,
        _ => MergeAction::Keep,
    }
}

//! Working tree status inspection
//!
//! Compares the workspace against the staging area and the current commit's tree.
//!
//! - `file_change`: kinds of unstaged workspace changes
//! - `status_info`: the computed report, one set per `status` section

pub mod file_change;
pub mod status_info;

//! Commit history display
//!
//! - `log_record`: entries of the append-only commit journal (`logs/HEAD`)
//!
//! Every history listing (`log`, `global-log`) prints commits in the same block format:
//!
//! ```text
//! ===
//! commit <digest>
//! Merge: <7 hex> <7 hex>      (merge commits only)
//! Date: <readable timestamp>
//! <message>
//!
//! ```

pub mod log_record;

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

pub fn format_commit(oid: &ObjectId, commit: &Commit) -> String {
    let mut block = format!("===\ncommit {oid}\n");

    if commit.is_merge() {
        let parents = commit
            .parents()
            .iter()
            .map(|parent| parent.to_short_oid())
            .collect::<Vec<_>>()
            .join(" ");
        block.push_str(&format!("Merge: {parents}\n"));
    }

    block.push_str(&format!(
        "Date: {}\n{}\n",
        commit.readable_timestamp(),
        commit.message()
    ));

    block
}

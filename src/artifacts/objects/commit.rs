//! Commit object
//!
//! Commits are immutable nodes of the history DAG. They contain:
//! - A tree object ID (snapshot of every tracked file)
//! - Parent commit ID(s): none for the initial commit, two for merges
//! - A timestamp (stored as Unix seconds, always UTC)
//! - The commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! <unix-seconds> +0000
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::io::BufRead;

/// Environment variable overriding the timestamp of new commits
pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";

const TIMEZONE_SUFFIX: &str = " +0000";

/// Commit object
///
/// Holds only ids of the objects it refers to; the history is walked by loading
/// parents back from the database.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for the initial commit, two for merge commits)
    parents: Vec<ObjectId>,
    /// Tree object ID representing the snapshot
    tree_oid: ObjectId,
    timestamp: DateTime<Utc>,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        tree_oid: ObjectId,
        timestamp: DateTime<Utc>,
        message: String,
    ) -> Self {
        Commit {
            parents,
            tree_oid,
            timestamp,
            message,
        }
    }

    /// The root of every history: empty tree, no parents, Unix epoch
    pub fn initial(message: &str) -> Self {
        Commit::new(
            Vec::new(),
            ObjectId::empty_tree(),
            DateTime::<Utc>::UNIX_EPOCH,
            message.to_string(),
        )
    }

    /// Load the timestamp for a new commit from the environment
    ///
    /// Reads `GITLET_COMMIT_DATE` (`%Y-%m-%d %H:%M:%S %z` or RFC 2822).
    /// If it is unset or unparsable, the current time is used.
    pub fn timestamp_from_env() -> DateTime<Utc> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_rfc2822(&date_str)
                    .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .ok()
            })
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .unwrap_or_else(Utc::now)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent, followed by `log` and the split-point search
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// String like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    fn body(&self) -> String {
        let mut body = format!("tree {}\n", self.tree_oid);
        for parent in &self.parents {
            body.push_str(&format!("parent {parent}\n"));
        }
        body.push_str(&format!("{}{TIMEZONE_SUFFIX}\n", self.timestamp.timestamp()));
        body.push_str(&self.message);
        body.push('\n');

        body
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        frame(self.object_type(), self.body().as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let (tree_line, mut rest) = content
            .split_once('\n')
            .context("Invalid commit object: missing tree line")?;
        let tree_oid = tree_line
            .strip_prefix("tree ")
            .context("Invalid commit object: invalid tree line")?;
        let tree_oid = ObjectId::try_parse(tree_oid.to_string())?;

        let mut parents = Vec::new();
        let timestamp_line = loop {
            let (line, remainder) = rest
                .split_once('\n')
                .context("Invalid commit object: missing timestamp line")?;
            rest = remainder;

            match line.strip_prefix("parent ") {
                Some(parent_oid) => parents.push(ObjectId::try_parse(parent_oid.to_string())?),
                None => break line,
            }
        };

        let seconds = timestamp_line
            .strip_suffix(TIMEZONE_SUFFIX)
            .context("Invalid commit object: invalid timestamp line")?
            .parse::<i64>()
            .context("Invalid commit object: invalid timestamp")?;
        let timestamp = DateTime::<Utc>::from_timestamp(seconds, 0)
            .context("Invalid commit object: timestamp out of range")?;

        let message = rest
            .strip_suffix('\n')
            .context("Invalid commit object: unterminated message")?;

        Ok(Self::new(parents, tree_oid, timestamp, message.to_string()))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        self.body()
    }
}

//! Commit journal (`logs/HEAD`)
//!
//! Append-only text file with one record per commit ever created, in creation order.
//! `global-log` and `find` read it instead of walking every branch.

use crate::artifacts::log::log_record::LogRecord;
use anyhow::Context;
use derive_new::new;
use std::io::Write;
use std::path::Path;

#[derive(Debug, new)]
pub struct Journal {
    /// Path to the journal file (`.gitlet/logs/HEAD`)
    path: Box<Path>,
}

impl Journal {
    pub fn append(&self, record: &LogRecord) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut journal = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open journal {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut journal, file_guard::Lock::Exclusive, 0, 1)?;
        std::ops::DerefMut::deref_mut(&mut lock).write_all(record.to_line().as_bytes())?;

        tracing::trace!(oid = %record.oid(), "journal record appended");

        Ok(())
    }

    pub fn records(&self) -> anyhow::Result<Vec<LogRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read journal {}", self.path.display()))?;

        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(LogRecord::parse_line)
            .collect()
    }
}

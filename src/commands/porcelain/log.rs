use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::log::format_commit;
use std::io::Write;

impl Repository {
    /// First-parent history of the current branch, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut curr_commit_oid = Some(self.refs().read_head()?);

        while let Some(commit_oid) = curr_commit_oid {
            let commit = self.database().parse_object_as_commit(&commit_oid)?;

            write!(self.writer(), "{}", format_commit(&commit_oid, &commit))?;
            writeln!(self.writer())?;

            curr_commit_oid = commit.parent().cloned();
        }

        Ok(())
    }

    /// Every commit ever made, in creation order
    pub fn global_log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        for record in self.journal().records()? {
            let commit = self.database().parse_object_as_commit(record.oid())?;

            write!(self.writer(), "{}", format_commit(record.oid(), &commit))?;
            writeln!(self.writer())?;
        }

        Ok(())
    }

    /// Ids of all commits with exactly this message
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let matches = self
            .journal()
            .records()?
            .into_iter()
            .filter(|record| record.message() == message)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(GitletError::NoCommitWithMessage.into());
        }

        for record in matches {
            writeln!(self.writer(), "{}", record.oid())?;
        }

        Ok(())
    }
}

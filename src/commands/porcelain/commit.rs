use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use std::io::Write;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        if message.trim().is_empty() {
            return Err(GitletError::EmptyMessage.into());
        }

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        if index.is_clean() {
            return Err(GitletError::EmptyCommit.into());
        }

        let parent = self.refs().read_head()?;
        let commit_id = self.write_commit(&mut index, vec![parent], message.to_string())?;

        writeln!(
            self.writer(),
            "[{} {}] {}",
            self.refs().current_branch()?,
            commit_id.to_short_oid(),
            message
        )?;

        Ok(())
    }
}

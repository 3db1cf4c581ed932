use crate::areas::repository::Repository;

impl Repository {
    /// Check out every file of a commit and move the current branch to it
    pub async fn reset(&mut self, commit: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let target_oid = self.database().resolve_commit(commit)?;
        let current_oid = self.refs().read_head()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        self.migrate_workspace(&current_oid, &target_oid)?;
        self.refs().update_head(&target_oid)?;

        index.clear();
        index.write_updates()?;

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

impl Repository {
    /// Restore one file from the current commit; the restored version is not staged
    pub async fn checkout_file(&mut self, file: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head_oid = self.refs().read_head()?;
        self.restore_file(&head_oid, file)
    }

    /// Restore one file from the commit `commit` (full or abbreviated id) names
    pub async fn checkout_commit_file(&mut self, commit: &str, file: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let commit_oid = self.database().resolve_commit(commit)?;
        self.restore_file(&commit_oid, file)
    }

    /// Switch the workspace and HEAD to another branch
    pub async fn checkout_branch(&mut self, target: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let target_branch = BranchName::try_parse(target.to_string())
            .map_err(|_| GitletError::BranchNotFound)?;

        if self.refs().is_current_branch(&target_branch)? {
            return Err(GitletError::AlreadyOnBranch.into());
        }

        let target_oid = self.refs().read_branch(&target_branch)?;
        self.switch_to_branch(&target_branch, &target_oid).await
    }

    /// Migrate the workspace to `target_oid`, point HEAD at `target_branch` and clear the index
    pub(crate) async fn switch_to_branch(
        &self,
        target_branch: &BranchName,
        target_oid: &ObjectId,
    ) -> anyhow::Result<()> {
        let current_oid = self.refs().read_head()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        self.migrate_workspace(&current_oid, target_oid)?;
        self.refs().set_head(target_branch)?;

        index.clear();
        index.write_updates()?;

        Ok(())
    }

    fn restore_file(&self, commit_oid: &ObjectId, file: &str) -> anyhow::Result<()> {
        let path = self.workspace().relative_path(Path::new(file))?;
        let tree = self.database().commit_tree(commit_oid)?;

        let blob_oid = tree.get(&path).ok_or(GitletError::FileNotInCommit)?;
        let blob = self.database().parse_object_as_blob(blob_oid)?;

        self.workspace().write_file(&path, blob.content())?;
        tracing::debug!(path = %path.display(), commit = %commit_oid, "file restored");

        Ok(())
    }
}

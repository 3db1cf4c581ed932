use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::GitletError;

impl Repository {
    /// Create a branch at the current commit without switching to it
    pub async fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let source_oid = self.refs().read_head()?;

        self.refs().create_branch(&branch_name, &source_oid)?;

        Ok(())
    }

    /// Delete a branch pointer; its commits stay in the store
    pub async fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branch_name =
            BranchName::try_parse(branch_name.to_string()).map_err(|_| GitletError::BranchNotFound)?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(GitletError::CannotRemoveCurrentBranch.into());
        }

        self.refs().delete_branch(&branch_name)?;

        Ok(())
    }
}

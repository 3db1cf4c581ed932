use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use std::fs;
use std::io::Write;

pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(GitletError::AlreadyInitialized.into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .gitlet/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .gitlet/refs/heads directory")?;

        let initial_commit = Commit::initial(INITIAL_COMMIT_MESSAGE);
        let initial_commit_id = self
            .record_commit(&initial_commit)
            .context("Failed to write the initial commit")?;

        let default_branch = BranchName::default_branch();
        self.refs()
            .create_branch(&default_branch, &initial_commit_id)
            .context("Failed to create the default branch")?;
        self.refs()
            .set_head(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        writeln!(
            self.writer(),
            "Initialized empty Gitlet repository in {}",
            self.control_path().display()
        )?;

        Ok(())
    }
}

//! Branch references and HEAD
//!
//! Branches are small text files under `refs/heads/` holding the 40 hex digest of the
//! branch tip. HEAD is always symbolic: `ref: refs/heads/<branch>`.
//!
//! Every update writes a temporary file next to the target under an exclusive lock and
//! renames it into place, so a reader sees either the old or the new value.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (`.gitlet`)
    path: Box<Path>,
}

impl Refs {
    /// Name of the branch HEAD points at
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content.trim());
        match symref_match {
            Some(captures) => BranchName::try_parse(captures[1].to_string()),
            None => anyhow::bail!("HEAD is not a symbolic reference: {}", content.trim()),
        }
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.current_branch()? == branch_name)
    }

    /// Commit the current branch points at
    pub fn read_head(&self) -> anyhow::Result<ObjectId> {
        self.read_branch(&self.current_branch()?)
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<ObjectId> {
        let branch_path = self.branch_path(branch_name);

        if !branch_path.is_file() {
            return Err(GitletError::BranchNotFound.into());
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;

        ObjectId::try_parse(content.trim().to_string())
    }

    /// Move the current branch to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_branch(&self.current_branch()?, oid)
    }

    pub fn update_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(&self.branch_path(branch_name), oid.as_ref())?;
        tracing::debug!(branch = %branch_name, %oid, "branch updated");

        Ok(())
    }

    /// Point HEAD at another branch
    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(
            &self.head_path(),
            &format!("ref: refs/heads/{}", branch_name),
        )?;
        tracing::debug!(branch = %branch_name, "HEAD moved");

        Ok(())
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(GitletError::BranchExists.into());
        }

        self.update_branch(name, source_oid)
    }

    /// Delete a branch ref, leaving every commit it reached in the store
    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let oid = self.read_branch(name)?;
        let branch_path = self.branch_path(name);

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;
        tracing::debug!(branch = %name, %oid, "branch deleted");

        Ok(oid)
    }

    /// All branches, sorted by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path.to_str()?.replace('\\', "/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        let parent = path.parent().with_context(|| {
            format!("failed to create parent directories for ref file at {:?}", path)
        })?;
        std::fs::create_dir_all(parent)?;

        let temp_path = parent.join(format!(".ref-{}.tmp", rand::random::<u32>()));
        {
            let mut temp_file = std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&temp_path)
                .with_context(|| format!("failed to open ref file at {:?}", temp_path))?;
            let mut lock = file_guard::lock(&mut temp_file, Lock::Exclusive, 0, 1)?;
            lock.deref_mut().write_all(raw_ref.as_bytes())?;
            lock.deref_mut().sync_all()?;
        }

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("failed to replace ref file at {:?}", path))?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}

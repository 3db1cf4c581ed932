//! Working directory migration between two commit snapshots
//!
//! A migration moves the workspace from the tree of the current commit to the tree of a
//! target commit:
//!
//! 1. Files tracked by the current commit but absent from the target are deleted
//! 2. Every file of the target tree is written out
//!
//! Before touching anything it checks for untracked files in the way: files present in the
//! workspace, not tracked by the current commit, that the target commit would write. Any
//! such file aborts the migration with the workspace left as it was. Files that neither
//! commit tracks are never deleted.

use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// File only the target tracks
    Add,
    /// File only the current commit tracks
    Delete,
    /// File both commits track; rewritten from the target
    Modify,
}

pub type ActionsSet = HashMap<ActionType, BTreeSet<PathBuf>>;

pub struct Migration<'r> {
    repository: &'r Repository,
    current: Tree,
    target: Tree,
    actions: ActionsSet,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, current: Tree, target: Tree) -> Self {
        let mut actions = HashMap::from([
            (ActionType::Add, BTreeSet::new()),
            (ActionType::Delete, BTreeSet::new()),
            (ActionType::Modify, BTreeSet::new()),
        ]);

        for path in current.paths() {
            let action = if target.contains(path) {
                ActionType::Modify
            } else {
                ActionType::Delete
            };
            actions.entry(action).or_default().insert(path.clone());
        }

        for path in target.paths().filter(|path| !current.contains(path)) {
            actions
                .entry(ActionType::Add)
                .or_default()
                .insert(path.clone());
        }

        Migration {
            repository,
            current,
            target,
            actions,
        }
    }

    pub fn paths_for(&self, action: ActionType) -> impl Iterator<Item = &PathBuf> {
        self.actions.get(&action).into_iter().flatten()
    }

    /// Untracked workspace files the target tree would overwrite
    pub fn untracked_in_the_way(&self) -> Vec<PathBuf> {
        untracked_in_the_way(self.repository, &self.current, &self.target)
    }

    pub fn load_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let oid = self
            .target
            .get(path)
            .with_context(|| format!("{} is not part of the target tree", path.display()))?;

        self.repository.database().parse_object_as_blob(oid)
    }

    /// Check for untracked files in the way, then rewrite the workspace
    pub fn apply_changes(&self) -> anyhow::Result<()> {
        let in_the_way = self.untracked_in_the_way();

        if !in_the_way.is_empty() {
            return Err(GitletError::WouldOverwriteUntracked(in_the_way).into());
        }

        self.repository.workspace().apply_migration(self)?;
        tracing::debug!(
            added = self.actions[&ActionType::Add].len(),
            deleted = self.actions[&ActionType::Delete].len(),
            rewritten = self.actions[&ActionType::Modify].len(),
            "workspace migrated"
        );

        Ok(())
    }
}

/// Files present in the workspace, untracked by `current` and tracked by `target`
pub fn untracked_in_the_way(repository: &Repository, current: &Tree, target: &Tree) -> Vec<PathBuf> {
    target
        .paths()
        .filter(|path| !current.contains(path))
        .filter(|path| repository.workspace().exists(path))
        .cloned()
        .collect()
}

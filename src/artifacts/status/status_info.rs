use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) current_branch: BranchName,
    pub(crate) branches: Vec<BranchName>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let head_tree = self.repository.head_tree()?;

        let workspace_files = self
            .repository
            .workspace()
            .list_files(None)?
            .into_iter()
            .collect::<FileSet>();

        let mut workspace_changeset = ChangeSet::new();
        self.check_head_tree(&head_tree, &workspace_files, index, &mut workspace_changeset)?;
        self.check_staged_files(&workspace_files, index, &mut workspace_changeset)?;

        let untracked_files = workspace_files
            .iter()
            .filter(|path| {
                let untracked = !index.is_staged_for_addition(path) && !head_tree.contains(path);
                untracked || index.is_staged_for_removal(path)
            })
            .cloned()
            .collect::<FileSet>();

        Ok(StatusInfo {
            current_branch: refs.current_branch()?,
            branches: refs.list_branches()?,
            staged_files: index.additions().keys().cloned().collect(),
            removed_files: index.removals().clone(),
            workspace_changeset,
            untracked_files,
        })
    }

    // Files tracked by the current commit and not staged either way
    fn check_head_tree(
        &self,
        head_tree: &Tree,
        workspace_files: &FileSet,
        index: &Index,
        changeset: &mut ChangeSet,
    ) -> anyhow::Result<()> {
        for (path, oid) in head_tree.entries() {
            if index.is_staged_for_addition(path) || index.is_staged_for_removal(path) {
                continue;
            }

            if !workspace_files.contains(path) {
                changeset.insert(path.clone(), WorkspaceChangeType::Deleted);
            } else if self.is_content_changed(path, oid)? {
                changeset.insert(path.clone(), WorkspaceChangeType::Modified);
            }
        }

        Ok(())
    }

    fn check_staged_files(
        &self,
        workspace_files: &FileSet,
        index: &Index,
        changeset: &mut ChangeSet,
    ) -> anyhow::Result<()> {
        for (path, oid) in index.additions() {
            if !workspace_files.contains(path) {
                changeset.insert(path.clone(), WorkspaceChangeType::Deleted);
            } else if self.is_content_changed(path, oid)? {
                changeset.insert(path.clone(), WorkspaceChangeType::Modified);
            }
        }

        Ok(())
    }

    fn is_content_changed(&self, path: &Path, oid: &ObjectId) -> anyhow::Result<bool> {
        Ok(&self.repository.workspace_oid(path)? != oid)
    }
}

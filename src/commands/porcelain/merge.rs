use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::untracked_in_the_way;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::conflict::conflict_content;
use crate::artifacts::merge::resolution::{MergeAction, classify};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub async fn merge(&mut self, target: &str) -> anyhow::Result<MergeOutcome> {
        self.ensure_initialized()?;

        let current_branch = self.refs().current_branch()?;
        let target_branch =
            BranchName::try_parse(target.to_string()).map_err(|_| GitletError::BranchNotFound)?;

        if current_branch == target_branch {
            return Err(GitletError::SelfMerge.into());
        }

        let target_oid = self.refs().read_branch(&target_branch)?;
        let head_oid = self.refs().read_head()?;

        let split_oid = {
            let database = self.database();
            let finder = SplitPointFinder::new(|oid: &ObjectId| {
                Ok(database.parse_object_as_commit(oid)?.parent().cloned())
            });

            finder
                .find(&head_oid, &target_oid)?
                .context("no common ancestor found between HEAD and target")?
        };

        let outcome = if split_oid == target_oid {
            MergeOutcome::GivenBranchIsAncestor
        } else if split_oid == head_oid {
            self.switch_to_branch(&target_branch, &target_oid).await?;
            MergeOutcome::FastForwarded
        } else {
            let message = format!("Merged {} into {}.", target_branch, current_branch);
            self.three_way_merge(&split_oid, &head_oid, &target_oid, message)
                .await?
        };

        if let Some(message) = outcome.message() {
            writeln!(self.writer(), "{message}")?;
        }

        Ok(outcome)
    }

    async fn three_way_merge(
        &self,
        split_oid: &ObjectId,
        head_oid: &ObjectId,
        target_oid: &ObjectId,
        message: String,
    ) -> anyhow::Result<MergeOutcome> {
        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        if !index.is_clean() {
            return Err(GitletError::UncommittedChanges.into());
        }

        let split_tree = self.database().commit_tree(split_oid)?;
        let head_tree = self.database().commit_tree(head_oid)?;
        let target_tree = self.database().commit_tree(target_oid)?;

        let in_the_way = untracked_in_the_way(self, &head_tree, &target_tree);
        if !in_the_way.is_empty() {
            return Err(GitletError::WouldOverwriteUntracked(in_the_way).into());
        }

        let paths = split_tree
            .paths()
            .chain(head_tree.paths())
            .chain(target_tree.paths())
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut conflict = false;
        for path in paths {
            let action = classify(
                split_tree.get(&path),
                head_tree.get(&path),
                target_tree.get(&path),
            );
            tracing::debug!(path = %path.display(), ?action, "merge decision");

            conflict |= action == MergeAction::Conflict;
            self.apply_merge_action(action, &path, &head_tree, &target_tree, &mut index)?;
        }

        if index.is_clean() {
            index.write_updates()?;
            return Ok(MergeOutcome::NoChanges);
        }

        let parents = vec![head_oid.clone(), target_oid.clone()];
        let commit = self.write_commit(&mut index, parents, message)?;

        Ok(MergeOutcome::Merged { commit, conflict })
    }

    fn apply_merge_action(
        &self,
        action: MergeAction,
        path: &Path,
        head_tree: &Tree,
        target_tree: &Tree,
        index: &mut Index,
    ) -> anyhow::Result<()> {
        match action {
            MergeAction::Keep => {}
            MergeAction::TakeTarget => {
                let oid = target_tree
                    .get(path)
                    .with_context(|| format!("{} missing from target tree", path.display()))?;
                let blob = self.database().parse_object_as_blob(oid)?;

                self.workspace().write_file(path, blob.content())?;
                index.stage_for_addition(path.to_path_buf(), oid.clone());
            }
            MergeAction::Remove => {
                self.workspace().remove_file(path)?;
                index.stage_for_removal(path.to_path_buf());
            }
            MergeAction::Conflict => {
                let head_content = self.blob_content(head_tree.get(path))?;
                let target_content = self.blob_content(target_tree.get(path))?;

                let merged = Blob::new(conflict_content(
                    head_content.as_deref(),
                    target_content.as_deref(),
                ));
                let merged_oid = self.database().store(&merged)?;

                self.workspace().write_file(path, merged.content())?;
                index.stage_for_addition(path.to_path_buf(), merged_oid);
            }
        }

        Ok(())
    }

    fn blob_content(&self, oid: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        oid.map(|oid| {
            self.database()
                .parse_object_as_blob(oid)
                .map(|blob| blob.content().clone())
        })
        .transpose()
    }
}

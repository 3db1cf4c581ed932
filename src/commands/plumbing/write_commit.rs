use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Commit the staged changes on top of the first parent's tree
    ///
    /// Advances the current branch, records the commit in the journal and leaves the index
    /// clean and persisted.
    pub(crate) fn write_commit(
        &self,
        index: &mut Index,
        parents: Vec<ObjectId>,
        message: String,
    ) -> anyhow::Result<ObjectId> {
        let parent_tree = match parents.first() {
            Some(parent) => self.database().commit_tree(parent)?,
            None => Default::default(),
        };

        let tree = self.staged_tree(&parent_tree, index);
        let tree_id = self.database().store(&tree)?;

        let commit = Commit::new(parents, tree_id, Commit::timestamp_from_env(), message);
        let commit_id = self.record_commit(&commit)?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        Ok(commit_id)
    }
}

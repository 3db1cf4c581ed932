//! Split point of two branch heads
//!
//! The split point is found from the first-parent chains of both heads (each commit,
//! its first parent, and so on up to the root). Read from the root forward, the two
//! chains agree up to some position; the commit at the last agreeing position is the
//! split point.
//!
//! Only first parents are followed. On histories containing merges this can pick an
//! older ancestor than a full lowest-common-ancestor search would, which in turn changes
//! which paths the merge sees as modified.

use crate::artifacts::objects::object_id::ObjectId;

/// Finds split points, loading first parents through `parent_loader`
pub struct SplitPointFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    parent_loader: ParentLoaderFn,
}

impl<ParentLoaderFn> SplitPointFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    pub fn new(parent_loader: ParentLoaderFn) -> Self {
        Self { parent_loader }
    }

    /// `commit` and its first-parent ancestors, root first
    pub fn first_parent_chain(&self, commit: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let mut chain = vec![commit.clone()];
        let mut current = commit.clone();

        while let Some(parent) = (self.parent_loader)(&current)? {
            chain.push(parent.clone());
            current = parent;
        }
        chain.reverse();

        Ok(chain)
    }

    /// Split point of `head` and `target`, or `None` when their histories share no root
    pub fn find(&self, head: &ObjectId, target: &ObjectId) -> anyhow::Result<Option<ObjectId>> {
        let head_chain = self.first_parent_chain(head)?;
        let target_chain = self.first_parent_chain(target)?;

        let split_point = head_chain
            .iter()
            .zip(target_chain.iter())
            .take_while(|(from_head, from_target)| from_head == from_target)
            .last()
            .map(|(common, _)| common.clone());

        tracing::debug!(
            %head,
            %target,
            split_point = ?split_point.as_ref().map(ObjectId::to_short_oid),
            "split point found"
        );

        Ok(split_point)
    }
}

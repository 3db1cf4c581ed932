use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use std::collections::BTreeSet;
use std::path::Path;

impl Repository {
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let head_tree = self.head_tree()?;

        // Expand directories before staging anything so a missing path aborts the whole batch
        let paths = paths
            .iter()
            .map(|path| self.workspace().list_files(Some(Path::new(path))))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect::<BTreeSet<_>>();

        for path in paths {
            let blob = self.workspace().parse_blob(&path)?;
            let blob_id = blob.object_id()?;

            if head_tree.get(&path) == Some(&blob_id) {
                // back to the committed content: nothing left to stage
                index.unstage(&path);
                continue;
            }

            if index.staged_addition(&path) == Some(&blob_id) {
                continue;
            }

            self.database().store(&blob)?;
            tracing::debug!(path = %path.display(), oid = %blob_id, "staged for addition");
            index.stage_for_addition(path, blob_id);
        }

        index.write_updates()?;

        Ok(())
    }
}

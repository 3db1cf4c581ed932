use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::tree::Tree;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

impl Repository {
    /// Unstage and untrack files
    ///
    /// A file staged for addition is unstaged. A file tracked by the current commit is
    /// staged for removal and deleted from the workspace. A file that is neither is
    /// reported and skipped; the remaining files are still processed. A directory stands
    /// for every tracked or staged file under it.
    pub async fn rm(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        // Resolve every argument first so a path outside the workspace aborts the whole batch
        let paths = paths
            .iter()
            .map(|path| self.workspace().relative_path(Path::new(path)))
            .collect::<Result<Vec<_>, _>>()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let head_tree = self.head_tree()?;

        for path in paths {
            for path in Self::rm_targets(&path, &head_tree, &index) {
                let was_staged = index.is_staged_for_addition(&path);

                if was_staged {
                    index.unstage(&path);
                }

                if head_tree.contains(&path) {
                    index.stage_for_removal(path.clone());
                    self.workspace().remove_file(&path)?;
                    tracing::debug!(path = %path.display(), "staged for removal");
                } else if !was_staged {
                    writeln!(self.writer(), "{}", GitletError::NotTrackedOrStaged(path))?;
                }
            }
        }

        index.write_updates()?;

        Ok(())
    }

    // Tracked or staged files at or below `path`; the path itself when there are none
    fn rm_targets(path: &Path, head_tree: &Tree, index: &Index) -> BTreeSet<PathBuf> {
        let mut targets = head_tree
            .paths()
            .chain(index.additions().keys())
            .filter(|candidate| candidate.starts_with(path))
            .cloned()
            .collect::<BTreeSet<_>>();

        if targets.is_empty() {
            targets.insert(path.to_path_buf());
        }

        targets
    }
}

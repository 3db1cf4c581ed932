use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".gitlet", ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data))
    }

    /// `path` as trees and the index record it: relative to the workspace root, without `.`
    /// or `..` components
    ///
    /// Fails with `OutsideRepository` when the path leaves the workspace.
    pub fn relative_path(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let outside = || GitletError::OutsideRepository(path.to_path_buf());

        let path = if path.is_absolute() {
            path.strip_prefix(self.path.as_ref())
                .map(Path::to_path_buf)
                .or_else(|_| {
                    path.canonicalize()
                        .ok()
                        .and_then(|canonical| {
                            canonical
                                .strip_prefix(self.path.as_ref())
                                .map(Path::to_path_buf)
                                .ok()
                        })
                        .ok_or_else(outside)
                })?
        } else {
            path.to_path_buf()
        };

        let mut relative = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(name) => relative.push(name),
                Component::ParentDir => {
                    if !relative.pop() {
                        return Err(outside().into());
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(outside().into()),
            }
        }

        Ok(relative)
    }

    /// Files under `root_file_path` (or the whole workspace), relative to the workspace root
    ///
    /// Directories are expanded recursively and the control directory is never listed.
    pub fn list_files(&self, root_file_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => self.path.join(self.relative_path(p)?),
            None => self.path.to_path_buf(),
        };

        if !root_file_path.exists() {
            let relative = root_file_path
                .strip_prefix(self.path.as_ref())
                .map(PathBuf::from)
                .unwrap_or(root_file_path);
            return Err(GitletError::FileNotFound(relative).into());
        }

        let mut files = WalkDir::new(&root_file_path)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored_name(entry.file_name().to_string_lossy().as_ref()))
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn is_ignored_name(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                Self::is_ignored_name(name.to_string_lossy().as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        let relative_path = path.strip_prefix(self.path.as_ref()).ok()?;

        if path.is_file() && !Self::is_ignored(relative_path) {
            Some(relative_path.components().collect())
        } else {
            None
        }
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        if !full_path.is_file() {
            return Err(GitletError::FileNotFound(file_path.to_path_buf()).into());
        }

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(Bytes::from(content))
    }

    /// Overwrite (or create) a working file, creating missing parent directories
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directories for: {:?}", file_path)
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete a working file if present and prune the directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if full_path.is_file() {
            std::fs::remove_file(&full_path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        self.prune_empty_parent_dirs(&full_path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory: {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    // Deletions go first so a path replaced by a directory (or the reverse) is free before
    // the target files are written.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        for file_path in migration.paths_for(ActionType::Delete) {
            self.remove_file(file_path)?;
        }

        for action in [ActionType::Modify, ActionType::Add] {
            for file_path in migration.paths_for(action) {
                let blob = migration.load_blob(file_path)?;
                self.write_file(file_path, blob.content())?;
            }
        }

        Ok(())
    }
}

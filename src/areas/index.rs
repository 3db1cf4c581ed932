//! Index (staging area)
//!
//! The index holds the changes the next commit applies on top of the current commit's tree:
//!
//! - `additions`: path -> blob id staged to be committed
//! - `removals`: paths staged for deletion
//!
//! A path is never in both sets: staging it one way drops it from the other. The index does
//! no hashing and touches no working file; callers hand it already computed ids.
//!
//! It is loaded at the start of a command, mutated in memory and written back wholesale.
//! Reads take a shared lock on the index file; writes go to a temporary file under an
//! exclusive lock which is then renamed over the index.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use fake::rand;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.gitlet/index`)
    path: Box<Path>,
    additions: BTreeMap<PathBuf, ObjectId>,
    removals: BTreeSet<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn additions(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<PathBuf> {
        &self.removals
    }

    pub fn staged_addition(&self, path: &Path) -> Option<&ObjectId> {
        self.additions.get(path)
    }

    pub fn is_staged_for_addition(&self, path: &Path) -> bool {
        self.additions.contains_key(path)
    }

    pub fn is_staged_for_removal(&self, path: &Path) -> bool {
        self.removals.contains(path)
    }

    pub fn is_clean(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn stage_for_addition(&mut self, path: PathBuf, oid: ObjectId) {
        self.removals.remove(&path);
        self.additions.insert(path, oid);
        self.changed = true;
    }

    pub fn stage_for_removal(&mut self, path: PathBuf) {
        self.additions.remove(&path);
        self.removals.insert(path);
        self.changed = true;
    }

    /// Drop any staging entry for `path`, returning whether there was one
    pub fn unstage(&mut self, path: &Path) -> bool {
        let was_staged = self.additions.remove(path).is_some() | self.removals.remove(path);
        self.changed |= was_staged;

        was_staged
    }

    pub fn clear(&mut self) {
        self.changed |= !self.is_clean();
        self.additions.clear();
        self.removals.clear();
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file is a clean index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.additions.clear();
        self.removals.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?;
        header.validate()?;

        for _ in 0..header.entries_count {
            match IndexEntry::read_from(&mut reader)? {
                IndexEntry::Addition { path, oid } => {
                    self.additions.insert(path, oid);
                }
                IndexEntry::Removal { path } => {
                    self.removals.insert(path);
                }
            }
        }

        reader.verify()?;
        tracing::trace!(
            additions = self.additions.len(),
            removals = self.removals.len(),
            "loaded index"
        );

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        let additions = self
            .additions
            .iter()
            .map(|(path, oid)| IndexEntry::Addition {
                path: path.clone(),
                oid: oid.clone(),
            });
        let removals = self
            .removals
            .iter()
            .map(|path| IndexEntry::Removal { path: path.clone() });

        additions.chain(removals)
    }

    /// Persist the index if it changed since it was loaded
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let index_dir = self
            .path
            .parent()
            .with_context(|| format!("Invalid index path {}", self.path.display()))?;
        let temp_path = index_dir.join(format!("index-{}.tmp", rand::random::<u32>()));

        {
            let mut temp_file = std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&temp_path)
                .with_context(|| format!("Unable to open index file {}", temp_path.display()))?;
            let lock = file_guard::lock(&mut temp_file, file_guard::Lock::Exclusive, 0, 1)?;
            let mut writer = Checksum::new(lock);

            let entries = self.entries().collect::<Vec<_>>();
            let header = IndexHeader::with_count(entries.len() as u32);
            writer.write(&header.serialize()?)?;

            for entry in entries {
                writer.write(&entry.serialize()?)?;
            }

            writer.write_checksum()?;
        }

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Unable to replace index file {}", self.path.display()))?;
        self.changed = false;

        tracing::debug!(
            additions = self.additions.len(),
            removals = self.removals.len(),
            "index written"
        );

        Ok(())
    }
}

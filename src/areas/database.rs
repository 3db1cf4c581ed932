//! Content-addressable object store
//!
//! Objects live under `objects/<2-hex>/<38-hex>`, keyed by the SHA-1 of their bytes.
//! The store only ever adds files: writing an object that already exists is a no-op and
//! nothing is ever deleted. A new object is written to a temporary file inside its shard
//! directory and renamed into place, so a reader never observes a partially written object.

use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Persist `object` unless it is already present and return its id
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;

        // the empty tree is implied, never written
        if object_id.is_empty_tree() {
            return Ok(object_id);
        }

        let object_path = self.path.join(object_id.to_path());
        if object_path.exists() {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).context(format!(
            "Unable to create object directory {}",
            object_dir.display()
        ))?;

        self.write_object(object_path, object.serialize()?)?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    /// Raw stored bytes of an object, header included
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        self.read_object(object_id)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        if object_id.is_empty_tree() {
            return Ok(ObjectBox::Tree(Box::default()));
        }

        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        let object = match object_type {
            ObjectType::Blob => Blob::deserialize(object_reader).map(|b| ObjectBox::Blob(b.into())),
            ObjectType::Tree => Tree::deserialize(object_reader).map(|t| ObjectBox::Tree(t.into())),
            ObjectType::Commit => {
                Commit::deserialize(object_reader).map(|c| ObjectBox::Commit(c.into()))
            }
        };

        object.map_err(|e| Self::corrupt(object_id, e.to_string()))
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_reader = self.parse_expected(object_id, ObjectType::Blob)?;
        Blob::deserialize(object_reader).map_err(|e| Self::corrupt(object_id, e.to_string()))
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Tree> {
        if object_id.is_empty_tree() {
            return Ok(Tree::default());
        }

        let object_reader = self.parse_expected(object_id, ObjectType::Tree)?;
        Tree::deserialize(object_reader).map_err(|e| Self::corrupt(object_id, e.to_string()))
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_reader = self.parse_expected(object_id, ObjectType::Commit)?;
        Commit::deserialize(object_reader).map_err(|e| Self::corrupt(object_id, e.to_string()))
    }

    /// Tree snapshot recorded by a commit
    pub fn commit_tree(&self, commit_id: &ObjectId) -> anyhow::Result<Tree> {
        let commit = self.parse_object_as_commit(commit_id)?;
        self.parse_object_as_tree(commit.tree_oid())
    }

    fn parse_expected(
        &self,
        object_id: &ObjectId,
        expected: ObjectType,
    ) -> anyhow::Result<impl BufRead> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        if object_type != expected {
            return Err(Self::corrupt(
                object_id,
                format!("expected a {expected}, found a {object_type}"),
            ));
        }

        Ok(object_reader)
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_content = self.read_object(object_id)?;
        let body_len = object_content.len();
        let mut object_reader = Cursor::new(object_content);

        let (object_type, size) = ObjectType::parse_object_header(&mut object_reader)
            .map_err(|e| Self::corrupt(object_id, e.to_string()))?;

        let header_len = object_reader.position() as usize;
        if body_len - header_len != size {
            return Err(Self::corrupt(
                object_id,
                format!("declared size {size} but found {}", body_len - header_len),
            ));
        }

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(GitletError::NotFound(object_id.to_string()).into())
            }
            Err(e) => Err(e).context(format!(
                "Unable to read object file {}",
                object_path.display()
            )),
        }
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;
        file.sync_all()?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    fn corrupt(object_id: &ObjectId, reason: String) -> anyhow::Error {
        GitletError::CorruptObject {
            oid: object_id.to_string(),
            reason,
        }
        .into()
    }

    /// Find all objects whose id starts with the given hexadecimal prefix.
    ///
    /// For prefixes of 2+ characters only the matching shard directory is read; shorter
    /// prefixes scan every shard whose name starts with the prefix. Temporary files of
    /// in-flight writes are never reported.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let mut matches = Vec::new();

        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(matches);
        }
        let prefix = prefix.to_ascii_lowercase();

        let shards = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8)
                .map(|i| format!("{:02x}", i))
                .filter(|dir_name| dir_name.starts_with(&prefix))
                .collect()
        };
        let file_prefix = prefix.get(2..).unwrap_or_default();

        for dir_name in shards {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path)? {
                let file_name = entry?.file_name();
                let file_name = file_name.to_string_lossy();

                if file_name.starts_with(file_prefix)
                    && let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    /// Resolve a full or abbreviated id to exactly one stored object
    ///
    /// Fails with `UnknownId` when nothing matches and `AmbiguousId` when more than one
    /// object does.
    pub fn resolve_prefix(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        let mut matches = self.find_objects_by_prefix(prefix)?;

        match matches.len() {
            0 => Err(GitletError::UnknownId.into()),
            1 => Ok(matches.remove(0)),
            _ => Err(GitletError::AmbiguousId(prefix.to_string()).into()),
        }
    }

    /// Resolve a full or abbreviated id that must name a commit
    pub fn resolve_commit(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        let oid = self.resolve_prefix(prefix)?;

        match self.object_type(&oid)? {
            ObjectType::Commit => Ok(oid),
            _ => Err(GitletError::UnknownId.into()),
        }
    }

    pub fn object_type(&self, object_id: &ObjectId) -> anyhow::Result<ObjectType> {
        if object_id.is_empty_tree() {
            return Ok(ObjectType::Tree);
        }

        let (object_type, _) = self.parse_object_as_bytes(object_id)?;
        Ok(object_type)
    }
}

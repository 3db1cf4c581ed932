//! Tree object
//!
//! A tree is a flat snapshot mapping every tracked, repository-relative path to the id of the
//! blob holding its content. There are no nested directory objects.
//!
//! ## Format
//!
//! ```text
//! tree <size>\0
//! 100644 blob <blob-sha>\0<path>100644 blob <blob-sha>\0<path>...
//! ```
//!
//! The id of a tree is the SHA-1 of the bare entry list, without the `tree <size>\0` header
//! the stored file carries. Blobs and commits hash their whole framed form.
//!
//! Entries are ordered by path. Since a path can never contain a NUL byte, every NUL marks the
//! end of an entry header, which keeps the concatenation unambiguous.
//!
//! The empty tree is never written to the database; it is identified by the reserved
//! all-zero id (see [`ObjectId::empty_tree`]).

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame, hash_bytes};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

const ENTRY_PREFIX: &str = "100644 blob ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<PathBuf, ObjectId>,
}

impl Tree {
    pub fn new(entries: BTreeMap<PathBuf, ObjectId>) -> Self {
        Tree { entries }
    }

    pub fn entries(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.entries
    }

    pub fn get(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, path: PathBuf, oid: ObjectId) {
        self.entries.insert(path, oid);
    }

    pub fn remove(&mut self, path: &Path) {
        self.entries.remove(path);
    }

    /// Concatenated `100644 blob <sha>\0<path>` entries, ordered by path
    fn body(&self) -> anyhow::Result<Vec<u8>> {
        let mut body = Vec::new();

        for (path, oid) in &self.entries {
            let path = path
                .to_str()
                .with_context(|| format!("Non UTF-8 path in tree: {}", path.display()))?;

            body.extend_from_slice(ENTRY_PREFIX.as_bytes());
            body.extend_from_slice(oid.as_ref().as_bytes());
            body.push(b'\0');
            body.extend_from_slice(path.as_bytes());
        }

        Ok(body)
    }

    fn parse_entry_header(segment: &[u8]) -> anyhow::Result<ObjectId> {
        let header = std::str::from_utf8(segment).context("Invalid tree entry header")?;
        let oid = header
            .strip_prefix(ENTRY_PREFIX)
            .context("Invalid tree entry: missing mode and type")?;

        ObjectId::try_parse(oid.to_string())
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        frame(self.object_type(), &self.body()?)
    }
}

impl Unpackable for Tree {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;

        let mut entries = BTreeMap::new();
        if body.is_empty() {
            return Ok(Tree::new(entries));
        }

        // segments: header_0, path_0 + header_1, ..., path_n
        let segments = body.split(|byte| *byte == b'\0').collect::<Vec<_>>();
        let header_len = ENTRY_PREFIX.len() + OBJECT_ID_LENGTH;

        let mut pending_oid = Self::parse_entry_header(segments[0])?;
        for (position, segment) in segments.iter().enumerate().skip(1) {
            let is_last = position == segments.len() - 1;
            let path_len = if is_last {
                segment.len()
            } else {
                segment
                    .len()
                    .checked_sub(header_len)
                    .context("Invalid tree entry: truncated header")?
            };

            let path = std::str::from_utf8(&segment[..path_len]).context("Invalid tree path")?;
            if path.is_empty() {
                anyhow::bail!("Invalid tree entry: empty path");
            }

            let next_oid = if is_last {
                None
            } else {
                Some(Self::parse_entry_header(&segment[path_len..])?)
            };

            entries.insert(PathBuf::from(path), pending_oid);
            match next_oid {
                Some(oid) => pending_oid = oid,
                None => break,
            }
        }

        Ok(Tree::new(entries))
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|(path, oid)| format!("{ENTRY_PREFIX}{oid}\t{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        if self.entries.is_empty() {
            return Ok(ObjectId::empty_tree());
        }

        hash_bytes(&self.body()?)
    }
}

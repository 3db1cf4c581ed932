//! Index entry representation
//!
//! Each entry is either a path staged for addition (with the id of the blob holding its
//! staged content) or a path staged for removal.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::{ByteOrder, NetworkEndian, WriteBytesExt};
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Maximum path length supported in index entries
const MAX_PATH_SIZE: usize = u16::MAX as usize;

const ADDITION_TAG: u8 = b'A';
const REMOVAL_TAG: u8 = b'R';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    Addition { path: PathBuf, oid: ObjectId },
    Removal { path: PathBuf },
}

impl IndexEntry {
    pub fn path(&self) -> &Path {
        match self {
            IndexEntry::Addition { path, .. } | IndexEntry::Removal { path } => path,
        }
    }

    /// Read one entry from a locked index file
    pub(crate) fn read_from(reader: &mut Checksum) -> anyhow::Result<Self> {
        let prefix = reader.read(3)?;
        let tag = prefix[0];
        let path_len = NetworkEndian::read_u16(&prefix[1..3]) as usize;

        let path = reader.read(path_len)?;
        let path = String::from_utf8(path.to_vec()).context("Invalid path in index entry")?;
        let path = PathBuf::from(path);

        match tag {
            ADDITION_TAG => {
                let oid = reader.read(OBJECT_ID_LENGTH)?;
                let oid = String::from_utf8(oid.to_vec()).context("Invalid id in index entry")?;

                Ok(IndexEntry::Addition {
                    path,
                    oid: ObjectId::try_parse(oid)?,
                })
            }
            REMOVAL_TAG => Ok(IndexEntry::Removal { path }),
            other => Err(anyhow!("Unknown index entry tag: {other:#x}")),
        }
    }
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let path = self
            .path()
            .to_str()
            .with_context(|| format!("Non UTF-8 path: {}", self.path().display()))?;

        if path.len() > MAX_PATH_SIZE {
            return Err(anyhow!("Path too long for index: {path}"));
        }

        let mut bytes = Vec::new();
        let tag = match self {
            IndexEntry::Addition { .. } => ADDITION_TAG,
            IndexEntry::Removal { .. } => REMOVAL_TAG,
        };
        bytes.write_u8(tag)?;
        bytes.write_u16::<NetworkEndian>(path.len() as u16)?;
        bytes.write_all(path.as_bytes())?;

        if let IndexEntry::Addition { oid, .. } = self {
            bytes.write_all(oid.as_ref().as_bytes())?;
        }

        Ok(Bytes::from(bytes))
    }
}

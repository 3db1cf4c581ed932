use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{BufRead, Write};

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    /// Rebuild the object from its body; the `<kind> <size>\0` header has already been read
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> Result<ObjectId> {
        hash_bytes(&self.serialize()?)
    }
}

pub fn hash_bytes(content: &[u8]) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(content);

    let oid = hasher.finalize();
    ObjectId::try_parse(format!("{oid:x}"))
}

/// Prefix `body` with the `<kind> <size>\0` header shared by every object kind
pub fn frame(object_type: ObjectType, body: &[u8]) -> Result<Bytes> {
    let mut object_bytes = Vec::with_capacity(body.len() + 16);
    let header = format!("{} {}\0", object_type.as_str(), body.len());
    object_bytes.write_all(header.as_bytes())?;
    object_bytes.write_all(body)?;

    Ok(Bytes::from(object_bytes))
}

#[derive(Debug)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}

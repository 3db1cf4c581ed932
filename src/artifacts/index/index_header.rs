use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object::{Packable, Unpackable};
use anyhow::anyhow;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub(crate) marker: String,
    pub(crate) version: u32,
    pub(crate) entries_count: u32,
}

impl IndexHeader {
    pub(crate) fn with_count(entries_count: u32) -> Self {
        IndexHeader::new(String::from(SIGNATURE), VERSION, entries_count)
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if self.marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if self.version != VERSION {
            return Err(anyhow!("Unsupported index file version: {}", self.version));
        }

        Ok(())
    }
}

impl Packable for IndexHeader {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);
        bytes.write_all(self.marker.as_bytes())?;
        bytes.write_u32::<NetworkEndian>(self.version)?;
        bytes.write_u32::<NetworkEndian>(self.entries_count)?;

        Ok(Bytes::from(bytes))
    }
}

impl Unpackable for IndexHeader {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut marker = [0u8; 4];
        reader
            .read_exact(&mut marker)
            .map_err(|_| anyhow!("Invalid header size"))?;

        let marker =
            String::from_utf8(marker.to_vec()).map_err(|_| anyhow!("Invalid marker in index header"))?;
        let version = reader.read_u32::<NetworkEndian>()?;
        let entries_count = reader.read_u32::<NetworkEndian>()?;

        Ok(IndexHeader {
            marker,
            version,
            entries_count,
        })
    }
}

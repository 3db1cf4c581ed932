//! Index file format
//!
//! The index (staging area) records the additions and removals that the next commit applies
//! on top of the current commit's tree.
//!
//! ## File Format (Version 1)
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "GLIX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length):
//!   - Stage tag: 'A' (addition) or 'R' (removal) (1 byte)
//!   - Path length (2 bytes) followed by the UTF-8 path
//!   - Additions only: 40 hex characters of the staged blob id
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! All integers are big-endian.

pub mod checksum;
pub mod index_entry;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12; // 4 bytes for marker, 4 for version, 4 for entries_count

/// Magic signature identifying index files
pub const SIGNATURE: &str = "GLIX";

/// Index file format version
pub const VERSION: u32 = 1;

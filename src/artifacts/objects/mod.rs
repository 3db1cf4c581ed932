//! Gitlet object types and operations
//!
//! Every snapshot is stored as an immutable object identified by the SHA-1 of its bytes:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Flat map of tracked paths to blob ids
//! - **Commit**: Tree id, parent commit ids, timestamp and message
//!
//! All objects share the framed storage format `<kind> <size>\0<body>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

//! Data structures and algorithms
//!
//! - `branch`: Branch name validation
//! - `checkout`: Working directory migration and the untracked file guard
//! - `core`: Error kinds and the pager writer
//! - `index`: On-disk index record (header, entries, checksum)
//! - `log`: Journal records and commit display
//! - `merge`: Split point, decision table and conflict content
//! - `objects`: Blob, tree and commit objects and their ids
//! - `status`: Workspace status computation

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;

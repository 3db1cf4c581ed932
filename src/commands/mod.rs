//! Command implementations
//!
//! - `plumbing`: Low-level object store commands (hash-object, cat-file)
//! - `porcelain`: User-facing version control commands (add, commit, merge, ...)

pub mod plumbing;
pub mod porcelain;

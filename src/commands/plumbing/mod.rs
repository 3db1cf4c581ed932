//! Plumbing commands (low-level object store operations)
//!
//! ## Commands
//!
//! - `hash-object`: Compute a file's blob id and optionally store the blob
//! - `cat-file`: Print the content of a stored object
//!
//! `write_commit` is the shared commit-writing step behind `commit` and `merge`.

pub mod cat_file;
pub mod hash_object;
mod write_commit;

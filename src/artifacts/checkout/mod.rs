//! Checkout operations
//!
//! Switching the workspace between commits: planning which files to delete and write,
//! and refusing to clobber untracked work.

pub mod migration;

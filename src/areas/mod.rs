//! Persistent repository areas
//!
//! - `database`: Content-addressable object store (blobs, trees, commits)
//! - `index`: Staging area of pending additions and removals
//! - `refs`: Branch references and HEAD
//! - `journal`: Append-only record of every commit (`logs/HEAD`)
//! - `repository`: The context bundling every area, passed to each command
//! - `workspace`: Working directory file operations

pub mod database;
pub mod index;
pub mod journal;
pub mod refs;
pub mod repository;
pub mod workspace;

//! Porcelain commands (user-facing version control operations)
//!
//! Each command is an `impl Repository` block. Commands load the index at their start,
//! mutate it in memory and persist it before returning.
//!
//! ## Commands
//!
//! - `init`: Create the control directory and the initial commit
//! - `add`: Stage files for addition
//! - `rm`: Unstage files or stage them for removal
//! - `commit`: Record the staged changes
//! - `log`: Show history (`log`, `global-log`, `find`)
//! - `status`: Show branches, staged changes and workspace changes
//! - `checkout`: Restore files or switch branches
//! - `branch`: Create or delete branches
//! - `reset`: Move the current branch to another commit
//! - `merge`: Three-way merge of another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;

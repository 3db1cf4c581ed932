use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::journal::Journal;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::log::log_record::LogRecord;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::status::status_info::Status;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the control directory at the workspace root
pub const CONTROL_DIR: &str = ".gitlet";

/// Every area of one repository, rooted at an explicit working directory
///
/// Commands are methods on this type; nothing about the repository location lives in
/// process-wide state.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    journal: Journal,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }

        let path = path.canonicalize()?;
        let control_path = path.join(CONTROL_DIR);

        let index = Index::new(control_path.join("index").into_boxed_path());
        let database = Database::new(control_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(control_path.clone().into_boxed_path());
        let journal = Journal::new(control_path.join("logs").join("HEAD").into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
            journal,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> Box<Path> {
        self.path.join(CONTROL_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn status_report(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    pub fn is_initialized(&self) -> bool {
        self.control_path().is_dir()
    }

    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GitletError::NotInitialized.into())
        }
    }

    /// Tree of the commit the current branch points at
    pub fn head_tree(&self) -> anyhow::Result<Tree> {
        let head = self.refs.read_head()?;
        self.database.commit_tree(&head)
    }

    /// Store a new commit and record it in the journal
    pub fn record_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let commit_id = self.database.store(commit)?;

        self.journal.append(&LogRecord::new(
            commit_id.clone(),
            commit.timestamp().timestamp(),
            commit.message().to_string(),
        ))?;
        tracing::info!(oid = %commit_id, parents = commit.parents().len(), "commit recorded");

        Ok(commit_id)
    }

    /// Rewrite the workspace from the tree of `current` to the tree of `target`
    ///
    /// Fails without touching any file when an untracked file is in the way.
    pub fn migrate_workspace(&self, current: &ObjectId, target: &ObjectId) -> anyhow::Result<()> {
        let current_tree = self.database.commit_tree(current)?;
        let target_tree = self.database.commit_tree(target)?;

        Migration::new(self, current_tree, target_tree).apply_changes()
    }

    /// Build the tree of a new commit: the parent tree with the staged removals, then the
    /// staged additions, applied on top
    pub fn staged_tree(&self, parent_tree: &Tree, index: &Index) -> Tree {
        let mut tree = parent_tree.clone();

        for path in index.removals() {
            tree.remove(path);
        }

        for (path, oid) in index.additions() {
            tree.insert(path.clone(), oid.clone());
        }

        tree
    }

    /// Blob id the working file at `path` would get
    pub fn workspace_oid(&self, path: &Path) -> anyhow::Result<ObjectId> {
        self.workspace.parse_blob(path)?.object_id()
    }
}
